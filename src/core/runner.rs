use crate::core::format::{render_output, OutputFormat};
use crate::domain::ports::{Exercise, InputSource};
use crate::utils::error::Result;

pub struct ExerciseRunner {
    format: OutputFormat,
}

impl ExerciseRunner {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 讀取 → 計算 → 輸出，回傳要寫到 stdout 的文字
    pub fn run<E: Exercise>(&self, exercise: &E, source: &mut dyn InputSource) -> Result<String> {
        tracing::debug!("Starting exercise: {}", exercise.name());

        // Read
        let input = exercise.read(source)?;
        tracing::debug!("Input collected for {}", exercise.name());

        // Evaluate
        let output = exercise.evaluate(input);

        // Render
        let rendered = render_output(exercise, &output, self.format)?;
        tracing::debug!("Rendered {} bytes of {:?} output", rendered.len(), self.format);

        Ok(rendered)
    }
}

impl Default for ExerciseRunner {
    fn default() -> Self {
        Self::new(OutputFormat::Text)
    }
}
