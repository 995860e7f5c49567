use crate::domain::model::{BallDropInput, BallDropReport, BallSample};
use crate::domain::ports::{Exercise, InputSource};
use crate::utils::error::Result;
use std::fmt::Write;

pub const HEIGHT_PROMPT: &str = "Enter height (m): ";
pub const DEFAULT_GRAVITY: f64 = 9.8;
pub const DEFAULT_SECONDS: u32 = 5;

/// Height of a ball dropped from `tower_height` after `second` seconds.
///
/// Returns `None` once the ball has hit the ground.
pub fn height_at(tower_height: f64, gravity: f64, second: u32) -> Option<f64> {
    let t = f64::from(second);
    let fallen = gravity * (t * t) / 2.0;
    let height = tower_height - fallen;
    (height > 0.0).then_some(height)
}

pub struct BallDropExercise {
    gravity: f64,
    seconds: u32,
}

impl BallDropExercise {
    pub fn new(gravity: f64, seconds: u32) -> Self {
        Self { gravity, seconds }
    }
}

impl Default for BallDropExercise {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY, DEFAULT_SECONDS)
    }
}

impl Exercise for BallDropExercise {
    type Input = BallDropInput;
    type Output = BallDropReport;

    fn name(&self) -> &'static str {
        "ball-drop"
    }

    fn read(&self, source: &mut dyn InputSource) -> Result<BallDropInput> {
        let tower_height = source.read_f64(HEIGHT_PROMPT)?;
        Ok(BallDropInput { tower_height })
    }

    fn evaluate(&self, input: BallDropInput) -> BallDropReport {
        let samples = (0..=self.seconds)
            .map(|second| BallSample {
                second,
                height: height_at(input.tower_height, self.gravity, second),
            })
            .collect();

        BallDropReport {
            tower_height: input.tower_height,
            samples,
        }
    }

    fn render(&self, output: &BallDropReport) -> String {
        let mut text = String::new();
        for sample in &output.samples {
            // 寫入 String 不會失敗
            let _ = match sample.height {
                Some(height) => writeln!(
                    text,
                    "At {} seconds, the ball is at height: {:.2} metres",
                    sample.second, height
                ),
                None => writeln!(text, "At {} seconds, the ball is on the ground.", sample.second),
            };
        }
        text
    }
}
