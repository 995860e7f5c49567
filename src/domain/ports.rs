use crate::utils::error::Result;
use serde::Serialize;

/// 互動式輸入來源：先顯示提示，再阻塞直到取得一個 token
pub trait InputSource {
    fn read_f64(&mut self, prompt: &str) -> Result<f64>;
    fn read_i64(&mut self, prompt: &str) -> Result<i64>;
    fn read_symbol(&mut self, prompt: &str) -> Result<char>;
}

/// One textbook exercise: read its inputs, compute, render the answer.
pub trait Exercise {
    type Input;
    type Output: Serialize;

    fn name(&self) -> &'static str;
    fn read(&self, source: &mut dyn InputSource) -> Result<Self::Input>;
    fn evaluate(&self, input: Self::Input) -> Self::Output;
    fn render(&self, output: &Self::Output) -> String;
}
