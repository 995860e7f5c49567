pub mod calculator;
pub mod format;
pub mod input;
pub mod runner;

pub use crate::domain::model::{Calculation, Evaluation, Operator};
pub use crate::domain::ports::{Exercise, InputSource};
pub use crate::utils::error::Result;
