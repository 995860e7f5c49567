pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::TomlConfig;
pub use crate::core::{format::OutputFormat, input::TokenReader, runner::ExerciseRunner};
pub use utils::error::{QuizError, Result};
