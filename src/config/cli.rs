use crate::config::toml_config::TomlConfig;
use crate::core::format::OutputFormat;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "textbook-exercises")]
#[command(about = "Interactive textbook exercises: calculator, sphere volume, sales tax, ball drop")]
pub struct CliConfig {
    /// Optional TOML file with exercise defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// How the answer is written to stdout
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Read two numbers and an operator, print `<x> <op> <y> is <result>`
    Calc,

    /// Volume of a sphere with a whole-number radius
    Sphere {
        #[arg(long, allow_negative_numbers = true)]
        radius: Option<i64>,
    },

    /// Amount with a percentage tax added
    Tax {
        /// Tax rate in percent
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,
    },

    /// Height of a ball dropped from a tower, second by second
    BallDrop {
        #[arg(long)]
        gravity: Option<f64>,

        #[arg(long)]
        seconds: Option<u32>,
    },
}

impl CliConfig {
    /// 載入 --config 指定的檔案；未指定時使用預設值
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// 應用命令列覆蓋設定；命令列的值優先於設定檔
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        match &self.command {
            Command::Calc => {}
            Command::Sphere { radius } => {
                if let Some(radius) = radius {
                    config.sphere.get_or_insert_with(Default::default).radius = Some(*radius);
                }
            }
            Command::Tax { rate } => {
                if let Some(rate) = rate {
                    config.tax.get_or_insert_with(Default::default).rate = Some(*rate);
                }
            }
            Command::BallDrop { gravity, seconds } => {
                let ball_drop = config.ball_drop.get_or_insert_with(Default::default);
                if let Some(gravity) = gravity {
                    ball_drop.gravity = Some(*gravity);
                }
                if let Some(seconds) = seconds {
                    ball_drop.seconds = Some(*seconds);
                }
            }
        }
    }
}
