pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use toml_config::ExercisesConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pjv")]
#[command(about = "Small programming exercises: vault cracking, calculator, ring queue, tree, statistics")]
pub struct CliConfig {
    /// Path to an optional TOML file with exercise defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Brute-force a password over a character set
    Crack {
        /// Characters to build guesses from (falls back to attacker.charset)
        #[arg(long)]
        charset: Option<String>,

        /// Password locked in the vault
        #[arg(long)]
        password: String,

        /// Guess length, defaults to the password length
        #[arg(long)]
        length: Option<usize>,

        /// Log CPU and memory usage around the search
        #[arg(long)]
        monitor: bool,

        #[arg(long)]
        json: bool,
    },

    /// Interactive four-function calculator on stdin/stdout
    Calc,

    /// Enqueue items into a ring queue and print what it holds
    Queue {
        #[arg(long)]
        capacity: Option<usize>,

        #[arg(long)]
        json: bool,

        items: Vec<String>,
    },

    /// Build a balanced tree from integers and pretty-print it
    Tree {
        #[arg(long)]
        json: bool,

        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Feed numbers into the windowed statistics accumulator
    Stats {
        #[arg(long)]
        window: Option<usize>,

        #[arg(long)]
        json: bool,

        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入並驗證 `--config` 指定的檔案；未指定時使用預設值
    pub fn file_config(&self) -> Result<ExercisesConfig> {
        let config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                ExercisesConfig::from_file(path)?
            }
            None => ExercisesConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }
}
