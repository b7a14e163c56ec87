#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::ExercisesConfig;
pub use crate::core::{
    brute_force::{BruteForceAttacker, PasswordVault},
    calculator::{Calculation, CalculatorSession, Operation},
    queue::CircularArrayQueue,
    stats::SequenceStats,
    tree::{Node, Tree},
};
pub use utils::error::{ExerciseError, Result};
