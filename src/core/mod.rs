pub mod brute_force;
pub mod calculator;
pub mod queue;
pub mod stats;
pub mod tree;

pub use crate::domain::model::{CrackOutcome, QueueSnapshot, StatsSnapshot};
pub use crate::domain::ports::{Thief, Vault};
pub use crate::utils::error::Result;
