pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{LogFormat, WorkloadConfig};
pub use core::engine::WorkloadEngine;
pub use domain::model::{PhaseKind, PhaseReport, RunReport, RunState};
pub use utils::error::{Result, WorkloadError};
