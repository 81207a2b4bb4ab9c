//! Scheduling domain models.
//!
//! Input ([`ProcessSpec`]), policy selector ([`Algorithm`]) and output
//! ([`Timeline`] of [`ExecutionInterval`]s). All models are plain data and
//! serialize with serde, so a presenter can consume them without linking
//! against the engine.
//!
//! # Domain Mappings
//!
//! | cpu-sched | OS textbook | Presenter |
//! |-----------|-------------|-----------|
//! | ProcessSpec | Process / CPU burst | Input row |
//! | ExecutionInterval | Dispatch | Gantt bar |
//! | Timeline | Schedule | Gantt chart |

mod algorithm;
mod process;
mod timeline;

pub use algorithm::Algorithm;
pub use process::ProcessSpec;
pub use timeline::{ExecutionInterval, Timeline};
