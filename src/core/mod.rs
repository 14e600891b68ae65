pub mod engine;
pub mod scanner;

pub use crate::domain::model::{MarkerHit, ScanOutcome, ScanReport};
pub use crate::domain::ports::{ContentSource, ScanSettings};
pub use crate::utils::error::Result;
