use inv_map::MapError;
use thiserror::Error;

/// Errors surfaced by the driver.
///
/// Normal round processing has no error paths: dangling links and stranded
/// aliens are anticipated conditions handled by policy (lazy pruning,
/// staying put), not by raising errors.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("map error: {0}")]
    Map(#[from] MapError),
}

pub type SimResult<T> = Result<T, SimError>;
