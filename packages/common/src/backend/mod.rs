mod error;
mod traits;

pub mod memory;

pub use error::BackendError;
pub use traits::AnalysisBackend;
