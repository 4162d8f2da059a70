/// Contains the CLI arguments for the drainer binary
pub mod cli;
/// Contains the storage client and the drain loop
pub mod core;
/// Contains the error taxonomy of the crate
pub mod error;
/// Typed parameters derived from CLI arguments
pub mod types;
/// Contains utility modules
pub mod utils;

pub use error::{DrainerError, DrainerResult};

// Re-export the client abstraction and the drainer for convenience
pub use crate::core::client::storage::StorageClient;
pub use crate::core::drainer::BucketDrainer;
