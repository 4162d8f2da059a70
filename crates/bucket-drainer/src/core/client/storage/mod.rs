pub mod error;
pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
pub use error::StorageError;
use mockall::automock;

/// One page of an object listing.
///
/// `continuation_token` is an opaque cursor and is expected to be present
/// whenever `truncated` is set.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// Object keys present in the bucket when the page was produced
    pub keys: Vec<String>,

    /// Whether further pages exist
    pub truncated: bool,

    /// Cursor for fetching the next page
    pub continuation_token: Option<String>,
}

/// Trait defining object storage operations
#[automock]
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Create a bucket in the given location
    async fn create_bucket(&self, bucket: &str, location_constraint: &str) -> Result<(), StorageError>;

    /// Check whether a bucket exists and is reachable
    async fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError>;

    /// Fetch one page of object keys, resuming from a continuation token
    async fn list_objects(&self, bucket: &str, continuation_token: Option<String>) -> Result<ListPage, StorageError>;

    /// Store an object under the given key
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), StorageError>;

    /// Delete a single object
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StorageError>;

    /// Delete a bucket, which must already be empty
    async fn delete_bucket(&self, bucket: &str) -> Result<(), StorageError>;
}
