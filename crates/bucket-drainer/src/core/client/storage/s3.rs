use crate::core::client::storage::{ListPage, StorageClient, StorageError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::sync::Arc;

/// S3 rejects an explicit location constraint for this region.
const UNCONSTRAINED_LOCATION: &str = "us-east-1";

#[derive(Clone, Debug)]
pub struct AWSS3 {
    client: Arc<Client>,
}

impl AWSS3 {
    /// Creates a new instance of AWSS3 with the provided AWS configuration.
    ///
    /// # Arguments
    /// * `aws_config` - The AWS configuration.
    ///
    /// # Returns
    /// * `Self` - The new instance of AWSS3.
    pub fn new(aws_config: &SdkConfig) -> Self {
        let s3_config_builder = aws_sdk_s3::config::Builder::from(aws_config).force_path_style(true);
        let client = Client::from_conf(s3_config_builder.build());

        Self { client: Arc::new(client) }
    }
}

#[async_trait]
impl StorageClient for AWSS3 {
    async fn create_bucket(&self, bucket: &str, location_constraint: &str) -> Result<(), StorageError> {
        let mut bucket_builder = self.client.create_bucket().bucket(bucket);

        if location_constraint != UNCONSTRAINED_LOCATION {
            let constraint = BucketLocationConstraint::from(location_constraint);
            let cfg = CreateBucketConfiguration::builder().location_constraint(constraint).build();
            bucket_builder = bucket_builder.create_bucket_configuration(cfg);
        }

        bucket_builder.send().await?;
        Ok(())
    }

    async fn bucket_exists(&self, bucket: &str) -> Result<bool, StorageError> {
        Ok(self.client.head_bucket().bucket(bucket).send().await.is_ok())
    }

    /// Fetch one ListObjectsV2 page, resuming from the given continuation token.
    ///
    /// # Arguments
    /// * `bucket` - The bucket to list.
    /// * `continuation_token` - Cursor from the previous page, if any.
    ///
    /// # Returns
    /// * `Result<ListPage, StorageError>` - The keys of the page plus pagination state.
    async fn list_objects(&self, bucket: &str, continuation_token: Option<String>) -> Result<ListPage, StorageError> {
        let output =
            self.client.list_objects_v2().bucket(bucket).set_continuation_token(continuation_token).send().await?;

        let keys = output.contents().iter().filter_map(|object| object.key().map(str::to_string)).collect();

        Ok(ListPage {
            keys,
            truncated: output.is_truncated().unwrap_or(false),
            continuation_token: output.next_continuation_token().map(str::to_string),
        })
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), StorageError> {
        self.client.put_object().bucket(bucket).key(key).body(body.into()).send().await?;

        Ok(())
    }

    /// Delete the object with the specified key.
    ///
    /// Deleting a key that no longer exists is not an error on S3, so the call
    /// is idempotent.
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        Ok(self.client.delete_object().bucket(bucket).key(key).send().await.map(|_| ())?)
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        Ok(self.client.delete_bucket().bucket(bucket).send().await.map(|_| ())?)
    }
}
