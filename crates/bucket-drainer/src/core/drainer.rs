use crate::core::client::storage::{StorageClient, StorageError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced by [`BucketDrainer::drain`].
///
/// Both variants abort the drain immediately. Retry policy, if any, belongs to
/// the storage client, not to the drain loop.
#[derive(Error, Debug)]
pub enum DrainError {
    #[error("Failed to list objects in bucket '{bucket}': {source}")]
    ListFailed {
        bucket: String,
        #[source]
        source: StorageError,
    },

    #[error("Failed to delete object '{key}' from bucket '{bucket}': {source}")]
    DeleteFailed {
        bucket: String,
        key: String,
        #[source]
        source: StorageError,
    },
}

/// Removes every object from a bucket so the bucket becomes eligible for
/// deletion.
///
/// The storage client is an injected capability; the drainer holds no other
/// state, and one instance can drain any number of buckets. Listing and
/// deletion are not transactional against concurrent writers, so an object
/// written after its page was listed may survive the drain.
pub struct BucketDrainer {
    client: Arc<dyn StorageClient>,
}

impl BucketDrainer {
    pub fn new(client: Arc<dyn StorageClient>) -> Self {
        Self { client }
    }

    /// Delete all objects in `bucket`, following continuation tokens until the
    /// listing is exhausted.
    ///
    /// Deletions are issued sequentially, in listed order, one page at a time.
    /// The first failed list or delete aborts the loop and is returned
    /// unmodified.
    pub async fn drain(&self, bucket: &str) -> Result<(), DrainError> {
        let mut continuation_token: Option<String> = None;
        let mut deleted: u64 = 0;
        let mut pages: u64 = 0;

        loop {
            let page = self
                .client
                .list_objects(bucket, continuation_token.take())
                .await
                .map_err(|source| DrainError::ListFailed { bucket: bucket.to_string(), source })?;
            pages += 1;
            debug!(bucket, page = pages, keys = page.keys.len(), "Fetched listing page");

            for key in &page.keys {
                self.client.delete_object(bucket, key).await.map_err(|source| DrainError::DeleteFailed {
                    bucket: bucket.to_string(),
                    key: key.clone(),
                    source,
                })?;
                deleted += 1;
            }

            if !page.truncated {
                break;
            }
            match page.continuation_token {
                Some(token) => continuation_token = Some(token),
                // A truncated page without a cursor would re-read page one forever.
                None => {
                    return Err(DrainError::ListFailed {
                        bucket: bucket.to_string(),
                        source: StorageError::MissingContinuationToken,
                    });
                }
            }
        }

        info!(bucket, deleted, pages, "Bucket drained");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::storage::{ListPage, MockStorageClient};
    use aws_sdk_s3::error::SdkError;
    use aws_sdk_s3::operation::delete_object::DeleteObjectError;
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use rstest::rstest;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    fn page(keys: &[&str], token: Option<&str>) -> ListPage {
        ListPage {
            keys: keys.iter().map(|key| key.to_string()).collect(),
            truncated: token.is_some(),
            continuation_token: token.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn empty_bucket_issues_no_deletes() {
        let mut storage = MockStorageClient::new();
        storage
            .expect_list_objects()
            .with(eq("b1"), eq(None::<String>))
            .times(1)
            .returning(|_, _| Ok(page(&[], None)));
        storage.expect_delete_object().times(0);

        let drainer = BucketDrainer::new(Arc::new(storage));
        assert!(drainer.drain("b1").await.is_ok());
    }

    #[tokio::test]
    async fn single_page_deletes_every_key_in_listed_order() {
        let keys = ["key0", "key1", "key2", "key3", "key4"];

        let mut storage = MockStorageClient::new();
        storage
            .expect_list_objects()
            .with(eq("b2"), eq(None::<String>))
            .times(1)
            .returning(move |_, _| Ok(page(&keys, None)));

        let mut seq = Sequence::new();
        for key in keys {
            storage
                .expect_delete_object()
                .with(eq("b2"), eq(key))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }

        let drainer = BucketDrainer::new(Arc::new(storage));
        assert!(drainer.drain("b2").await.is_ok());
    }

    #[tokio::test]
    async fn drain_follows_continuation_tokens_across_pages() {
        let first: Vec<String> = (0..500).map(|i| format!("key{i:04}")).collect();
        let second: Vec<String> = (500..1000).map(|i| format!("key{i:04}")).collect();

        let mut storage = MockStorageClient::new();
        let mut seq = Sequence::new();

        let first_page = ListPage { keys: first, truncated: true, continuation_token: Some("T1".to_string()) };
        storage
            .expect_list_objects()
            .with(eq("b3"), eq(None::<String>))
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_, _| Ok(first_page));

        let second_page = ListPage { keys: second, truncated: false, continuation_token: None };
        storage
            .expect_list_objects()
            .with(eq("b3"), eq(Some("T1".to_string())))
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_, _| Ok(second_page));

        storage.expect_delete_object().times(1000).returning(|_, _| Ok(()));

        let drainer = BucketDrainer::new(Arc::new(storage));
        assert!(drainer.drain("b3").await.is_ok());
    }

    #[rstest]
    #[case::single_page(vec![5])]
    #[case::two_pages(vec![3, 2])]
    #[case::one_key_per_page(vec![1, 1, 1, 1, 1])]
    #[tokio::test]
    async fn delete_count_is_independent_of_page_boundaries(#[case] split: Vec<usize>) {
        let keys: Vec<String> = (0..5).map(|i| format!("key{i}")).collect();
        let page_count = split.len();

        let mut pages = VecDeque::new();
        let mut offset = 0;
        for (index, size) in split.iter().enumerate() {
            let last = index == page_count - 1;
            pages.push_back(ListPage {
                keys: keys[offset..offset + size].to_vec(),
                truncated: !last,
                continuation_token: (!last).then(|| format!("T{index}")),
            });
            offset += size;
        }

        let pages = Mutex::new(pages);
        let mut storage = MockStorageClient::new();
        storage
            .expect_list_objects()
            .times(page_count)
            .returning(move |_, _| Ok(pages.lock().unwrap().pop_front().unwrap()));
        storage.expect_delete_object().times(5).returning(|_, _| Ok(()));

        let drainer = BucketDrainer::new(Arc::new(storage));
        assert!(drainer.drain("b2").await.is_ok());
    }

    #[tokio::test]
    async fn delete_failure_aborts_without_touching_later_keys() {
        let keys = ["key0", "key1", "key2", "key3", "key4"];

        let mut storage = MockStorageClient::new();
        storage.expect_list_objects().times(1).returning(move |_, _| Ok(page(&keys, None)));

        let mut seq = Sequence::new();
        for key in ["key0", "key1"] {
            storage
                .expect_delete_object()
                .with(eq("b2"), eq(key))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }
        storage.expect_delete_object().with(eq("b2"), eq("key2")).times(1).in_sequence(&mut seq).returning(|_, _| {
            Err(StorageError::DeleteObjectError(SdkError::<DeleteObjectError>::timeout_error("simulated timeout")))
        });

        let drainer = BucketDrainer::new(Arc::new(storage));
        let err = drainer.drain("b2").await.unwrap_err();
        assert!(matches!(err, DrainError::DeleteFailed { ref key, .. } if key == "key2"));
    }

    #[tokio::test]
    async fn list_failure_is_surfaced_as_list_failed() {
        let mut storage = MockStorageClient::new();
        storage.expect_list_objects().times(1).returning(|_, _| {
            Err(StorageError::ListObjectsError(SdkError::<ListObjectsV2Error>::timeout_error("simulated timeout")))
        });
        storage.expect_delete_object().times(0);

        let drainer = BucketDrainer::new(Arc::new(storage));
        let err = drainer.drain("b1").await.unwrap_err();
        assert!(matches!(err, DrainError::ListFailed { .. }));
    }

    #[tokio::test]
    async fn truncated_page_without_token_fails_instead_of_looping() {
        let mut storage = MockStorageClient::new();
        storage.expect_list_objects().times(1).returning(|_, _| {
            Ok(ListPage { keys: vec!["key0".to_string()], truncated: true, continuation_token: None })
        });
        storage.expect_delete_object().times(1).returning(|_, _| Ok(()));

        let drainer = BucketDrainer::new(Arc::new(storage));
        let err = drainer.drain("b1").await.unwrap_err();
        assert!(matches!(err, DrainError::ListFailed { source: StorageError::MissingContinuationToken, .. }));
    }

    #[tokio::test]
    async fn second_drain_of_emptied_bucket_issues_no_deletes() {
        let mut storage = MockStorageClient::new();
        let mut seq = Sequence::new();
        storage
            .expect_list_objects()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(page(&["key0", "key1"], None)));
        storage.expect_list_objects().times(1).in_sequence(&mut seq).returning(|_, _| Ok(page(&[], None)));
        storage.expect_delete_object().times(2).returning(|_, _| Ok(()));

        let drainer = BucketDrainer::new(Arc::new(storage));
        assert!(drainer.drain("b1").await.is_ok());
        assert!(drainer.drain("b1").await.is_ok());
    }
}
