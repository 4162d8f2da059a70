use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::operation::delete_bucket::DeleteBucketError;
use aws_sdk_s3::operation::delete_object::DeleteObjectError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_sdk_s3::operation::put_object::PutObjectError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// AWS SDK errors, one per S3 operation
    #[error("Failed to create bucket: {0}")]
    CreateBucketError(#[from] SdkError<CreateBucketError>),
    #[error("Failed to list objects: {0}")]
    ListObjectsError(#[from] SdkError<ListObjectsV2Error>),
    #[error("Failed to put object: {0}")]
    UnableToPutObject(#[from] SdkError<PutObjectError>),
    #[error("Unable to delete object: {0}")]
    DeleteObjectError(#[from] SdkError<DeleteObjectError>),
    #[error("Failed to delete bucket: {0}")]
    DeleteBucketError(#[from] SdkError<DeleteBucketError>),

    /// The service claimed more pages exist but returned no cursor to reach them
    #[error("Listing reported truncated results without a continuation token")]
    MissingContinuationToken,
}
