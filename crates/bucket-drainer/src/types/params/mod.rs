use crate::cli::storage::aws_s3::AWSS3CliArgs;
use crate::DrainerError;

/// StorageArgs - Arguments used to address the target bucket
///
/// The bucket name is an opaque identifier; uniqueness and existence are
/// enforced by the remote service.
#[derive(Debug, Clone)]
pub struct StorageArgs {
    pub bucket_name: String,
    pub bucket_location: String,
}

impl TryFrom<AWSS3CliArgs> for StorageArgs {
    type Error = DrainerError;

    fn try_from(args: AWSS3CliArgs) -> Result<Self, Self::Error> {
        if args.bucket_name.trim().is_empty() {
            return Err(DrainerError::InvalidConfiguration("bucket name cannot be empty".to_string()));
        }
        Ok(Self { bucket_name: args.bucket_name, bucket_location: args.bucket_location })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_name_must_not_be_empty() {
        let args = AWSS3CliArgs { bucket_name: "   ".to_string(), bucket_location: "us-east-1".to_string() };
        assert!(StorageArgs::try_from(args).is_err());
    }

    #[test]
    fn valid_args_pass_through() {
        let args = AWSS3CliArgs { bucket_name: "drain-me".to_string(), bucket_location: "eu-west-1".to_string() };
        let storage_args = StorageArgs::try_from(args).unwrap();

        assert_eq!(storage_args.bucket_name, "drain-me");
        assert_eq!(storage_args.bucket_location, "eu-west-1");
    }
}
