use clap::Args;

/// Parameters used to config AWS S3.
#[derive(Debug, Clone, Args)]
pub struct AWSS3CliArgs {
    /// The name of the S3 bucket.
    #[arg(env = "BUCKET_DRAINER_BUCKET_NAME", long)]
    pub bucket_name: String,

    /// Location constraint applied when the bucket is created.
    #[arg(env = "BUCKET_DRAINER_BUCKET_LOCATION", long, default_value = "us-east-1")]
    pub bucket_location: String,
}
