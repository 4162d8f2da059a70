use clap::Args;

/// Parameters used to config AWS.
///
/// Credentials come from the standard environment chain; only the region can
/// be overridden here.
#[derive(Debug, Clone, Args)]
pub struct AWSConfigCliArgs {
    /// The region to use for the S3 client.
    #[arg(env = "AWS_REGION", long)]
    pub aws_region: Option<String>,
}
