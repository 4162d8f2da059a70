use clap::{Parser, Subcommand};

pub mod provider;
pub mod storage;

use provider::aws::AWSConfigCliArgs;
use storage::aws_s3::AWSS3CliArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Empty and remove S3 buckets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the target bucket
    Setup {
        #[command(flatten)]
        setup_command: Box<SetupCmd>,
    },
    /// Fill the bucket with generated objects
    Seed {
        #[command(flatten)]
        seed_command: Box<SeedCmd>,
    },
    /// Delete every object in the bucket
    Drain {
        #[command(flatten)]
        drain_command: Box<DrainCmd>,
    },
    /// Delete the bucket itself
    Teardown {
        #[command(flatten)]
        teardown_command: Box<TeardownCmd>,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct SetupCmd {
    #[clap(flatten)]
    pub aws_config_args: AWSConfigCliArgs,

    #[clap(flatten)]
    pub aws_s3_args: AWSS3CliArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct SeedCmd {
    #[clap(flatten)]
    pub aws_config_args: AWSConfigCliArgs,

    #[clap(flatten)]
    pub aws_s3_args: AWSS3CliArgs,

    /// Number of objects to create.
    #[arg(long, default_value_t = 5)]
    pub object_count: u32,

    /// Size of each generated object in bytes.
    #[arg(long, default_value_t = 10_000)]
    pub object_size: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct DrainCmd {
    #[clap(flatten)]
    pub aws_config_args: AWSConfigCliArgs,

    #[clap(flatten)]
    pub aws_s3_args: AWSS3CliArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct TeardownCmd {
    #[clap(flatten)]
    pub aws_config_args: AWSConfigCliArgs,

    #[clap(flatten)]
    pub aws_s3_args: AWSS3CliArgs,

    /// Drain the bucket before deleting it.
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
