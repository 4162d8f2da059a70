use bucket_drainer::cli::provider::aws::AWSConfigCliArgs;
use bucket_drainer::cli::{Cli, Commands, DrainCmd, SeedCmd, SetupCmd, TeardownCmd};
use bucket_drainer::core::client::storage::s3::AWSS3;
use bucket_drainer::core::cloud::CloudProvider;
use bucket_drainer::types::params::StorageArgs;
use bucket_drainer::utils::logging::init_logging;
use bucket_drainer::{BucketDrainer, DrainerResult, StorageClient};
use bytes::Bytes;
use clap::Parser as _;
use dotenvy::dotenv;
use rand::RngCore;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> DrainerResult<()> {
    dotenv().ok();
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Setup { setup_command } => setup_bucket(*setup_command).await,
        Commands::Seed { seed_command } => seed_bucket(*seed_command).await,
        Commands::Drain { drain_command } => drain_bucket(*drain_command).await,
        Commands::Teardown { teardown_command } => teardown_bucket(*teardown_command).await,
    }
}

async fn storage_client(args: &AWSConfigCliArgs) -> AWSS3 {
    let provider = CloudProvider::from_env(args.aws_region.clone()).await;
    AWSS3::new(provider.get_aws_config())
}

async fn setup_bucket(cmd: SetupCmd) -> DrainerResult<()> {
    let args = StorageArgs::try_from(cmd.aws_s3_args)?;
    let client = storage_client(&cmd.aws_config_args).await;

    if client.bucket_exists(&args.bucket_name).await? {
        warn!(bucket = %args.bucket_name, "Bucket already exists, skipping creation");
        return Ok(());
    }

    info!(bucket = %args.bucket_name, location = %args.bucket_location, "Creating bucket");
    client.create_bucket(&args.bucket_name, &args.bucket_location).await?;
    Ok(())
}

async fn seed_bucket(cmd: SeedCmd) -> DrainerResult<()> {
    let args = StorageArgs::try_from(cmd.aws_s3_args)?;
    let client = storage_client(&cmd.aws_config_args).await;

    let mut rng = rand::thread_rng();
    for i in 0..cmd.object_count {
        let mut body = vec![0u8; cmd.object_size];
        rng.fill_bytes(&mut body);
        client.put_object(&args.bucket_name, &format!("key{i}"), Bytes::from(body)).await?;
    }

    info!(bucket = %args.bucket_name, objects = cmd.object_count, "Bucket seeded");
    Ok(())
}

async fn drain_bucket(cmd: DrainCmd) -> DrainerResult<()> {
    let args = StorageArgs::try_from(cmd.aws_s3_args)?;
    let client = storage_client(&cmd.aws_config_args).await;

    let drainer = BucketDrainer::new(Arc::new(client));
    drainer.drain(&args.bucket_name).await?;
    Ok(())
}

async fn teardown_bucket(cmd: TeardownCmd) -> DrainerResult<()> {
    let args = StorageArgs::try_from(cmd.aws_s3_args)?;
    let client = storage_client(&cmd.aws_config_args).await;

    if cmd.force {
        // A non-empty bucket cannot be deleted, so empty it first.
        let drainer = BucketDrainer::new(Arc::new(client.clone()));
        drainer.drain(&args.bucket_name).await?;
    }

    client.delete_bucket(&args.bucket_name).await?;
    info!(bucket = %args.bucket_name, "Bucket deleted");
    Ok(())
}
