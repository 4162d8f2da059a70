use aws_config::{Region, SdkConfig};

/// Cloud provider
/// This enum represents the cloud providers the drainer can talk to.
#[derive(Clone)]
pub enum CloudProvider {
    AWS(Box<SdkConfig>),
}

impl CloudProvider {
    /// Load AWS configuration from the environment chain (env vars, shared
    /// profile, instance metadata), optionally overriding the region.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        CloudProvider::AWS(Box::new(loader.load().await))
    }

    /// Returns the AWS SDK config backing this provider.
    pub fn get_aws_config(&self) -> &SdkConfig {
        match self {
            Self::AWS(config) => config,
        }
    }

    pub fn get_provider_name(&self) -> &'static str {
        match self {
            Self::AWS(_) => "AWS",
        }
    }
}

impl std::fmt::Debug for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.get_provider_name())
    }
}

// Implement Display using Debug since they share the same formatting
impl std::fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
