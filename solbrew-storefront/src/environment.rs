/// Deployment environment of the storefront host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Devnet,
    MainnetBeta,
}

impl Network {
    pub fn cluster_name(&self) -> &'static str {
        match self {
            Network::Devnet => "devnet",
            Network::MainnetBeta => "mainnet-beta",
        }
    }
}

/// Where metadata documents are persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetadataStorageKind {
    Mock,
    Ipfs,
    Arweave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureFlags {
    pub debug_mode: bool,
    pub mock_data: bool,
    pub analytics: bool,
    pub error_reporting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub environment: Environment,
    pub network: Network,
    pub rpc_endpoint: &'static str,
    pub explorer_url: &'static str,
    pub metadata_storage: MetadataStorageKind,
    pub features: FeatureFlags,
}

const DEVELOPMENT: EnvironmentConfig = EnvironmentConfig {
    environment: Environment::Development,
    network: Network::Devnet,
    rpc_endpoint: "https://api.devnet.solana.com",
    explorer_url: "https://explorer.solana.com",
    metadata_storage: MetadataStorageKind::Mock,
    features: FeatureFlags {
        debug_mode: true,
        mock_data: true,
        analytics: false,
        error_reporting: false,
    },
};

const STAGING: EnvironmentConfig = EnvironmentConfig {
    environment: Environment::Staging,
    network: Network::Devnet,
    rpc_endpoint: "https://api.devnet.solana.com",
    explorer_url: "https://explorer.solana.com",
    metadata_storage: MetadataStorageKind::Ipfs,
    features: FeatureFlags {
        debug_mode: true,
        mock_data: false,
        analytics: true,
        error_reporting: true,
    },
};

const PRODUCTION: EnvironmentConfig = EnvironmentConfig {
    environment: Environment::Production,
    network: Network::MainnetBeta,
    rpc_endpoint: "https://api.mainnet-beta.solana.com",
    explorer_url: "https://explorer.solana.com",
    metadata_storage: MetadataStorageKind::Arweave,
    features: FeatureFlags {
        debug_mode: false,
        mock_data: false,
        analytics: true,
        error_reporting: true,
    },
};

pub const fn environment_config(environment: Environment) -> &'static EnvironmentConfig {
    match environment {
        Environment::Development => &DEVELOPMENT,
        Environment::Staging => &STAGING,
        Environment::Production => &PRODUCTION,
    }
}

/// Explorer link target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorerTarget {
    Address,
    Transaction,
}

impl ExplorerTarget {
    fn path_segment(&self) -> &'static str {
        match self {
            ExplorerTarget::Address => "address",
            ExplorerTarget::Transaction => "tx",
        }
    }
}

/// Build an explorer link; clusters other than mainnet carry the cluster
/// query suffix.
pub fn explorer_url(config: &EnvironmentConfig, target: ExplorerTarget, id: &str) -> String {
    let cluster = match config.network {
        Network::MainnetBeta => String::new(),
        other => format!("?cluster={}", other.cluster_name()),
    };
    format!(
        "{}/{}/{}{}",
        config.explorer_url,
        target.path_segment(),
        id,
        cluster
    )
}
