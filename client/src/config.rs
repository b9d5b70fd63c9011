//! Cluster selection for the nonblocking RPC client.
//!
//! Every [`crate::TodoClient`] is handed its connection explicitly, so several clients can
//! target different clusters from the same process.

use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;

pub const LOCALNET_RPC_URL: &str = "http://localhost:8899";
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Environment variable read by [`ClusterConfig::from_env`].
pub const RPC_URL_ENV: &str = "TODO_RPC_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self::localnet()
    }
}

impl ClusterConfig {
    pub fn new(rpc_url: impl Into<String>, commitment: CommitmentConfig) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            commitment,
        }
    }

    pub fn localnet() -> Self {
        Self::new(LOCALNET_RPC_URL, CommitmentConfig::confirmed())
    }

    pub fn devnet() -> Self {
        Self::new(DEVNET_RPC_URL, CommitmentConfig::confirmed())
    }

    /// Reads the RPC URL from [`RPC_URL_ENV`], falling back to localnet when it's unset.
    pub fn from_env() -> Self {
        Self::from_env_var(RPC_URL_ENV)
    }

    pub fn from_env_var(key: &str) -> Self {
        match std::env::var(key) {
            Ok(rpc_url) if !rpc_url.trim().is_empty() => {
                Self::new(rpc_url.trim(), CommitmentConfig::confirmed())
            }
            _ => Self::localnet(),
        }
    }

    pub fn rpc_client(&self) -> Arc<RpcClient> {
        Arc::new(RpcClient::new_with_commitment(
            self.rpc_url.clone(),
            self.commitment,
        ))
    }
}
