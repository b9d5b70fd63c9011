use std::{
    sync::Arc,
    time::Duration,
};

use anyhow::Context;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
    },
    signer::Signer,
};
use tokio::time::sleep;

use crate::{
    config::ClusterConfig,
    logs::log_info,
    TodoClient,
};

/// 1 SOL.
pub const DEFAULT_FUND_AMOUNT: u64 = 1_000_000_000;
const MAX_AIRDROP_POLLS: usize = 10;
const AIRDROP_POLL_INTERVAL_MS: u64 = 500;

/// Airdrops [`DEFAULT_FUND_AMOUNT`] to `keypair`, or to a new keypair if it's `None`, and waits
/// for the airdrop to confirm.
pub async fn fund_account(rpc: &RpcClient, keypair: Option<Keypair>) -> anyhow::Result<Keypair> {
    let payer = keypair.unwrap_or_else(Keypair::new);

    let airdrop_signature = rpc
        .request_airdrop(&payer.pubkey(), DEFAULT_FUND_AMOUNT)
        .await
        .context("Failed to request airdrop")?;

    let mut polls = 0;
    while !rpc
        .confirm_transaction(&airdrop_signature)
        .await
        .context("Couldn't confirm transaction")?
    {
        polls += 1;
        if polls >= MAX_AIRDROP_POLLS {
            anyhow::bail!("Airdrop {airdrop_signature} wasn't confirmed after {polls} polls");
        }
        sleep(Duration::from_millis(AIRDROP_POLL_INTERVAL_MS)).await;
    }

    Ok(payer)
}

/// A funded payer and a [`TodoClient`] with a fresh task list, on an explicitly configured
/// cluster.
pub struct E2e {
    pub rpc: Arc<RpcClient>,
    pub payer: Keypair,
    pub todo: TodoClient,
}

impl E2e {
    pub async fn new(config: &ClusterConfig) -> anyhow::Result<Self> {
        Self::with_program(config, todo_interface::program::ID).await
    }

    pub async fn with_program(config: &ClusterConfig, program_id: Pubkey) -> anyhow::Result<Self> {
        let rpc = config.rpc_client();
        let payer = fund_account(&rpc, None).await?;
        let todo = TodoClient::new(rpc.clone(), program_id, None);

        log_info("Cluster", &config.rpc_url);
        log_info("Payer", payer.pubkey());
        log_info("Task list", todo.task_list());

        Ok(Self { rpc, payer, todo })
    }

    pub async fn add_task(&self, content: &str) -> anyhow::Result<Signature> {
        self.todo.add_task(&self.payer, content).await
    }

    pub async fn delete_task(&self, id: u64) -> anyhow::Result<Signature> {
        self.todo.delete_task(&self.payer, id).await
    }

    pub async fn toggle_task(&self, id: u64) -> anyhow::Result<Signature> {
        self.todo.toggle_task(&self.payer, id).await
    }
}
