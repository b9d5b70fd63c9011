//! Client for a single task-list account owned by the todo program.

use std::sync::Arc;

use anyhow::Context;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
};
use todo_interface::instructions::TodoInstruction;

use crate::transactions::{
    send_transaction,
    SendTransactionConfig,
};

/// Builds and submits todo program instructions against one task-list account.
///
/// The task-list keypair, program id and RPC connection are fixed at construction. Each call
/// submits one single-instruction transaction signed by the payer and the task-list keypair.
pub struct TodoClient {
    rpc: Arc<RpcClient>,
    program_id: Pubkey,
    task_list: Keypair,
    config: SendTransactionConfig,
}

impl TodoClient {
    /// Creates a client for `program_id`. A new task-list keypair is generated if `task_list` is
    /// `None`.
    pub fn new(rpc: Arc<RpcClient>, program_id: Pubkey, task_list: Option<Keypair>) -> Self {
        Self {
            rpc,
            program_id,
            task_list: task_list.unwrap_or_else(Keypair::new),
            config: SendTransactionConfig::default(),
        }
    }

    pub fn with_config(self, config: SendTransactionConfig) -> Self {
        Self { config, ..self }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    /// The task-list account's address.
    pub fn task_list(&self) -> Pubkey {
        self.task_list.pubkey()
    }

    pub fn task_list_keypair(&self) -> &Keypair {
        &self.task_list
    }

    /// Encodes `instruction` and addresses it to the program, with the task-list account as the
    /// only account: writable and a signer.
    pub fn instruction(&self, instruction: &TodoInstruction) -> anyhow::Result<Instruction> {
        let data = instruction
            .pack()
            .with_context(|| format!("Couldn't encode {} instruction", instruction.tag()))?;

        Ok(Instruction::new_with_bytes(
            self.program_id,
            &data,
            vec![AccountMeta::new(self.task_list.pubkey(), true)],
        ))
    }

    pub fn add_task_instruction(&self, content: impl Into<String>) -> anyhow::Result<Instruction> {
        self.instruction(&TodoInstruction::add_task(content))
    }

    pub fn delete_task_instruction(&self, id: u64) -> anyhow::Result<Instruction> {
        self.instruction(&TodoInstruction::delete_task(id))
    }

    pub fn toggle_task_instruction(&self, id: u64) -> anyhow::Result<Instruction> {
        self.instruction(&TodoInstruction::toggle_task(id))
    }

    pub async fn add_task(
        &self,
        payer: &Keypair,
        content: impl Into<String>,
    ) -> anyhow::Result<Signature> {
        self.send(payer, TodoInstruction::add_task(content)).await
    }

    pub async fn delete_task(&self, payer: &Keypair, id: u64) -> anyhow::Result<Signature> {
        self.send(payer, TodoInstruction::delete_task(id)).await
    }

    pub async fn toggle_task(&self, payer: &Keypair, id: u64) -> anyhow::Result<Signature> {
        self.send(payer, TodoInstruction::toggle_task(id)).await
    }

    async fn send(&self, payer: &Keypair, instruction: TodoInstruction) -> anyhow::Result<Signature> {
        let instruction = self.instruction(&instruction)?;
        send_transaction(
            &self.rpc,
            payer,
            &[&self.task_list],
            &instruction,
            &self.config,
        )
        .await
    }
}
