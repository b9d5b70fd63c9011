use anyhow::Context;
use colored::Colorize;
use solana_client::{
    client_error::ClientError,
    nonblocking::rpc_client::RpcClient,
    rpc_config::RpcTransactionConfig,
};
use solana_commitment_config::CommitmentConfig;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use solana_transaction_status::UiTransactionEncoding;
use solana_transaction_status_client_types::option_serializer::OptionSerializer;

use crate::{
    logs::{
        log_error,
        log_info,
        log_success,
        log_warning,
        LogColor,
    },
    pretty::instruction_error::PrettyInstructionError,
};

#[derive(Clone, Debug)]
pub struct SendTransactionConfig {
    /// Log the signature and the program's log messages after confirmation.
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            debug_logs: Some(true),
        }
    }
}

/// Signs `instruction` as the sole instruction of a new transaction and submits it, waiting
/// for confirmation at the RPC client's commitment level.
///
/// `payer` signs first and pays the fees. Every error from the RPC client is returned unchanged
/// underneath the added context, so it can still be recovered with
/// [`anyhow::Error::downcast_ref`].
pub async fn send_transaction(
    rpc: &RpcClient,
    payer: &Keypair,
    signers: &[&Keypair],
    instruction: &Instruction,
    config: &SendTransactionConfig,
) -> anyhow::Result<Signature> {
    let bh = rpc
        .get_latest_blockhash()
        .await
        .context("Couldn't fetch the latest blockhash")?;

    let msg = Message::new(std::slice::from_ref(instruction), Some(&payer.pubkey()));

    let mut tx = Transaction::new_unsigned(msg);
    let all_signers: Vec<&Keypair> = std::iter::once(payer)
        .chain(signers.iter().copied())
        .collect();
    tx.try_sign(&all_signers, bh)
        .context("Failed to sign transaction")?;

    match rpc.send_and_confirm_transaction(&tx).await {
        Ok(sig) => {
            if matches!(config.debug_logs, Some(true)) {
                let sender_info = format!("{}: {}", "sender".color(LogColor::Gray), payer.pubkey());
                log_success("Signature", format!("{sig}\n{sender_info}"));
                match get_transaction_logs(rpc, sig).await {
                    Ok(logs) => logs
                        .iter()
                        .for_each(|line| println!("  {}", line.as_str().bright_black())),
                    Err(e) => log_warning("Couldn't fetch transaction logs", format!("{e:#}")),
                }
            }
            Ok(sig)
        }
        Err(error) => {
            log_instruction_error(&error, std::slice::from_ref(instruction));
            log_info("Payer", payer.pubkey());

            Err(error).context("Failed transaction submission")
        }
    }
}

/// Fetches the log messages of a confirmed transaction.
pub async fn get_transaction_logs(rpc: &RpcClient, sig: Signature) -> anyhow::Result<Vec<String>> {
    let encoded = rpc
        .get_transaction_with_config(
            &sig,
            RpcTransactionConfig {
                encoding: Some(UiTransactionEncoding::Json),
                commitment: Some(CommitmentConfig::confirmed()),
                max_supported_transaction_version: Some(0),
            },
        )
        .await
        .context("Should be able to fetch transaction with config")?;

    let logs = match encoded.transaction.meta.map(|meta| meta.log_messages) {
        Some(OptionSerializer::Some(logs)) => logs,
        _ => vec![],
    };

    Ok(logs)
}

pub fn log_instruction_error(error: &ClientError, instructions: &[Instruction]) {
    match PrettyInstructionError::new(error, instructions) {
        Some(pretty) => println!("{pretty}"),
        None => log_error("Generic error", error),
    }
}
