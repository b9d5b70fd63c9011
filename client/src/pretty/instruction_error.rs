//! Interprets RPC and on-chain errors into readable todo/Solana instruction error messages.

use std::fmt::Display;

use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    },
    rpc_response::RpcSimulateTransactionResult,
};
use solana_instruction::Instruction;
use solana_instruction_error::InstructionError as SolanaInstructionError;
use solana_transaction_error::TransactionError;
use todo_interface::instructions::InstructionTag;

use crate::{
    fmt_kv,
    LogColor,
};

#[derive(Debug)]
enum InstructionError {
    Solana {
        instruction_tag: Option<u8>,
        error: SolanaInstructionError,
    },
    Todo {
        instruction: InstructionTag,
        error: SolanaInstructionError,
    },
}

#[derive(Debug)]
pub struct PrettyInstructionError(InstructionError);

impl PrettyInstructionError {
    /// Finds the instruction that failed, from either a preflight simulation failure or a
    /// transaction error observed during confirmation.
    ///
    /// Returns `None` when the error isn't an instruction error or its index doesn't match one of
    /// the passed `instructions`.
    pub fn new(error: &ClientError, instructions: &[Instruction]) -> Option<Self> {
        let transaction_error: TransactionError = match error.kind() {
            ClientErrorKind::RpcError(RpcResponseError {
                data:
                    RpcResponseErrorData::SendTransactionPreflightFailure(
                        RpcSimulateTransactionResult {
                            err: Some(ui_err), ..
                        },
                    ),
                ..
            }) => ui_err.clone().into(),
            ClientErrorKind::TransactionError(transaction_error) => transaction_error.clone(),
            _ => return None,
        };

        let TransactionError::InstructionError(instruction_index, error) = transaction_error else {
            return None;
        };

        let instruction = instructions.get(instruction_index as usize)?;
        let instruction_tag = instruction.data.first().copied();

        let res = match instruction_tag.map(InstructionTag::try_from) {
            Some(Ok(instruction)) => Self(InstructionError::Todo { instruction, error }),
            _ => Self(InstructionError::Solana {
                instruction_tag,
                error,
            }),
        };

        Some(res)
    }
}

impl Display for PrettyInstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (error_type, instruction, error) = match &self.0 {
            InstructionError::Solana {
                instruction_tag,
                error,
            } => (
                "SolanaInstructionError",
                instruction_tag.map_or_else(|| "<no data>".to_string(), |tag| tag.to_string()),
                error.to_string(),
            ),
            InstructionError::Todo { instruction, error } => {
                ("TodoInstructionError", instruction.to_string(), error.to_string())
            }
        };

        let message = format!("({instruction}, {error})");
        let error_message = fmt_kv!(error_type, message, LogColor::Error);
        write!(f, "{error_message}")
    }
}
