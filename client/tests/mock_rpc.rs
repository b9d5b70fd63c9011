//! Submission tests against the RPC client's built-in mock sender.
//!
//! The mock's behavior is selected by its URL: `"succeeds"` confirms every transaction,
//! `"instruction_error"` and `"account_in_use"` report a failed transaction status, and
//! `"fails"` answers every request with `null`.

use std::sync::Arc;

use futures::future::try_join_all;
use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    nonblocking::rpc_client::RpcClient,
};
use solana_sdk::signature::{
    Keypair,
    Signature,
};
use solana_transaction_error::TransactionError;
use todo_client::{
    transactions::SendTransactionConfig,
    TodoClient,
};

fn mock_client(url: &str, debug_logs: bool) -> TodoClient {
    let rpc = Arc::new(RpcClient::new_mock(url.to_string()));
    TodoClient::new(rpc, todo_interface::program::ID, None).with_config(SendTransactionConfig {
        debug_logs: Some(debug_logs),
    })
}

#[tokio::test]
async fn add_task_returns_signature() -> anyhow::Result<()> {
    let todo = mock_client("succeeds", false);
    let payer = Keypair::new();

    let signature = todo.add_task(&payer, "Buy milk").await?;

    assert_ne!(signature, Signature::default());
    assert!(!signature.to_string().is_empty());

    Ok(())
}

#[tokio::test]
async fn every_operation_confirms() -> anyhow::Result<()> {
    let todo = mock_client("succeeds", false);
    let payer = Keypair::new();

    todo.add_task(&payer, "").await?;
    todo.toggle_task(&payer, 1).await?;
    todo.delete_task(&payer, u64::MAX).await?;

    Ok(())
}

#[tokio::test]
async fn debug_logs_dont_affect_the_result() -> anyhow::Result<()> {
    let todo = mock_client("succeeds", true);
    let payer = Keypair::new();

    let signature = todo.toggle_task(&payer, 3).await?;
    assert_ne!(signature, Signature::default());

    Ok(())
}

#[tokio::test]
async fn concurrent_calls_settle_independently() -> anyhow::Result<()> {
    let todo = mock_client("succeeds", false);
    let payer = Keypair::new();

    let signatures = try_join_all([
        todo.add_task(&payer, "one"),
        todo.add_task(&payer, "two"),
        todo.add_task(&payer, "three"),
    ])
    .await?;

    assert_eq!(signatures.len(), 3);
    assert_ne!(signatures[0], signatures[1]);
    assert_ne!(signatures[1], signatures[2]);
    assert_ne!(signatures[0], signatures[2]);

    Ok(())
}

#[tokio::test]
async fn program_rejection_propagates() {
    let todo = mock_client("instruction_error", false);
    let payer = Keypair::new();

    let error = todo
        .toggle_task(&payer, 1)
        .await
        .expect_err("A failed transaction status must not be reported as success");

    let client_error = error
        .downcast_ref::<ClientError>()
        .expect("The original client error should be preserved");
    assert!(matches!(
        client_error.kind(),
        ClientErrorKind::TransactionError(TransactionError::InstructionError(0, _))
    ));
}

#[tokio::test]
async fn transaction_error_propagates_unchanged() {
    let todo = mock_client("account_in_use", false);
    let payer = Keypair::new();

    let error = todo.delete_task(&payer, 1).await.unwrap_err();

    let client_error = error.downcast_ref::<ClientError>().unwrap();
    assert!(matches!(
        client_error.kind(),
        ClientErrorKind::TransactionError(TransactionError::AccountInUse)
    ));
}

#[tokio::test]
async fn network_failure_propagates() {
    let todo = mock_client("fails", false);
    let payer = Keypair::new();

    let error = todo
        .add_task(&payer, "Buy milk")
        .await
        .expect_err("A failed RPC request must not be reported as success");

    assert!(error.downcast_ref::<ClientError>().is_some());
    assert!(format!("{error:#}").contains("blockhash"));
}
