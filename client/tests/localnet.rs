//! Tests against a running cluster.
//!
//! The ignored tests need a validator at `TODO_RPC_URL` (localnet by default) with the todo
//! program deployed, e.g. `solana-test-validator --bpf-program <PROGRAM_ID> todo_app.so`.
//! Run them with `cargo test -p todo-client --test localnet -- --ignored`.

use solana_client::client_error::ClientError;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::signature::{
    Keypair,
    Signature,
};
use todo_client::{
    config::ClusterConfig,
    e2e_helpers::E2e,
    TodoClient,
};

#[tokio::test]
#[ignore = "requires a running validator with the todo program deployed"]
async fn add_task_confirms() -> anyhow::Result<()> {
    let e2e = E2e::new(&ClusterConfig::from_env()).await?;

    let signature = e2e.add_task("Buy milk").await?;
    assert_ne!(signature, Signature::default());

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running validator with the todo program deployed"]
async fn toggle_missing_task_is_rejected() -> anyhow::Result<()> {
    let e2e = E2e::new(&ClusterConfig::from_env()).await?;

    let res = e2e.toggle_task(1).await;
    let error = res.expect_err("The program's rejection must not be reported as success");
    assert!(error.downcast_ref::<ClientError>().is_some());

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running validator with the todo program deployed"]
async fn add_toggle_delete() -> anyhow::Result<()> {
    let e2e = E2e::new(&ClusterConfig::from_env()).await?;

    e2e.add_task("Test Task 1").await?;
    e2e.toggle_task(1).await?;
    e2e.delete_task(1).await?;

    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_propagates_transport_error() {
    // Nothing listens on port 1, so the connection is refused before anything is sent.
    let config = ClusterConfig::new("http://127.0.0.1:1", CommitmentConfig::confirmed());
    let todo = TodoClient::new(config.rpc_client(), todo_interface::program::ID, None);

    let error = todo
        .add_task(&Keypair::new(), "Buy milk")
        .await
        .expect_err("An unreachable endpoint must not be reported as success");

    assert!(error.downcast_ref::<ClientError>().is_some());
}
