use todo_client::{
    config::ClusterConfig,
    e2e_helpers::E2e,
    print_kv,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let e2e = E2e::new(&ClusterConfig::from_env()).await?;

    let add = e2e.add_task("Test Task 1").await?;
    print_kv!("AddTask", add);

    let toggle = e2e.toggle_task(1).await?;
    print_kv!("ToggleTask", toggle);

    let delete = e2e.delete_task(1).await?;
    print_kv!("DeleteTask", delete);

    Ok(())
}
