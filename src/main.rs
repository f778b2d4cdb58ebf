#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kuber_chain::node::run_cli().await
}
