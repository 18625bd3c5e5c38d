#[tokio::main]
async fn main() -> std::io::Result<()> {
    jetpack_core::run_with_config().await
}
