#[tokio::main]
async fn main() {
    if let Err(e) = market_feed_profiler::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
