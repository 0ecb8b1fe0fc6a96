#[tokio::main]
async fn main() {
    if let Err(e) = ferret_finder::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
