use roster::config::CONFIG;
use roster::facts;
use std::io;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(CONFIG.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let client = facts::client()?;
    if let Some(fact) = facts::try_fetch_random_fact(&client, CONFIG.fact_url.clone()).await {
        println!("Random Cat Fact: ");
        println!("{fact}");
    }
    Ok(())
}
