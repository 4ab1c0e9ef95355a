use mimalloc::MiMalloc;
use roster::db::{MysqlNameStore, NameStore};
use std::io;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &roster::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        loglevel = %cfg.loglevel,
        "connecting to the name store"
    );

    let mut store = MysqlNameStore::connect(&cfg.database_url).await?;
    store.ensure_table().await?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = roster::menu::run(&mut store, stdin.lock(), stdout.lock()).await;

    store.close().await?;
    info!("connection closed");

    result?;
    Ok(())
}
