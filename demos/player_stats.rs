use pll::{Client, ClientConfig, PLAYER_STATISTICS};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let client = match ClientConfig::from_env().and_then(Client::new) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.cancel();
        }
    });

    match client
        .player_stats(2024, 5, "regular", &PLAYER_STATISTICS, &cancel)
        .await
    {
        Ok(response) => println!("{response:#?}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
