use pll::{Client, ClientConfig};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let year = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2023);
    let champ_series = std::env::args().any(|arg| arg == "--champ-series");

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

    match client.standings(year, champ_series, &cancel).await
    {
        Ok(response) => println!("{response:#?}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
