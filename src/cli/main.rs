use clap::Command;
use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn cli() -> Command {
    Command::new("login-probe")
        .about("Send one login request to the local auth API and print what came back")
        .version(env!("CARGO_PKG_VERSION"))
}

#[tokio::main]
async fn main() {
    // Only used for RUST_LOG, the probe itself takes no configuration.
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_probe=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli().get_matches();

    login_probe::run().await;
}
