use std::time::Duration;

use anyhow::Context;
use befriend::dispatch::{self, DispatchConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Send a friend request to the local API and print the raw result.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Endpoint receiving the friend request
    #[arg(long, default_value = dispatch::DEFAULT_URL)]
    url: String,

    /// First user of the friendship
    #[arg(long = "user-id-1", default_value = dispatch::DEFAULT_USER_ID_1)]
    user_id_1: String,

    /// Second user of the friendship
    #[arg(long = "user-id-2", default_value = dispatch::DEFAULT_USER_ID_2)]
    user_id_2: String,

    /// Seconds to wait for the whole exchange before giving up
    #[arg(
        long,
        default_value_t = dispatch::DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,
}

impl From<Args> for DispatchConfig {
    fn from(args: Args) -> Self {
        DispatchConfig {
            url: args.url,
            user_id_1: args.user_id_1,
            user_id_2: args.user_id_2,
            timeout: Duration::from_secs(args.timeout),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DispatchConfig::from(Args::parse());
    let outcome = dispatch::run(&config)
        .with_context(|| format!("friend request to {} failed", config.url))?;

    println!("{outcome}");
    Ok(())
}
