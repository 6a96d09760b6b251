use anyhow::Result;
use rollcall::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // The message macros route through tracing in debug mode; give them
    // a subscriber to land in.
    if std::env::var("ROLLCALL_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
