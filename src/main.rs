//! # Carline Main Entry Point

use anyhow::Result;
use carline::cmd_args::CommandLineArgs;
use carline::{AppController, TerminalEventStream, TerminalRenderStream};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();
    let mut app = AppController::with_io_streams(
        cmd_args,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;

    app.run().await
}

const LOG_LEVEL_ENV_VAR: &str = "CARLINE_LOG_LEVEL";

fn init_tracing_subscriber() {
    let level = std::env::var(LOG_LEVEL_ENV_VAR).ok();

    // The terminal UI owns stdout and stderr shares its tty, so stay silent unless asked
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(level.as_deref()))
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn build_env_filter(level: Option<&str>) -> EnvFilter {
    let Some(level) = level.map(str::trim).filter(|level| !level.is_empty()) else {
        return EnvFilter::new("off");
    };

    let mut filter = EnvFilter::new(level);
    for directive in ["reqwest=warn", "hyper=warn", "hyper_util=warn", "rustls=warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}
