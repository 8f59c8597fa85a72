use clap::Parser;
use ktane_hue_cli::{CliContext, lamps, logging};
use ktane_hue_core::Session;
use ktane_hue_core::context::SinkKind;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Drive Hue lamps from the Keep Talking and Nobody Explodes log")]
struct Cli {
    /// Configuration file (default: platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Lamp backend: hue or memory
    #[arg(short, long)]
    sink: Option<SinkKind>,
    /// Game log to follow
    #[arg(short, long)]
    log: Option<PathBuf>,
}

/// Error message including its sources, outermost first.
fn report(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    let mut ctx = CliContext::load(cli.config).map_err(|e| report(&e))?;
    ctx.apply_overrides(cli.sink, cli.log)
        .map_err(|e| report(&e))?;

    let lamps = lamps::connect(&mut ctx).await.map_err(|e| report(&e))?;
    let mut session = Session::start(&ctx.config, lamps)
        .await
        .map_err(|e| report(&e))?;

    session.run().await.map_err(|e| {
        tracing::error!(error = %report(&e), "stopping");
        report(&e)
    })
}
