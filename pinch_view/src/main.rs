//! pinch_view - camera pinch gestures to viewport commands.

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pinch_view::{
    app::{run, RunOptions},
    config::{Config, SourceKind},
};

/// Orbit, pan and zoom a 3D view with pinch gestures
#[derive(Parser, Debug)]
#[command(name = "pinch_view", version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frame source (overrides config)
    #[arg(short, long, value_parser = parse_source)]
    source: Option<SourceKind>,

    /// Recording to replay; implies `--source replay`
    #[arg(long)]
    replay: Option<PathBuf>,

    /// UDP listen address as host:port (overrides config)
    #[arg(long)]
    bind: Option<String>,

    /// Record incoming frames to a JSON-lines file
    #[arg(long)]
    record: Option<PathBuf>,

    /// Run without the preview window
    #[arg(long)]
    no_preview: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_source(s: &str) -> Result<SourceKind, String> {
    match s {
        "sim"    => Ok(SourceKind::Sim),
        "udp"    => Ok(SourceKind::Udp),
        "replay" => Ok(SourceKind::Replay),
        "leap"   => Ok(SourceKind::Leap),
        other    => Err(format!("unknown source `{}` (sim, udp, replay, leap)", other)),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    info!("Starting {} v{}", pinch_view::NAME, pinch_view::VERSION);

    let mut config = Config::load(args.config.as_deref())?;
    apply_overrides(&mut config, &args)?;
    config.validate()?;

    info!(
        source  = config.source.kind.as_str(),
        preview = config.preview.enabled,
        "configuration ready"
    );

    let summary = run(config, RunOptions { record: args.record })?;
    info!(
        "Done: {} frames, {} commands applied, {} refused",
        summary.frames, summary.applied, summary.rejected
    );
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) -> anyhow::Result<()> {
    if let Some(kind) = args.source {
        config.source.kind = kind;
    }
    if let Some(path) = &args.replay {
        config.source.kind = SourceKind::Replay;
        config.source.replay_path = Some(path.clone());
    }
    if let Some(bind) = &args.bind {
        let (host, port) = bind
            .rsplit_once(':')
            .ok_or_else(|| anyhow::anyhow!("--bind expects host:port, got `{}`", bind))?;
        config.source.listen_address = host.to_string();
        config.source.port = port
            .parse()
            .map_err(|e| anyhow::anyhow!("--bind port `{}`: {}", port, e))?;
    }
    if args.no_preview {
        config.preview.enabled = false;
    }
    Ok(())
}
