use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pawtrail", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server using environment configuration.
    Serve,
    /// Render a recap PNG for a walk JSON document, offline.
    Recap(RecapArgs),
}

#[derive(Parser, Debug)]
struct RecapArgs {
    /// Input walk JSON document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output width in pixels.
    #[arg(long, default_value_t = 1080)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 1350)]
    height: u32,

    /// Font file for recap text (falls back to a system face).
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let config = pawtrail::AppConfig::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_filter)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve => {
            let rt = tokio::runtime::Runtime::new().context("build tokio runtime")?;
            rt.block_on(pawtrail::server::serve(config))?;
            Ok(())
        }
        Command::Recap(args) => cmd_recap(args),
    }
}

fn cmd_recap(args: RecapArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read walk doc '{}'", args.in_path.display()))?;
    let walk: pawtrail::Walk = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse walk doc '{}'", args.in_path.display()))?;
    walk.validate()?;

    let canvas = pawtrail::Canvas::new(args.width, args.height)?;
    let font = pawtrail::assets::font::load_font_bytes(args.font.as_deref())?;
    let theme = pawtrail::RecapTheme::new(canvas, Arc::new(font))?;

    // Offline render: remote slots degrade to placeholders.
    let input = pawtrail::RecapInput::from_walk(&walk);
    let assets = pawtrail::RecapAssets::from_bytes(
        None,
        vec![None; input.photo_urls.len()],
    );

    let frame = pawtrail::render_recap(&input, &assets, &theme, pawtrail::RecapVariant::Story)?;
    let png = pawtrail::encode_png(&frame)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
