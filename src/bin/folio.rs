use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Log planner decisions (skipped zones, fallbacks) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the initial layout pass for a measured page and print the outcome
    /// (mode, physics hand-off, plan) as JSON.
    Scatter(ScatterArgs),
    /// Fit the ASCII art for a viewport and print the outcome as JSON.
    Fit(FitArgs),
}

#[derive(Parser, Debug)]
struct ScatterArgs {
    /// Input page geometry JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional page config JSON (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the plan here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Display mode the page starts in.
    #[arg(long, value_enum, default_value_t = ModeChoice::Framed)]
    mode: ModeChoice,
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Window inner width in pixels.
    #[arg(long)]
    window_width: f64,

    /// Grid container client width in pixels.
    #[arg(long)]
    grid_width: f64,

    /// Longest art line in characters.
    #[arg(long)]
    art_columns: usize,

    /// Glyph advance as a fraction of the font size.
    #[arg(long, default_value_t = 0.6)]
    advance_ratio: f64,

    /// Total horizontal padding of the grid container.
    #[arg(long, default_value_t = 0.0)]
    grid_padding: f64,

    /// Total horizontal padding of the art wrapper.
    #[arg(long, default_value_t = 0.0)]
    wrap_padding: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Framed,
    Gravity,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Scatter(args) => cmd_scatter(args),
        Command::Fit(args) => cmd_fit(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))
}

fn cmd_scatter(args: ScatterArgs) -> anyhow::Result<()> {
    let page: folio::PageLayout = read_json(&args.in_path, "page layout")?;
    let config: folio::PageConfig = match &args.config {
        Some(path) => read_json(path, "config")?,
        None => folio::PageConfig::default(),
    };

    let mode = match args.mode {
        ModeChoice::Framed => folio::DisplayMode::Framed,
        ModeChoice::Gravity => folio::DisplayMode::Gravity,
    };
    let outcome = folio::step(mode, folio::PassTrigger::InitialLoad, &page, &config)?;

    let json = serde_json::to_string_pretty(&outcome).context("serialize pass outcome")?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            let (logos, fallbacks) = outcome
                .plan
                .as_ref()
                .map_or((0, 0), |p| (p.logos.len(), p.fallback_count()));
            eprintln!(
                "wrote {} ({logos} logos, {fallbacks} fallbacks, mode {:?})",
                out.display(),
                outcome.mode
            );
        }
        None => writeln!(std::io::stdout().lock(), "{json}").context("write stdout")?,
    }
    Ok(())
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    use folio::ascii::fit::{FitConfig, FitViewport, HPadding, MonospaceMeasure, fit_art};

    let split = |total: f64| HPadding {
        left: total / 2.0,
        right: total / 2.0,
    };
    let viewport = FitViewport {
        window_width: args.window_width,
        grid_width: args.grid_width,
        grid_padding: split(args.grid_padding),
        wrap_padding: split(args.wrap_padding),
    };
    let cfg = FitConfig::default();
    cfg.validate()?;

    let mut measure = MonospaceMeasure {
        columns: args.art_columns,
        advance_ratio: args.advance_ratio,
    };
    let outcome = fit_art(&viewport, &mut measure, &cfg);
    let json = serde_json::to_string_pretty(&outcome).context("serialize fit outcome")?;
    writeln!(std::io::stdout().lock(), "{json}").context("write stdout")?;
    Ok(())
}
