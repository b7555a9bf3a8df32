use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Upper bound on the progress range exported by `ingest --dense`.
const MAX_DENSE_POINTS: i64 = 10_000_000;

#[derive(Parser, Debug)]
#[command(name = "trailmap", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a `progress,x,y` text file into a checkpoint table JSON.
    Ingest(IngestArgs),
    /// Lay out one frame for a scene and print it as JSON.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct IngestArgs {
    /// Input text file, one `progress,x,y` record per line.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Discard records with progress outside `[0, N]`.
    #[arg(long)]
    max_progress: Option<i64>,

    /// Keep the first of duplicated progress values instead of failing.
    #[arg(long)]
    allow_duplicates: bool,

    /// Write one interpolated point per integer progress instead of the sparse table.
    #[arg(long)]
    dense: bool,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Checkpoint table JSON (as written by `ingest`).
    #[arg(long)]
    table: PathBuf,

    /// Scene JSON: `{ "milestones": [...], "entities": [...] }`.
    #[arg(long)]
    scene: PathBuf,

    /// Optional deployment config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels.
    #[arg(long)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long)]
    height: f64,
}

#[derive(serde::Deserialize, Debug)]
struct Scene {
    #[serde(default)]
    milestones: Vec<trailmap::Milestone>,
    #[serde(default)]
    entities: Vec<trailmap::Entity>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "trailmap=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Ingest(args) => cmd_ingest(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn cmd_ingest(args: IngestArgs) -> anyhow::Result<()> {
    let opts = trailmap::IngestOptions {
        max_progress: args.max_progress,
        duplicates: if args.allow_duplicates {
            trailmap::DuplicatePolicy::Flag
        } else {
            trailmap::DuplicatePolicy::Reject
        },
    };
    let report = trailmap::load_checkpoints(&args.in_path, &opts)?;

    for dup in &report.duplicates {
        eprintln!(
            "duplicate progress {} on line {} (kept line {})",
            dup.progress, dup.line, dup.first_line
        );
    }

    let dense_max = if args.dense {
        let max = args.max_progress.unwrap_or(report.table.max_progress());
        let span = max.saturating_sub(report.table.min_progress());
        if span >= MAX_DENSE_POINTS {
            anyhow::bail!(
                "dense export up to progress {max} spans {span} values (limit {MAX_DENSE_POINTS})"
            );
        }
        Some(max)
    } else {
        None
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);

    if let Some(max) = dense_max {
        serde_json::to_writer_pretty(&mut w, &report.table.densify(max))
            .with_context(|| "write dense table JSON")?;
    } else {
        serde_json::to_writer_pretty(&mut w, &report.table).with_context(|| "write table JSON")?;
    }
    w.flush()?;

    eprintln!(
        "wrote {} ({} checkpoints, {} malformed lines discarded)",
        args.out.display(),
        report.table.len(),
        report.malformed_lines.len()
    );
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f)).with_context(|| format!("parse {what} JSON"))
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let table: trailmap::CheckpointTable = read_json(&args.table, "checkpoint table")?;
    let scene: Scene = read_json(&args.scene, "scene")?;
    let config = match &args.config {
        Some(path) => trailmap::TrailConfig::load(path)?,
        None => trailmap::TrailConfig::default(),
    };

    let map = trailmap::TrailMap::new(
        table,
        config,
        trailmap::Viewport::new(args.width, args.height),
    )?;
    let frame = map.layout(&scene.milestones, &scene.entities)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &frame).with_context(|| "write frame JSON")?;
    writeln!(out)?;
    Ok(())
}
