use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "moodwave", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the chart as an SVG document.
    Chart(ChartArgs),
    /// Render one frame of the reveal animation as a PNG.
    Frame(FrameArgs),
    /// Print the reveal schedule as JSON.
    Schedule(SourceArgs),
    /// Replay a scripted event timeline and print the document state after each step.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Mood tracker CSV.
    #[arg(long)]
    csv: PathBuf,

    /// Optional JSON configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height.
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

#[derive(Args, Debug)]
struct ChartArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Write the settled, fully revealed state instead of the hidden one.
    #[arg(long, default_value_t = false)]
    revealed: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Milliseconds since the January section came into view.
    #[arg(long)]
    at_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Opaque background color (#rrggbb); transparent when omitted.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// JSON array of `{ "at_ms": .., "event": { "type": .. } }` steps.
    #[arg(long)]
    script: PathBuf,
}

#[derive(serde::Deserialize, Debug)]
struct ScriptStep {
    at_ms: u64,
    event: moodwave::PageEvent,
}

#[derive(serde::Serialize)]
struct StepReport<'a> {
    at_ms: u64,
    mutations: Vec<moodwave::UiMutation>,
    document: &'a moodwave::DocumentState,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Chart(args) => cmd_chart(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Schedule(args) => cmd_schedule(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &SourceArgs) -> anyhow::Result<moodwave::VizConfig> {
    Ok(match &args.config {
        Some(path) => moodwave::VizConfig::from_path(path)?,
        None => moodwave::VizConfig::default(),
    })
}

fn open_session(
    args: &SourceArgs,
    config: &moodwave::VizConfig,
) -> anyhow::Result<moodwave::PageSession> {
    let viewport = moodwave::Viewport::new(args.width, args.height)?;
    let session = moodwave::load_session(&args.csv, viewport, config)
        .with_context(|| format!("build charts from '{}'", args.csv.display()))?;
    Ok(session)
}

fn january_enters() -> moodwave::PageEvent {
    moodwave::PageEvent::Intersections {
        entries: vec![moodwave::IntersectionEntry {
            region: moodwave::Region::January,
            is_intersecting: true,
        }],
    }
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_chart(args: ChartArgs) -> anyhow::Result<()> {
    let mut sess = open_session(&args.source, &load_config(&args.source)?)?;
    let scene = if args.revealed {
        sess.dispatch(&january_enters(), 0)?;
        let end = sess.driver().map_or(0, |d| d.end_ms());
        sess.scene_at(end)
    } else {
        sess.chart().initial_state()
    };

    let svg = moodwave::render_svg(sess.chart(), &scene);
    ensure_parent(&args.out)?;
    std::fs::write(&args.out, svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let background = args
        .background
        .as_deref()
        .map(moodwave::Rgb8::from_hex)
        .transpose()?;

    let mut sess = open_session(&args.source, &load_config(&args.source)?)?;
    sess.dispatch(&january_enters(), 0)?;
    let svg = moodwave::render_svg(sess.chart(), &sess.scene_at(args.at_ms));
    let frame = moodwave::rasterize_svg(&svg, background)?;
    let (width, height) = (frame.width, frame.height);

    ensure_parent(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.into_straight_rgba8(),
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_schedule(args: SourceArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let sess = open_session(&args, &config)?;
    let schedule =
        moodwave::RevealSchedule::for_handles(sess.controller().handles(), &config.reveal);
    println!("{}", serde_json::to_string_pretty(&schedule)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("read script '{}'", args.script.display()))?;
    let mut steps: Vec<ScriptStep> = serde_json::from_str(&text)
        .with_context(|| format!("parse script '{}'", args.script.display()))?;
    steps.sort_by_key(|s| s.at_ms);

    let mut sess = open_session(&args.source, &load_config(&args.source)?)?;
    let mut reports = Vec::with_capacity(steps.len());
    for step in &steps {
        let mutations = sess.dispatch(&step.event, step.at_ms)?;
        reports.push(serde_json::to_value(StepReport {
            at_ms: step.at_ms,
            mutations,
            document: sess.document(),
        })?);
    }
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
