use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "uilint", version, about = "Design and accessibility lint for UI scenes")]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lint a scene JSON (optionally with a screen capture) and print a report.
    Check(CheckArgs),
    /// Contrast ratio between two colors and whether it passes for the given text.
    Contrast(ContrastArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input scene JSON.
    #[arg(long)]
    scene: PathBuf,

    /// Screen capture matching the scene (PNG or any format `image` decodes).
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Lint config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the report here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write one cropped PNG per finding into this directory (needs --snapshot).
    #[arg(long)]
    crops_dir: Option<PathBuf>,

    /// Measure text with this font file, as `IDENTIFIER=PATH` (repeatable). Labels whose font
    /// family matches `IDENTIFIER` are shaped with it instead of the built-in width tables.
    #[arg(long = "font", value_name = "ID=PATH")]
    fonts: Vec<String>,

    /// Exit with status 1 when any error-severity finding is reported.
    #[arg(long, default_value_t = false)]
    fail_on_error: bool,
}

#[derive(Parser, Debug)]
struct ContrastArgs {
    /// Text color (`#RRGGBB` or `#RRGGBBAA`).
    #[arg(long)]
    fg: String,

    /// Background color.
    #[arg(long)]
    bg: String,

    /// Text point size.
    #[arg(long, default_value_t = uilint::DEFAULT_POINT_SIZE)]
    size: f64,

    /// Bold text.
    #[arg(long, default_value_t = false)]
    bold: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Contrast(args) => cmd_contrast(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let config = match &args.config {
        Some(path) => uilint::LintConfig::from_path(path)?,
        None => uilint::LintConfig::current(),
    };
    let scene = uilint::SceneDef::from_path(&args.scene)?;
    let snapshot = args
        .snapshot
        .as_ref()
        .map(uilint::Snapshot::open)
        .transpose()?;

    let engine = build_engine(&args.fonts)?;

    let session = uilint::LintSession::from_scene_with_engine(&scene, snapshot, config, &engine)
        .with_context(|| format!("lint scene '{}'", args.scene.display()))?;
    tracing::info!(
        nodes = session.nodes().len(),
        findings = session.findings().len(),
        "linted scene"
    );

    let report = match args.format {
        Format::Text => uilint::TextReport::render(&session),
        Format::Json => uilint::JsonReport::new(&session).to_string_pretty()?,
    };

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, &report)
                .with_context(|| format!("write report '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{report}"),
    }

    if let Some(dir) = &args.crops_dir {
        let written = uilint::write_crops(&session, dir)?;
        eprintln!("wrote {} crop(s) to {}", written.len(), dir.display());
    }

    eprintln!("{}", session.summary());
    if args.fail_on_error && session.findings().has_errors() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn build_engine(fonts: &[String]) -> anyhow::Result<uilint::LintEngine> {
    if fonts.is_empty() {
        return Ok(uilint::LintEngine::new());
    }
    let mut measurer = uilint::ParleyMeasurer::new();
    for arg in fonts {
        let (id, path) = arg
            .split_once('=')
            .with_context(|| format!("--font '{arg}' is not IDENTIFIER=PATH"))?;
        let family = measurer.register_font_file(id, path)?;
        tracing::info!(%id, %family, "registered font");
    }
    Ok(uilint::LintEngine::with_measurer(measurer))
}

fn cmd_contrast(args: ContrastArgs) -> anyhow::Result<ExitCode> {
    let fg: uilint::Color = args
        .fg
        .parse()
        .map_err(|e| anyhow::anyhow!("--fg: {e}"))?;
    let bg: uilint::Color = args
        .bg
        .parse()
        .map_err(|e| anyhow::anyhow!("--bg: {e}"))?;

    let ratio = uilint::contrast::contrast_ratio(fg.over(bg), bg);
    let ok = uilint::contrast::is_sufficient(ratio, args.size, args.bold);
    println!(
        "contrast ratio {ratio:.2} ({} on {}): {}",
        fg.to_hex(),
        bg.to_hex(),
        if ok { "pass" } else { "fail" }
    );
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
