use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use inkscribe::{
    BoardColor, Canvas, CpuBackend, CpuBackendOpts, DecorationTime, DemoPreset, DrawCtx,
    FramePlan, GlyphLibrary, Palette, PlaybackOpts, PlaybackSession, Point, PresetKind, Solution,
    TextDrawOpts, Theme, VariationCache, compile_text_frame, render_frame,
};

#[derive(Parser, Debug)]
#[command(name = "inkscribe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Handwrite a line of text and save one frame as a PNG.
    Text(TextArgs),
    /// Render a solution at a seek position as a PNG.
    Solution(SolutionArgs),
    /// Render a demo board as a PNG.
    Preset(PresetArgs),
}

#[derive(Args, Debug)]
struct BoardArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// light or dark.
    #[arg(long, default_value = "light")]
    theme: Theme,

    /// white, black, green or blue.
    #[arg(long, default_value = "white")]
    board: BoardColor,

    /// Hide the background grid.
    #[arg(long, default_value_t = false)]
    no_grid: bool,

    /// Decoration clock in seconds (pen pulse, cursor blink).
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Variation seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

impl BoardArgs {
    fn canvas(&self) -> anyhow::Result<Canvas> {
        Canvas::new(self.width, self.height).context("invalid canvas size")
    }

    fn palette(&self) -> Palette {
        Palette::resolve(self.theme, self.board).with_grid(!self.no_grid)
    }

    fn cache(&self) -> VariationCache {
        self.seed.map(VariationCache::with_seed).unwrap_or_default()
    }
}

#[derive(Args, Debug)]
struct TextArgs {
    /// Text to write.
    #[arg(long)]
    text: String,

    /// Reveal progress in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    progress: f64,

    /// Font size in pixels.
    #[arg(long, default_value_t = 48.0)]
    size: f64,

    /// Left edge of the text.
    #[arg(long, default_value_t = 40.0)]
    x: f64,

    /// Top edge of the text.
    #[arg(long, default_value_t = 40.0)]
    y: f64,

    /// Hide stroke-order guidance.
    #[arg(long, default_value_t = false)]
    no_guidance: bool,

    #[command(flatten)]
    board: BoardArgs,
}

#[derive(Args, Debug)]
struct SolutionArgs {
    /// Input solution JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Step index (0-based).
    #[arg(long, default_value_t = 0)]
    step: usize,

    /// Progress of that step in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    progress: f64,

    #[command(flatten)]
    board: BoardArgs,
}

#[derive(Args, Debug)]
struct PresetArgs {
    /// alphabet, numbers, symbols, pressure or guidance.
    #[arg(long)]
    name: PresetKind,

    /// Replace the preset's characters.
    #[arg(long)]
    chars: Option<String>,

    /// Reveal progress in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    progress: f64,

    #[command(flatten)]
    board: BoardArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Text(args) => cmd_text(args),
        Command::Solution(args) => cmd_solution(args),
        Command::Preset(args) => cmd_preset(args),
    }
}

fn cmd_text(args: TextArgs) -> anyhow::Result<()> {
    let canvas = args.board.canvas()?;
    let palette = args.board.palette();
    let mut cache = args.board.cache();
    let ctx = DrawCtx::new(
        GlyphLibrary::builtin(),
        &palette,
        DecorationTime(args.board.time),
    );
    let opts = TextDrawOpts::new(args.size).with_guidance(!args.no_guidance);
    let plan = compile_text_frame(
        canvas,
        &ctx,
        &mut cache,
        &args.text,
        Point::new(args.x, args.y),
        args.progress,
        &opts,
    );
    write_png(&plan, &args.board.out)
}

fn cmd_solution(args: SolutionArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read solution '{}'", args.in_path.display()))?;
    let solution = Solution::from_json(&json)
        .with_context(|| format!("parse solution '{}'", args.in_path.display()))?;

    let mut opts = PlaybackOpts::default();
    if let Some(seed) = args.board.seed {
        opts = opts.with_seed(seed);
    }
    let mut session = PlaybackSession::new(solution, opts)?;
    if !session.solution().steps.is_empty() {
        session.seek(args.step, args.progress)?;
    }

    let canvas = args.board.canvas()?;
    let plan = session.compile_frame(
        canvas,
        &args.board.palette(),
        DecorationTime(args.board.time),
    );
    write_png(&plan, &args.board.out)
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let mut preset = DemoPreset::named(args.name);
    if let Some(chars) = args.chars {
        preset = preset.with_chars(chars);
    }
    let canvas = args.board.canvas()?;
    let mut cache = args.board.cache();
    let plan = preset.compile_frame(
        canvas,
        &args.board.palette(),
        args.progress,
        &mut cache,
        DecorationTime(args.board.time),
    );
    write_png(&plan, &args.board.out)
}

fn write_png(plan: &FramePlan, out: &Path) -> anyhow::Result<()> {
    let mut backend = CpuBackend::new(CpuBackendOpts::default());
    let frame = render_frame(plan, &mut backend).context("rasterize frame")?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
