use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rxivisual::{DeckConfig, DeckFrame, DeckSession, PaperOutline, ScrollProgress, Viewport};

#[derive(Parser, Debug)]
#[command(name = "rxivisual", version)]
struct Cli {
    /// Log active-card changes and other engine events to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate every card of a deck at one scroll progress.
    Sample(SampleArgs),
    /// Walk the track from 0 to 1 and print each active-card change.
    Sweep(SweepArgs),
    /// Evaluate a paper outline's deck at one scroll progress.
    Paper(PaperArgs),
}

#[derive(Parser, Debug)]
struct DeckArgs {
    /// Viewport width in px.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in px.
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Deck config JSON overriding the layout constants.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl DeckArgs {
    fn config(&self) -> anyhow::Result<DeckConfig> {
        match &self.config {
            Some(path) => Ok(DeckConfig::from_path(path)?),
            None => Ok(DeckConfig::default()),
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Number of cards in the deck.
    #[arg(long)]
    cards: usize,

    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    #[command(flatten)]
    deck: DeckArgs,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Number of cards in the deck.
    #[arg(long)]
    cards: usize,

    /// Number of equal progress steps between 0 and 1.
    #[arg(long, default_value_t = 1000)]
    steps: u32,

    #[command(flatten)]
    deck: DeckArgs,
}

#[derive(Parser, Debug)]
struct PaperArgs {
    /// Input paper outline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    #[command(flatten)]
    deck: DeckArgs,
}

#[derive(serde::Serialize)]
struct SweepLine {
    progress: f64,
    previous: Option<usize>,
    current: usize,
    normalized: f64,
}

#[derive(serde::Serialize)]
struct PaperFrame<'a> {
    paper: &'a str,
    active_section: Option<&'a str>,
    sections: Vec<&'a str>,
    frame: DeckFrame,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Paper(args) => cmd_paper(args),
    }
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let mut sess = DeckSession::new(args.cards, args.deck.config()?, args.deck.viewport())?;
    sess.scroll_to(ScrollProgress::new(args.progress));
    print_json(&sess.frame())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps > 0, "--steps must be > 0");
    let mut sess = DeckSession::new(args.cards, args.deck.config()?, args.deck.viewport())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for step in 0..=args.steps {
        let v = f64::from(step) / f64::from(args.steps);
        if let Some(change) = sess.scroll_to(ScrollProgress::new(v)) {
            let line = SweepLine {
                progress: v,
                previous: change.previous,
                current: change.current,
                normalized: change.normalized,
            };
            serde_json::to_writer(&mut out, &line).context("write sweep line")?;
            writeln!(out).context("write sweep line")?;
        }
    }
    Ok(())
}

fn cmd_paper(args: PaperArgs) -> anyhow::Result<()> {
    let outline = PaperOutline::from_path(&args.in_path)?;
    let mut sess = outline.session(args.deck.config()?, args.deck.viewport())?;
    sess.scroll_to(ScrollProgress::new(args.progress));

    let frame = sess.frame();
    let out = PaperFrame {
        paper: &outline.title,
        active_section: outline.section(frame.active_index).map(|s| s.id.as_str()),
        sections: outline.sections.iter().map(|s| s.id.as_str()).collect(),
        frame,
    };
    print_json(&out)
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("write json")?;
    writeln!(out).context("write json")?;
    Ok(())
}
