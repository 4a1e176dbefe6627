mod faq;

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use accordion::{Accordion, Document, Event, NodeId, Options};
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

/// Replay clicks against an in-memory FAQ accordion and print each frame.
#[derive(Debug, Parser)]
#[command(name = "accordion-demo")]
struct Args {
    /// JSON options file (camelCase keys, all optional).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Restrict each group to one open item.
    #[arg(long)]
    singular: bool,

    /// Number of FAQ groups to generate.
    #[arg(long, default_value_t = 1)]
    groups: usize,

    /// Number of questions per group.
    #[arg(long, default_value_t = 3)]
    items: usize,

    /// Button to click, as GROUP:ITEM (zero-based). Repeatable.
    #[arg(long = "click", value_parser = parse_click)]
    clicks: Vec<(usize, usize)>,

    /// Milliseconds between frames.
    #[arg(long, default_value_t = 50)]
    frame_ms: u64,

    /// Write debug logs to this file instead of the terminal.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_click(s: &str) -> Result<(usize, usize), String> {
    let (group, item) = s
        .split_once(':')
        .ok_or_else(|| format!("expected GROUP:ITEM, got '{s}'"))?;
    let group = group.parse().map_err(|e| format!("bad group '{group}': {e}"))?;
    let item = item.parse().map_err(|e| format!("bad item '{item}': {e}"))?;
    Ok((group, item))
}

fn init_logging(args: &Args) -> Result<()> {
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
        }
        None => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

fn load_options(args: &Args) -> Result<Options> {
    let mut options = match &args.options {
        Some(path) => Options::from_file(path)?,
        None => Options::default(),
    };
    if args.singular {
        options.singular_mode = true;
    }
    Ok(options)
}

/// One line per item: marker, question and rendered panel height.
fn print_frame(acc: &Accordion<NodeId>, doc: &Document, label: &str) {
    let config = acc.config();
    println!("-- {label}");
    for (g, group) in faq::group_ids(doc, config).into_iter().enumerate() {
        for (i, item) in faq::item_ids(doc, config, group).into_iter().enumerate() {
            let marker = if doc.is_active(item) { "[-]" } else { "[+]" };
            let height = faq::panel(doc, config, item)
                .map(|panel| doc.rendered_height(panel))
                .unwrap_or_default();
            let question = faq::question(doc, config, item);
            println!("   {g}:{i} {marker} {question:<28} {height:>6.1}px");
        }
    }
}

async fn settle(acc: &mut Accordion<NodeId>, doc: &mut Document, frame: Duration) {
    let mut interval = tokio::time::interval(frame);
    let mut n = 0;
    while acc.is_animating() {
        interval.tick().await;
        acc.tick(doc);
        n += 1;
        print_frame(acc, doc, &format!("frame {n}"));
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let options = load_options(&args)?;
    let mut doc = faq::build(args.groups, args.items);
    let mut acc = Accordion::new(&doc, &options).context("failed to set up accordion")?;
    let frame = Duration::from_millis(args.frame_ms.max(1));

    acc.load(&mut doc);
    print_frame(&acc, &doc, "load");
    settle(&mut acc, &mut doc, frame).await;

    for (group, item) in args.clicks {
        let Some(button) = faq::button_at(&doc, acc.config(), group, item) else {
            info!("no button at {group}:{item}, skipping");
            continue;
        };
        let outcome = acc.dispatch(&mut doc, Event::click(button));
        info!(
            "click {group}:{item}: {} transition(s), default prevented: {}",
            outcome.transitions, outcome.default_prevented
        );
        print_frame(&acc, &doc, &format!("click {group}:{item}"));
        settle(&mut acc, &mut doc, frame).await;
    }

    if acc.is_inert() {
        info!("no accordion groups matched; nothing to drive");
    }
    Ok(())
}
