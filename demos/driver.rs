//! Demo driver: two counters, three subscribers, one shared.
//!
//! Run with:
//! ```bash
//! cargo run --example driver --features demo -- --help
//! ```

use clap::{Parser, ValueEnum};
use limiti::counters::clamping::ClampingCounter;
use limiti::counters::wrapping::WrappingCounter;
use limiti::counters::BoundedCounter;
use limiti::drive;
use limiti::listeners::MultiSubscriber;
use limiti::observers::json::JsonObserver;
use limiti::observers::table::{TableObserver, TableStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How the final counter state is printed.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Only the step-by-step trace
    Plain,
    /// Trace followed by a table of the counters
    Table,
    /// Trace followed by a JSON array of counter snapshots
    Json,
}

/// Table style selection.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum StyleChoice {
    Ascii,
    #[default]
    Rounded,
    Sharp,
    Modern,
    Markdown,
    Blank,
}

impl From<StyleChoice> for TableStyle {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Ascii => TableStyle::Ascii,
            StyleChoice::Rounded => TableStyle::Rounded,
            StyleChoice::Sharp => TableStyle::Sharp,
            StyleChoice::Modern => TableStyle::Modern,
            StyleChoice::Markdown => TableStyle::Markdown,
            StyleChoice::Blank => TableStyle::Blank,
        }
    }
}

/// Demo for limiti - bounded counters with boundary notifications.
///
/// Drives a wrapping counter (5 of 9) and a clamping counter (0 of 5) past
/// their limits. `cu1` listens to the wrapping counter, `cu2` to the clamping
/// one, and `cu3` to both.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    format: OutputFormat,

    /// Table style (for table format)
    #[arg(short, long, value_enum, default_value = "rounded")]
    style: StyleChoice,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,

    /// Log boundary events at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "limiti=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn render_state(args: &Args, counters: Vec<&dyn BoundedCounter>) -> String {
    match args.format {
        OutputFormat::Plain => String::new(),
        OutputFormat::Table => TableObserver::new()
            .with_style(args.style.into())
            .with_title("Final state")
            .render(counters.into_iter()),
        OutputFormat::Json => JsonObserver::new()
            .pretty(args.pretty)
            .to_json(counters.into_iter())
            .unwrap_or_else(|e| format!("Error: {}", e)),
    }
}

fn main() -> limiti::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let oc = WrappingCounter::new(5, 9)?.with_name("overflow");
    let lc = ClampingCounter::new(0, 5)?.with_name("limited");

    let cu1 = MultiSubscriber::builder("cu1").echo(true).build();
    let cu2 = MultiSubscriber::builder("cu2").echo(true).build();
    let cu3 = MultiSubscriber::builder("cu3").echo(true).build();

    cu1.subscribe_to(&oc);
    cu2.subscribe_to(&lc);
    cu3.subscribe_to(&oc);
    cu3.subscribe_to(&lc);

    println!();
    println!("OverflowCounter:");
    println!("{}", oc.value());
    drive(&oc, 5);
    println!("{}", oc.value());
    drive(&oc, -1);
    println!("{}", oc.value());
    oc.decrement();
    println!("{}", oc.value());

    println!("LimitedCounter:");
    println!("{}", lc.value());
    lc.increment();
    println!("{}", lc.value());
    lc.decrement();
    println!("{}", lc.value());
    for _ in 0..10 {
        lc.increment();
    }
    println!("{}", lc.value());
    drive(&lc, -9);
    println!("{}", lc.value());

    let state = render_state(&args, vec![&oc, &lc]);
    if !state.is_empty() {
        println!();
        println!("{}", state);
    }

    Ok(())
}
