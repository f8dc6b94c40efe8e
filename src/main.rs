use std::io;
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use bstree::repl::Session;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase log verbosity (repeat for more: -d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    if let Err(e) = session.run() {
        eprintln!("{}", format!("Error: {}", e).red());
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Log lines go to stderr so they never interleave with tree output on
    // stdout.
    let fmt_layer = fmt::layer().with_writer(io::stderr).with_target(true);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
