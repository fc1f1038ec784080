use std::io;

use clap::Parser;
use messages_cli::{run, telemetry, UreqTransport};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cl-http", version, about = "Interactive client for a messages REST endpoint")]
struct Cli {
    /// Tracing filter directives, e.g. "debug" or "messages_cli=trace".
    /// Falls back to RUST_LOG, then "warn".
    #[arg(long, value_name = "FILTER", value_parser = parse_log_filter)]
    log_filter: Option<String>,
}

fn parse_log_filter(directives: &str) -> Result<String, String> {
    EnvFilter::try_new(directives)
        .map(|_| directives.to_string())
        .map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    telemetry::init(cli.log_filter.as_deref());

    let transport = UreqTransport::new();
    let mut input = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let exit = run(&mut input, &mut stdout, &mut stderr, &transport);
    std::process::exit(exit.code());
}
