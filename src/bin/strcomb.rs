use clap::Parser as _;
use std::io::BufRead;
use std::process::ExitCode;
use strcomb::ascii::number;
use strcomb::{ParseError, Parser};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Check inputs against the decimal number grammar
#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Inputs to parse; lines from stdin when none are given
    inputs: Vec<String>,

    /// Reject inputs that leave unparsed text behind
    #[arg(short, long)]
    complete: bool,

    /// Log every combinator decision
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report_failure(input: &str, error: &ParseError) {
    println!("{input:?}: no match");
    println!("  innermost: {}", error.innermost());
    let labels = error.labels();
    if !labels.is_empty() {
        println!("  while parsing: {}", labels.join(" > "));
    }
}

/// Returns true when the input is accepted
fn check(input: &str, complete: bool) -> bool {
    let parser = number();
    match parser.parse(input) {
        Ok((text, rest)) if complete && !rest.is_empty() => {
            println!("{input:?}: matched {text:?} but {rest:?} was left over");
            false
        }
        Ok((text, rest)) => {
            let value: f64 = text.parse().unwrap_or(f64::NAN);
            println!("{input:?}: matched {text:?} = {value}, remaining {rest:?}");
            true
        }
        Err(error) => {
            debug!(%error, "parse failed");
            report_failure(input, &error);
            false
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let inputs = if cli.inputs.is_empty() {
        let mut lines = Vec::new();
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => lines.push(line),
                Err(e) => {
                    warn!("failed to read stdin: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        lines
    } else {
        cli.inputs.clone()
    };

    let mut all_ok = true;
    for input in &inputs {
        all_ok &= check(input, cli.complete);
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
