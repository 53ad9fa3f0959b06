use std::{fs, process::ExitCode};

use clap::Parser;
use evalml::{derive_with_limit, interpreter::evaluator::core::DEFAULT_MAX_DEPTH};

/// evalml evaluates a judgment `<env> |- <expr>` of a small functional
/// language and prints the derivation proving it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells evalml to read the judgment from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints only the final value instead of the full derivation.
    #[arg(short, long)]
    value_only: bool,

    /// Reports the number of rule applications on stderr.
    #[arg(short, long)]
    stats: bool,

    /// How deeply rule applications may nest before evaluation stops.
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    match derive_with_limit(&source, args.max_depth) {
        Ok(evaluation) => {
            if args.value_only {
                println!("{}", evaluation.value);
            } else {
                print!("{}", evaluation.derivation);
            }
            if args.stats {
                eprintln!("{} rule applications", evaluation.steps);
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
