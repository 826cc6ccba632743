use std::fs;

use clap::Parser;
use tauscript::run_script;

/// tauscript is a tree-walking interpreter for the TauScript scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a path to a script file instead of inline
    /// source.
    #[arg(short, long)]
    file: bool,

    /// Inline TauScript source, or a script path when --file is set.
    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = run_script(&script) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
