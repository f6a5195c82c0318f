//! CLI tool to run a named cleanup chain over a line file.
//!
//! Each input line is parsed as JSON when possible (so `[1,2]` or `42`
//! become structured values) and treated as a plain string otherwise.

use clap::Parser;
use seqchain_rs::chains;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// Run a cleanup chain over a line-oriented input file.
#[derive(Parser)]
#[command(name = "seq-clean")]
struct Cli {
    /// Input file (one value per line, or /dev/stdin)
    input: String,

    /// Chain to apply
    #[arg(short, long, default_value = "string-cleanup")]
    chain: String,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Show line counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let input_text = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input file '{}': {e}", cli.input);
            process::exit(1);
        }
    };

    let output = match chains::apply_named(&cli.chain, &input_text) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Chain error: {e}");
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!(
            "Processed {} -> {} lines with chain '{}'",
            input_text.lines().count(),
            output.lines().count(),
            cli.chain
        );
    }

    if let Some(out_path) = &cli.output {
        if let Some(parent) = Path::new(out_path).parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{out_path}'");
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &output) {
            eprintln!("Error writing output file '{out_path}': {e}");
            process::exit(1);
        }
    } else {
        if let Err(e) = io::stdout().write_all(output.as_bytes()) {
            eprintln!("Error writing output: {e}");
            process::exit(1);
        }
        if !output.is_empty() && !output.ends_with('\n') {
            println!();
        }
    }
}
