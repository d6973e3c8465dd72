// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use form_template_converter::{ConsoleReporter, FormConverter};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Process JSON to replace confirmations and notifications.",
    long_about = "Replace the confirmations and notifications of Gravity Forms JSON exports with the standard templates. The original ids are kept and each result is written to '<form title>.json'."
)]
#[command(group(ArgGroup::new("mode").required(true).args(["all", "file"])))]
struct Args {
    /// Process every .json file in the current directory
    #[arg(long, help = "Process all .json files in the current directory.")]
    all: bool,

    /// Single export to convert
    #[arg(short, long, value_name = "FILE", help = "Process a single .json file.")]
    file: Option<PathBuf>,

    /// Where converted files go (can also be set via FORM_CONVERTER_OUTPUT_DIR env var)
    #[arg(long, value_name = "DIR", help = "Directory for converted files (defaults to the current directory, or set FORM_CONVERTER_OUTPUT_DIR)")]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    // Get output directory from args or environment variable
    let output_dir = args
        .output_dir
        .or_else(|| std::env::var_os("FORM_CONVERTER_OUTPUT_DIR").map(PathBuf::from));
    if let Some(dir) = &output_dir {
        // Reported like a per-file failure; only CLI misuse exits non-zero.
        if let Err(err) = fs::create_dir_all(dir)
            .with_context(|| format!("Could not create output directory '{}'", dir.display()))
        {
            println!("Error: {:#}", err);
            return Ok(());
        }
    }
    log::debug!("output directory: {:?}", output_dir);

    let converter = FormConverter::new(output_dir);
    let mut reporter = ConsoleReporter;

    if let Some(file) = args.file {
        converter.process_file(&file, &mut reporter);
    } else {
        let summary = converter.process_all(Path::new("."), &mut reporter);
        log::info!(
            "converted {} file(s), {} failed",
            summary.converted.len(),
            summary.failed
        );
    }

    Ok(())
}
