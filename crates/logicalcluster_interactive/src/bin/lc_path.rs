//! CLI entry point for lc-path
//!
//! Supports three execution modes:
//! - Interactive: Read instructions from stdin line-by-line
//! - Batch: Read instructions from a playbook file
//! - Object: Print the logical cluster a JSON manifest is annotated with
//!
//! # Examples
//!
//! Interactive mode:
//! ```bash
//! ./lc-path
//! > SPLIT root:accounting:us-west
//! > REQUEST root:accounting
//! > ^D
//! ```
//!
//! Batch mode:
//! ```bash
//! ./lc-path --playbook hierarchy.lcp
//! ```
//!
//! Object mode:
//! ```bash
//! ./lc-path --object configmap.json
//! ```

use clap::Parser;
use logicalcluster_interactive::{Instruction, PathHandler, manifest_cluster};
use std::convert::TryFrom;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "lc-path")]
#[command(about = "Inspect and compose logical cluster paths", long_about = None)]
struct Args {
    /// Path to a playbook file containing instructions to execute (batch mode)
    #[arg(short, long, conflicts_with = "object")]
    playbook: Option<String>,

    /// Path to a JSON object manifest whose logical cluster annotation is printed
    #[arg(short, long)]
    object: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    fmt().with_writer(std::io::stderr).with_target(false).with_env_filter(filter).init();

    let args = Args::parse();

    let mut handler = PathHandler::default();

    if let Some(object_path) = args.object {
        run_object_mode(&object_path)?;
    } else if let Some(playbook_path) = args.playbook {
        // Batch mode: read from file
        run_batch_mode(&mut handler, &playbook_path)?;
    } else {
        // Interactive mode: read from stdin
        run_interactive_mode(&mut handler)?;
    }

    Ok(())
}

/// Print the logical cluster annotation of a JSON manifest
fn run_object_mode(file_path: &str) -> anyhow::Result<()> {
    debug!("Reading object manifest from file: {}", file_path);
    let content = std::fs::read_to_string(file_path)
        .map_err(|e| anyhow::anyhow!("Failed to read object '{}': {}", file_path, e))?;
    let name = manifest_cluster(&content)?;
    if name.is_empty() {
        println!("(unset)");
    } else {
        println!("{}", name);
    }
    Ok(())
}

/// Run in batch mode, reading instructions from a file
fn run_batch_mode(handler: &mut PathHandler, file_path: &str) -> anyhow::Result<()> {
    info!("Running batch mode from file: {}", file_path);

    let file = std::fs::File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let start_time = std::time::Instant::now();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        debug!("[{}] {}", line_num + 1, line);

        match Instruction::try_from(line) {
            Ok(instruction) => match handler.execute(&instruction) {
                Ok(output) => output.iter().for_each(|out| println!("{}", out)),
                Err(e) => {
                    info!("✗ Error: {}", e);
                    return Err(e);
                }
            },
            Err(e) => {
                info!("✗ Parse error: {}", e);
                return Err(anyhow::anyhow!("line {}: {}", line_num + 1, e));
            }
        }
    }

    info!(
        execution_time = ?start_time.elapsed(),
        executed = handler.executed(),
        "Batch execution completed successfully."
    );
    Ok(())
}

/// Run in interactive mode, reading instructions from stdin
fn run_interactive_mode(handler: &mut PathHandler) -> anyhow::Result<()> {
    println!("lc-path - Interactive Mode");
    println!("==========================");
    println!("Type HELP for instructions, Ctrl+D to exit");
    println!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        let bytes_read = reader.read_line(&mut line)?;

        // EOF reached
        if bytes_read == 0 {
            println!();
            println!("Goodbye!");
            break;
        }

        // Parse and execute instruction
        match Instruction::try_from(line.as_str()) {
            Ok(instruction) => match handler.execute(&instruction) {
                Ok(output) => output.iter().for_each(|out| println!("{}", out)),
                // Continue in interactive mode even after errors
                Err(e) => eprintln!("✗ Error: {}", e),
            },
            Err(e) => {
                eprintln!("✗ Parse error: {}", e);
            }
        }
    }

    Ok(())
}
