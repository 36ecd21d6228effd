use std::{path::PathBuf, process::ExitCode};
use archaism_tools::{config, logging, updater::{self, UpdateRequest}};
use clap::Parser;

/// Shows how a record field would be split for editing and optionally
/// replaces its content.
#[derive(Parser, Debug)]
#[command()]
struct Args {
  /// Record JSON file
  #[arg()]
  path: PathBuf,

  #[arg(default_value = config::DEFAULT_FIELD)]
  field: String,

  /// New content for the field
  #[arg()]
  content: Option<String>,

  /// Part length in characters [default: 1000]
  #[arg(long)]
  max_length: Option<usize>,

  /// Print every part
  #[arg(long)]
  parts: bool,
}

fn main() -> ExitCode {
  logging::init();
  let args = Args::parse();

  if !args.path.exists() {
    tracing::error!("File not found: {}", args.path.display());
    return ExitCode::SUCCESS;
  }

  let request = UpdateRequest {
    field: &args.field,
    new_content: args.content.as_deref().filter(|c| !c.is_empty()),
    max_length: args.max_length,
    show_parts: args.parts,
  };

  if updater::process_record_file(&args.path, &request) {
    ExitCode::SUCCESS
  }
  else {
    ExitCode::FAILURE
  }
}
