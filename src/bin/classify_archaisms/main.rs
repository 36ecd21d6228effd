use std::process::ExitCode;
use archaism_tools::{classifier::{self, TerminalCurator}, config::LayoutArgs, logging};
use clap::Parser;
use console::style;

/// Walks the word pages one word at a time and records which words are archaic.
#[derive(Parser, Debug)]
#[command()]
struct Args {
  #[command(flatten)]
  layout: LayoutArgs,
}

fn main() -> ExitCode {
  logging::init();
  let args = Args::parse();
  let layout = args.layout.layout();

  println!("Interactive archaism review");

  match classifier::run_session(&layout, &mut TerminalCurator) {
    Ok(summary) => {
      println!();
      println!("{} Review finished{}", style("ok").green(), if summary.quit { " (quit)" } else { "" });
      println!("New archaisms this session: {}", summary.added.len());
      println!("Saved to {}", layout.archaisms_path().display());
      ExitCode::SUCCESS
    },
    Err(e) => {
      tracing::error!("{}", e);
      ExitCode::FAILURE
    }
  }
}
