use std::process::ExitCode;
use archaism_tools::{config::{self, LayoutArgs}, extract, logging, records};
use clap::Parser;
use console::style;

/// Collects every distinct Cyrillic word from the records into numbered pages
/// for review, plus a frequency list.
#[derive(Parser, Debug)]
#[command()]
struct Args {
  #[command(flatten)]
  layout: LayoutArgs,

  #[arg(long, default_value_t = config::DEFAULT_WORDS_PER_PAGE)]
  words_per_page: usize,
}

fn main() -> ExitCode {
  logging::init();
  let args = Args::parse();
  let layout = args.layout.layout();

  println!("Extracting unique words from {}...", layout.records_dir.display());

  let records = match records::load_all(&layout.records_dir) {
    Ok(records) => records,
    Err(e) => {
      tracing::error!("{}", e);
      return ExitCode::FAILURE;
    }
  };

  let words = extract::unique_words(&records, &config::TEXT_FIELDS);
  if words.is_empty() {
    println!("{} No words extracted", style("x").red());
    return ExitCode::FAILURE;
  }

  println!();
  println!("Unique words: {}", words.len());
  println!("Pages to write: {}", extract::page_count(words.len(), args.words_per_page));

  if let Err(e) = extract::write_word_pages(&words, &layout, args.words_per_page) {
    tracing::error!("Writing word pages failed: {}", e);
    return ExitCode::FAILURE;
  }

  let counts = extract::word_frequencies(&records, &config::TEXT_FIELDS);
  if let Err(e) = extract::write_frequency_file(&counts, &layout.frequency_path()) {
    tracing::error!("Writing word frequencies failed: {}", e);
    return ExitCode::FAILURE;
  }

  println!();
  println!("{} Done, see {}", style("ok").green(), layout.words_dir.display());
  println!("  - {}NNN{} - {} words per page", config::PAGE_PREFIX, config::PAGE_SUFFIX, args.words_per_page);
  println!("  - {} - word frequencies", config::FREQUENCY_FILE);
  ExitCode::SUCCESS
}
