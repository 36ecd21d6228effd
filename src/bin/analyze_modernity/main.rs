use std::path::PathBuf;
use archaism_tools::{archaisms::ArchaismDictionary, config, logging, modernity::{ModernityScorer, RuleTable}, report};
use clap::Parser;
use console::style;

/// Checks whether a record's modernized text really reads as modern Russian.
/// Problems are logged; the exit status is always zero.
#[derive(Parser, Debug)]
#[command()]
struct Args {
  /// Record JSON file
  #[arg(required_unless_present = "rules")]
  path: Option<PathBuf>,

  #[arg(long, default_value = config::DEFAULT_FIELD)]
  field: String,

  /// Directory holding archaisms.txt
  #[arg(long, default_value = config::DEFAULT_WORDS_DIR)]
  words_dir: PathBuf,

  /// Archaism dictionary; overrides the one in --words-dir
  #[arg(long)]
  dictionary: Option<PathBuf>,

  /// Extra archaic-form rule as NAME=REGEX, may be repeated
  #[arg(long = "archaic-pattern")]
  archaic_patterns: Vec<String>,

  /// List the rule table and exit
  #[arg(long)]
  rules: bool,

  /// Print the report as JSON instead of text
  #[arg(long)]
  json: bool,
}

fn print_rules(rules: &RuleTable) {
  println!("{}", style("Archaic forms (counted):").bold());
  for rule in &rules.archaic {
    println!("  {:8} {}", rule.name, rule.pattern());
  }
  println!("{}", style("Modern markers (tallied only):").bold());
  for rule in &rules.modern {
    println!("  {:8} {}", rule.name, rule.pattern());
  }
}

fn main() {
  logging::init();
  let args = Args::parse();

  let mut rules = RuleTable::default();
  for spec in &args.archaic_patterns {
    rules = match rules.with_archaic_spec(spec) {
      Ok(r) => r,
      Err(e) => {
        tracing::error!("Bad pattern {:?}: {}", spec, e);
        return;
      }
    };
  }

  if args.rules {
    print_rules(&rules);
    return;
  }

  let Some(path) = &args.path else { return; };

  if !path.exists() {
    tracing::error!("File not found: {}", path.display());
    return;
  }

  let dictionary_path = args.dictionary.clone().unwrap_or_else(|| args.words_dir.join(config::ARCHAISMS_FILE));
  let dictionary = match ArchaismDictionary::load_or_baseline(&dictionary_path) {
    Ok(d) => d,
    Err(e) => {
      tracing::error!("Could not read {}: {}", dictionary_path.display(), e);
      return;
    }
  };

  let scorer = ModernityScorer::with_rules(rules);
  println!("Analyzing {}", path.display());

  let Some(result) = report::analyze_record_file(path, &args.field, &dictionary, &scorer) else {
    return;
  };

  if args.json {
    match serde_json::to_string_pretty(&result) {
      Ok(text) => println!("{}", text),
      Err(e) => tracing::error!("{}", e),
    }
  }
  else {
    report::print_report(&result);
    report::print_summary(&result);
  }
}
