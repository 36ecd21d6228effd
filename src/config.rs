use std::path::{Path, PathBuf};
use clap::Args;

pub const DEFAULT_RECORDS_DIR: &str = "data/prayers";
pub const DEFAULT_WORDS_DIR: &str = "extracted_words";
pub const ARCHAISMS_FILE: &str = "archaisms.txt";
pub const FREQUENCY_FILE: &str = "word_frequency.txt";
pub const PAGE_PREFIX: &str = "words_chunk_";
pub const PAGE_SUFFIX: &str = ".txt";

pub const TEXT_FIELDS: [&str; 4] = ["content", "contentModern", "summary", "explanation"];
pub const DEFAULT_FIELD: &str = "contentModern";
pub const DEFAULT_WORDS_PER_PAGE: usize = 500;
pub const DEFAULT_SPLIT_LENGTH: usize = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
  pub records_dir: PathBuf,
  pub words_dir: PathBuf,
}

impl Default for Layout {
  fn default() -> Self {
    Layout {
      records_dir: PathBuf::from(DEFAULT_RECORDS_DIR),
      words_dir: PathBuf::from(DEFAULT_WORDS_DIR),
    }
  }
}

impl Layout {
  pub fn new(records_dir: impl Into<PathBuf>, words_dir: impl Into<PathBuf>) -> Self {
    Layout { records_dir: records_dir.into(), words_dir: words_dir.into() }
  }

  pub fn archaisms_path(&self) -> PathBuf {
    self.words_dir.join(ARCHAISMS_FILE)
  }

  pub fn frequency_path(&self) -> PathBuf {
    self.words_dir.join(FREQUENCY_FILE)
  }

  /// `number` is 1-based.
  pub fn page_path(&self, number: usize) -> PathBuf {
    self.words_dir.join(page_file_name(number))
  }
}

pub fn page_file_name(number: usize) -> String {
  format!("{}{:03}{}", PAGE_PREFIX, number, PAGE_SUFFIX)
}

pub fn is_page_file_name(name: &str) -> bool {
  name.starts_with(PAGE_PREFIX) && name.ends_with(PAGE_SUFFIX)
}

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
  /// Directory holding the record JSON files
  #[arg(long, default_value = DEFAULT_RECORDS_DIR)]
  pub records_dir: PathBuf,

  /// Directory for word pages, frequencies and the archaism dictionary
  #[arg(long, default_value = DEFAULT_WORDS_DIR)]
  pub words_dir: PathBuf,
}

impl LayoutArgs {
  pub fn layout(&self) -> Layout {
    Layout::new(&self.records_dir, &self.words_dir)
  }
}

pub fn file_name_of(path: &Path) -> String {
  path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| path.display().to_string())
}
