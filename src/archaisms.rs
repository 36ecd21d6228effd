use std::{collections::BTreeSet, fs, io, path::Path};
use itertools::Itertools;

use crate::atomic;
use crate::error::Result;

pub const HEADER: &str = "# Archaic words found in the prayer texts\n# Words that need a modern rendering\n\n";

const BASELINE: &[&str] = &[
  "яко", "еже", "иже", "яже", "егоже", "паче", "нежели",
  "во", "ко", "молиши", "даруеши", "сподоби", "избави",
  "архистратиже", "архангеле", "святый", "благоутробие",
  "напрасние", "всякаго", "благаго", "аще", "аз", "еси",
  "мя", "твоего", "твое", "твоя", "твоих", "твоим", "твою",
  "твои", "твоему", "твоея", "твой", "твоей", "твоею",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArchaismDictionary {
  words: BTreeSet<String>,
}

impl ArchaismDictionary {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn baseline() -> Self {
    Self::from_words(BASELINE.iter().copied())
  }

  pub fn from_words<I, S>(words: I) -> Self
  where I: IntoIterator<Item = S>, S: AsRef<str> {
    let mut dict = Self::new();
    for w in words {
      dict.insert(w.as_ref());
    }
    dict
  }

  pub fn parse(text: &str) -> Self {
    Self::from_words(text.lines())
  }

  /// A missing file is an empty dictionary.
  pub fn load(path: &Path) -> Result<Self> {
    match fs::read_to_string(path) {
      Ok(text) => Ok(Self::parse(&text)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
      Err(e) => Err(e.into()),
    }
  }

  pub fn load_or_baseline(path: &Path) -> Result<Self> {
    if path.exists() {
      Self::load(path)
    }
    else {
      tracing::warn!("{} not found, using the built-in baseline dictionary", path.display());
      Ok(Self::baseline())
    }
  }

  /// Adds a trimmed word. Returns false for blanks, comment markers and
  /// words already present.
  pub fn insert(&mut self, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() || word.starts_with('#') {
      return false;
    }
    self.words.insert(word.to_owned())
  }

  pub fn contains(&self, word: &str) -> bool {
    self.words.contains(word)
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.words.iter().map(|w| w.as_str())
  }

  pub fn render(&self) -> String {
    let mut out = String::from(HEADER);
    for w in &self.words {
      out.push_str(w);
      out.push('\n');
    }
    out
  }

  pub fn save(&self, path: &Path) -> Result<()> {
    atomic::overwrite(path, self.render().as_bytes())?;
    tracing::debug!("Saved {} archaisms to {}", self.len(), path.display());
    Ok(())
  }

  pub fn sample(&self, n: usize) -> (String, usize) {
    let shown = self.iter().take(n).map(|w| format!("  - {}", w)).join("\n");
    (shown, self.len().saturating_sub(n))
  }
}
