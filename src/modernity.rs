use regex::Regex;
use serde::Serialize;

use crate::archaisms::ArchaismDictionary;
use crate::tokenize::{self, char_len};

pub const SAMPLE_SENTENCES: usize = 5;
pub const ARCHAIC_THRESHOLD: usize = 2;
pub const PREVIEW_CHARS: usize = 50;
// matches of this many characters or fewer are ignored
pub const MIN_PATTERN_MATCH: usize = 3;

pub const NO_SENTENCES_ISSUE: &str = "Text is empty or has no sentences";

// patterns are compiled case-insensitive
#[derive(Clone, Debug)]
pub struct Rule {
  pub name: String,
  pub regex: Regex,
}

impl Rule {
  pub fn new(name: &str, pattern: &str) -> Result<Rule, regex::Error> {
    Ok(Rule { name: name.to_owned(), regex: Regex::new(&format!("(?i){}", pattern))? })
  }

  pub fn pattern(&self) -> &str {
    self.regex.as_str().trim_start_matches("(?i)")
  }
}

#[derive(Clone, Debug)]
pub struct RuleTable {
  pub archaic: Vec<Rule>,
  pub modern: Vec<Rule>,
}

const ARCHAIC_PATTERNS: &[(&str, &str)] = &[
  ("-ие", r"\b\w+ие\b"),
  ("-аго", r"\b\w+аго\b"),
  ("-яго", r"\b\w+яго\b"),
  ("-ши", r"\b\w+ши\b"),
  ("-шися", r"\b\w+шися\b"),
  ("-шии", r"\b\w+шии\b"),
];

const MODERN_MARKERS: &[(&str, &str)] = &[
  ("как", r"\bкак\b"),
  ("что", r"\bчто\b"),
  ("который", r"\bкоторый\b"),
  ("которая", r"\bкоторая\b"),
  ("в", r"\bв\b"),
  ("к", r"\bк\b"),
  ("более", r"\bболее\b"),
  ("чем", r"\bчем\b"),
];

fn build(table: &[(&str, &str)]) -> Vec<Rule> {
  table.iter()
    .map(|(name, pattern)| Rule::new(name, pattern).unwrap_or_else(|e| panic!("bad built-in rule {}: {}", name, e)))
    .collect()
}

impl Default for RuleTable {
  fn default() -> Self {
    RuleTable { archaic: build(ARCHAIC_PATTERNS), modern: build(MODERN_MARKERS) }
  }
}

impl RuleTable {
  pub fn empty() -> Self {
    RuleTable { archaic: vec![], modern: vec![] }
  }

  pub fn with_archaic(mut self, name: &str, pattern: &str) -> Result<Self, regex::Error> {
    self.archaic.push(Rule::new(name, pattern)?);
    Ok(self)
  }

  /// Parses `NAME=REGEX` into an extra archaic rule.
  pub fn with_archaic_spec(self, spec: &str) -> Result<Self, regex::Error> {
    match spec.split_once('=') {
      Some((name, pattern)) if !name.is_empty() => self.with_archaic(name, pattern),
      _ => self.with_archaic(spec, spec),
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModernityReport {
  pub is_modern: bool,
  pub issues: Vec<String>,
  pub sample: Vec<String>,
  pub archaic_hits: usize,
  /// Informational only; plays no part in `is_modern`.
  pub modern_hits: usize,
}

#[derive(Clone, Debug)]
pub struct ModernityScorer {
  pub rules: RuleTable,
  pub sample_sentences: usize,
  pub threshold: usize,
}

impl Default for ModernityScorer {
  fn default() -> Self {
    ModernityScorer { rules: RuleTable::default(), sample_sentences: SAMPLE_SENTENCES, threshold: ARCHAIC_THRESHOLD }
  }
}

impl ModernityScorer {
  pub fn with_rules(rules: RuleTable) -> Self {
    ModernityScorer { rules, ..Default::default() }
  }

  pub fn score(&self, text: &str, dictionary: &ArchaismDictionary) -> ModernityReport {
    let sample: Vec<&str> = tokenize::sentences(text).into_iter().take(self.sample_sentences).collect();

    if sample.is_empty() {
      return ModernityReport {
        is_modern: false,
        issues: vec![NO_SENTENCES_ISSUE.to_owned()],
        sample: vec![],
        archaic_hits: 0,
        modern_hits: 0,
      };
    }

    let mut issues = vec![];
    let mut archaic_hits = 0;
    let mut modern_hits = 0;

    for sentence in &sample {
      let shown = tokenize::prefix(sentence, PREVIEW_CHARS);

      for word in tokenize::word_tokens(sentence) {
        if dictionary.contains(&word) {
          archaic_hits += 1;
          issues.push(format!("Archaic word '{}' in sentence: {}...", word, shown));
        }
      }

      for rule in &self.rules.archaic {
        for m in rule.regex.find_iter(sentence) {
          if char_len(m.as_str()) > MIN_PATTERN_MATCH {
            archaic_hits += 1;
            issues.push(format!("Archaic form '{}' ({}) in sentence: {}...", m.as_str(), rule.name, shown));
          }
        }
      }

      modern_hits += self.rules.modern.iter().filter(|r| r.regex.is_match(sentence)).count();
    }

    ModernityReport {
      is_modern: archaic_hits < self.threshold,
      issues,
      sample: sample.into_iter().map(|s| s.to_owned()).collect(),
      archaic_hits,
      modern_hits,
    }
  }
}

pub fn score(text: &str, dictionary: &ArchaismDictionary) -> ModernityReport {
  ModernityScorer::default().score(text, dictionary)
}
