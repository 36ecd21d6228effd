use std::path::{Path, PathBuf};
use console::style;
use serde::Serialize;

use crate::archaisms::ArchaismDictionary;
use crate::modernity::{ModernityReport, ModernityScorer};
use crate::records::{self, Record};
use crate::tokenize::{char_len, preview};

pub const SAMPLE_TEXT_CHARS: usize = 300;
pub const SENTENCE_ECHO_CHARS: usize = 100;
pub const ISSUES_SHOWN: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordReport {
  pub file: PathBuf,
  pub title: String,
  pub field: String,
  pub field_exists: bool,
  pub field_length: usize,
  pub sample_text: String,
  pub modernity: Option<ModernityReport>,
}

impl RecordReport {
  pub fn is_modern(&self) -> bool {
    self.modernity.as_ref().map_or(false, |m| m.is_modern)
  }

  pub fn issue_count(&self) -> usize {
    self.modernity.as_ref().map_or(0, |m| m.issues.len())
  }
}

pub fn analyze_record(record: &Record, field: &str, dictionary: &ArchaismDictionary, scorer: &ModernityScorer) -> RecordReport {
  let title = record.title().unwrap_or("Unknown").to_owned();

  if record.has_field(field) && record.text(field).is_none() {
    tracing::warn!("{}: field '{}' is not text", record.path.display(), field);
  }

  match record.text(field) {
    Some(text) => RecordReport {
      file: record.path.clone(),
      title,
      field: field.to_owned(),
      field_exists: true,
      field_length: char_len(text),
      sample_text: preview(text, SAMPLE_TEXT_CHARS),
      modernity: Some(scorer.score(text, dictionary)),
    },
    None => RecordReport {
      file: record.path.clone(),
      title,
      field: field.to_owned(),
      field_exists: false,
      field_length: 0,
      sample_text: String::new(),
      modernity: None,
    }
  }
}

/// `None` when the record could not be loaded; the reason is logged.
pub fn analyze_record_file(path: &Path, field: &str, dictionary: &ArchaismDictionary, scorer: &ModernityScorer) -> Option<RecordReport> {
  let record = records::try_load(path)?;
  Some(analyze_record(&record, field, dictionary, scorer))
}

pub fn print_report(report: &RecordReport) {
  let Some(modernity) = &report.modernity else {
    println!("{} Field {} is missing", style("x").red(), report.field);
    return;
  };

  println!("Sampled the first {} sentences:", modernity.sample.len());
  for (i, sentence) in modernity.sample.iter().enumerate() {
    println!("  {}. {}", i + 1, preview(sentence, SENTENCE_ECHO_CHARS));
  }

  println!("Title: {}", report.title);
  println!("Length of {}: {} characters", report.field, report.field_length);
  println!("Modern rendering: {}", yes_no(modernity.is_modern));

  if modernity.issues.is_empty() {
    println!("No issues found");
  }
  else {
    println!("{}", style("Issues:").yellow());
    for issue in modernity.issues.iter().take(ISSUES_SHOWN) {
      println!("   - {}", issue);
    }
  }
}

pub fn print_summary(report: &RecordReport) {
  println!();
  println!("{}", style("RESULT").bold());
  println!("   File: {}", report.file.display());
  println!("   Modern rendering: {}", yes_no(report.is_modern()));
  if report.issue_count() > 0 {
    println!("   Issues found: {}", report.issue_count());
  }
}

fn yes_no(b: bool) -> String {
  if b { format!("{}", style("YES").green()) } else { format!("{}", style("NO").red()) }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn test_report_for_archaic_field() {
    let record = Record::from_json("p.json", r#"{"title": "Молитва", "contentModern": "Яко наш. Еже твое."}"#).unwrap();
    let dictionary = ArchaismDictionary::from_words(["яко", "еже"]);
    let report = analyze_record(&record, "contentModern", &dictionary, &ModernityScorer::default());

    assert_eq!(report.title, "Молитва");
    assert!(report.field_exists);
    assert_eq!(report.field_length, 18);
    assert_eq!(report.sample_text, "Яко наш. Еже твое.");
    assert!(!report.is_modern());
    assert_eq!(report.issue_count(), 2);
  }

  #[test]
  fn test_report_for_missing_field() {
    let record = Record::from_json("p.json", r#"{"content": "Текст.", "contentModern": 7}"#).unwrap();
    let report = analyze_record(&record, "contentModern", &ArchaismDictionary::new(), &ModernityScorer::default());
    assert_eq!(report.title, "Unknown");
    assert!(!report.field_exists);
    assert!(report.modernity.is_none());
    assert!(!report.is_modern());
  }

  #[test]
  fn test_long_sample_is_cut() {
    let text = "Слово ".repeat(100);
    let record = Record::from_json("p.json", &serde_json::json!({ "contentModern": text }).to_string()).unwrap();
    let report = analyze_record(&record, "contentModern", &ArchaismDictionary::new(), &ModernityScorer::default());
    assert_eq!(report.field_length, 600);
    assert_eq!(char_len(&report.sample_text), 303);
    assert!(report.sample_text.ends_with("..."));
  }

  #[test]
  fn test_analyze_file_failures() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{").unwrap();
    let scorer = ModernityScorer::default();
    assert!(analyze_record_file(&bad, "contentModern", &ArchaismDictionary::new(), &scorer).is_none());
    assert!(analyze_record_file(&dir.path().join("none.json"), "contentModern", &ArchaismDictionary::new(), &scorer).is_none());
  }
}
