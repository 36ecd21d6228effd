use std::{collections::{BTreeSet, HashMap}, fs, path::{Path, PathBuf}};

use crate::atomic;
use crate::config::{self, Layout};
use crate::error::Result;
use crate::records::Record;
use crate::tokenize::cyrillic_words;

pub const FREQUENCY_HEADER: &str = "# Word frequencies across the prayer texts\n# Format: word - number of occurrences\n\n";

fn field_texts<'a>(record: &'a Record, fields: &'a [&'a str]) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
  fields.iter().filter_map(move |f| record.non_empty_text(f).map(|t| (*f, t)))
}

pub fn unique_words(records: &[Record], fields: &[&str]) -> BTreeSet<String> {
  let mut all = BTreeSet::new();

  for record in records {
    for (field, text) in field_texts(record, fields) {
      let words: BTreeSet<String> = cyrillic_words(text).into_iter().collect();
      tracing::debug!("{}: {} - {} words", config::file_name_of(&record.path), field, words.len());
      all.extend(words);
    }
  }

  all
}

/// Occurrence counts, highest first. Equal counts keep first-seen order.
pub fn word_frequencies(records: &[Record], fields: &[&str]) -> Vec<(String, usize)> {
  let mut positions: HashMap<String, usize> = HashMap::new();
  let mut counts: Vec<(String, usize)> = vec![];

  for record in records {
    for (_, text) in field_texts(record, fields) {
      for word in cyrillic_words(text) {
        match positions.get(&word) {
          Some(&i) => counts[i].1 += 1,
          None => {
            positions.insert(word.clone(), counts.len());
            counts.push((word, 1));
          }
        }
      }
    }
  }

  counts.sort_by(|a, b| b.1.cmp(&a.1));
  counts
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPage<'a> {
  // 1-based
  pub number: usize,
  pub first: usize,
  pub last: usize,
  pub total: usize,
  pub words: &'a [String],
}

impl<'a> WordPage<'a> {
  pub fn render(&self) -> String {
    let mut out = format!(
      "# Words {}-{} of {}\n# Words on this page: {}\n\n",
      self.first, self.last, self.total, self.words.len()
    );
    for w in self.words {
      out.push_str(w);
      out.push('\n');
    }
    out
  }
}

pub fn paginate(words: &[String], per_page: usize) -> Vec<WordPage<'_>> {
  let per_page = per_page.max(1);
  let total = words.len();
  words.chunks(per_page).enumerate().map(|(i, chunk)| {
    let first = i * per_page + 1;
    WordPage { number: i + 1, first, last: first + chunk.len() - 1, total, words: chunk }
  }).collect()
}

pub fn page_count(total: usize, per_page: usize) -> usize {
  let per_page = per_page.max(1);
  (total + per_page - 1) / per_page
}

pub fn write_word_pages(words: &BTreeSet<String>, layout: &Layout, per_page: usize) -> Result<Vec<PathBuf>> {
  fs::create_dir_all(&layout.words_dir)?;

  let sorted: Vec<String> = words.iter().cloned().collect();
  let mut written = vec![];
  for page in paginate(&sorted, per_page) {
    let path = layout.page_path(page.number);
    atomic::overwrite(&path, page.render().as_bytes())?;
    tracing::info!("Wrote {} ({} words)", path.display(), page.words.len());
    written.push(path);
  }
  Ok(written)
}

pub fn render_frequencies(counts: &[(String, usize)]) -> String {
  let mut out = String::from(FREQUENCY_HEADER);
  for (word, count) in counts {
    out.push_str(&format!("{} - {}\n", word, count));
  }
  out
}

pub fn write_frequency_file(counts: &[(String, usize)], path: &Path) -> Result<()> {
  if let Some(dir) = path.parent() {
    fs::create_dir_all(dir)?;
  }
  atomic::overwrite(path, render_frequencies(counts).as_bytes())?;
  tracing::info!("Wrote word frequencies to {}", path.display());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokenize::is_cyrillic_word;

  fn record(json: &str) -> Record {
    Record::from_json("r.json", json).unwrap()
  }

  fn sample_records() -> Vec<Record> {
    vec![
      record(r#"{"title": "Один", "content": "Яко Отче наш, яко на небеси.", "contentModern": "", "summary": 3}"#),
      record(r#"{"title": "Два", "content": "Отче, избави мя. Word 2", "explanation": "Отче наш"}"#),
    ]
  }

  #[test]
  fn test_unique_words() {
    let words = unique_words(&sample_records(), &config::TEXT_FIELDS);
    let words: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
    assert_eq!(words, vec!["избави", "мя", "на", "наш", "небеси", "отче", "яко"]);
    assert!(words.iter().all(|w| is_cyrillic_word(w)));
  }

  #[test]
  fn test_unique_words_respects_field_list() {
    let words = unique_words(&sample_records(), &["explanation"]);
    assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["наш", "отче"]);
  }

  #[test]
  fn test_frequencies_stable_ties() {
    let counts = word_frequencies(&sample_records(), &config::TEXT_FIELDS);
    assert_eq!(counts, vec![
      ("отче".to_owned(), 3),
      ("яко".to_owned(), 2),
      ("наш".to_owned(), 2),
      ("на".to_owned(), 1),
      ("небеси".to_owned(), 1),
      ("избави".to_owned(), 1),
      ("мя".to_owned(), 1),
    ]);
    assert_eq!(render_frequencies(&counts[..1]), format!("{}отче - 3\n", FREQUENCY_HEADER));
  }

  #[test]
  fn test_paginate() {
    let words: Vec<String> = (0..7).map(|i| format!("слово{}", i)).collect();
    let pages = paginate(&words, 3);
    assert_eq!(pages.len(), 3);
    assert_eq!(page_count(7, 3), 3);
    assert_eq!((pages[2].number, pages[2].first, pages[2].last, pages[2].total), (3, 7, 7, 7));
    assert!(pages[0].render().starts_with("# Words 1-3 of 7\n# Words on this page: 3\n\nслово0\n"));
    assert!(paginate(&[], 3).is_empty());
  }

  #[test]
  fn test_write_word_pages() {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::new(dir.path().join("records"), dir.path().join("words"));
    let words: BTreeSet<String> = ["в", "а", "б"].iter().map(|s| s.to_string()).collect();

    let paths = write_word_pages(&words, &layout, 2).unwrap();
    assert_eq!(paths, vec![layout.page_path(1), layout.page_path(2)]);
    assert_eq!(fs::read_to_string(&paths[1]).unwrap(), "# Words 3-3 of 3\n# Words on this page: 1\n\nв\n");
  }
}
