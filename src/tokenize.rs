use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
  static ref CYRILLIC_WORD_RE: Regex = Regex::new(r"\b[а-яё]+\b").unwrap();
  static ref WORD_RE: Regex = Regex::new(r"\b\w+\b").unwrap();
  static ref SENTENCE_END_RE: Regex = Regex::new(r"[.!?]+").unwrap();
}

/// Lowercase runs of Cyrillic letters. Runs glued to Latin letters or digits
/// are not words.
pub fn cyrillic_words(text: &str) -> Vec<String> {
  let lower = text.to_lowercase();
  CYRILLIC_WORD_RE.find_iter(&lower).map(|m| m.as_str().to_owned()).collect()
}

#[cfg(test)]
pub(crate) fn is_cyrillic_word(token: &str) -> bool {
  !token.is_empty() && token.chars().all(|c| ('а'..='я').contains(&c) || c == 'ё')
}

pub fn word_tokens(text: &str) -> Vec<String> {
  let lower = text.to_lowercase();
  WORD_RE.find_iter(&lower).map(|m| m.as_str().to_owned()).collect()
}

/// Sentences between runs of `.`, `!` and `?`, trimmed, empty ones dropped.
pub fn sentences(text: &str) -> Vec<&str> {
  SENTENCE_END_RE.split(text).map(|s| s.trim()).filter(|s| !s.is_empty()).collect()
}

pub fn char_len(text: &str) -> usize {
  text.chars().count()
}

pub fn prefix(text: &str, n: usize) -> &str {
  match text.char_indices().nth(n) {
    Some((i, _)) => &text[..i],
    None => text,
  }
}

pub fn preview(text: &str, n: usize) -> String {
  let head = prefix(text, n);
  if head.len() < text.len() {
    format!("{}...", head)
  }
  else {
    head.to_owned()
  }
}
