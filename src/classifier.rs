use std::{collections::VecDeque, fs, io, path::{Path, PathBuf}};
use console::style;
use dialoguer::Input;

use crate::archaisms::ArchaismDictionary;
use crate::config::{self, Layout};
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
  Archaic,
  NotArchaic,
  SkipPage,
  Quit,
}

impl Decision {
  pub fn parse(answer: &str) -> Result<Decision> {
    use Decision::*;
    match answer.trim().to_lowercase().as_str() {
      "y" => Ok(Archaic),
      "n" => Ok(NotArchaic),
      "s" => Ok(SkipPage),
      "q" => Ok(Quit),
      other => Err(Error::InvalidUserInput(other.to_owned())),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageOutcome {
  /// Every word on the page was seen.
  Continue,
  StopPage,
  StopSession,
}

pub trait Curator {
  /// Raw answer for `word`, the `position`-th (1-based) of `total` words on the page.
  fn answer(&mut self, word: &str, position: usize, total: usize) -> io::Result<String>;

  fn continue_to(&mut self, next_page: &Path) -> io::Result<bool>;

  /// Start page number (1-based) or `all`.
  fn start_choice(&mut self, page_count: usize) -> io::Result<String>;
}

pub struct TerminalCurator;

fn ask(prompt: String) -> io::Result<String> {
  Input::<String>::new()
    .with_prompt(prompt)
    .allow_empty(true)
    .interact_text()
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

impl Curator for TerminalCurator {
  fn answer(&mut self, word: &str, position: usize, total: usize) -> io::Result<String> {
    println!();
    println!("[{}/{}] Word: '{}'", position, total, style(word).cyan().bold());
    ask("Archaic? (y/n/s - skip page/q - quit)".to_owned())
  }

  fn continue_to(&mut self, next_page: &Path) -> io::Result<bool> {
    let answer = ask(format!("Continue with {}? (y/n)", config::file_name_of(next_page)))?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
  }

  fn start_choice(&mut self, page_count: usize) -> io::Result<String> {
    ask(format!("Start from which page? (1-{} or 'all')", page_count))
  }
}

/// Answers taken from a fixed list. Running out of answers reads as `q`,
/// a declined continue and `all`.
#[derive(Debug, Default)]
pub struct ScriptedCurator {
  pub answers: VecDeque<String>,
  pub continues: VecDeque<bool>,
  pub start: Option<String>,
  pub asked: Vec<String>,
}

impl ScriptedCurator {
  pub fn new<I, S>(answers: I) -> Self
  where I: IntoIterator<Item = S>, S: Into<String> {
    ScriptedCurator { answers: answers.into_iter().map(Into::into).collect(), ..Default::default() }
  }

  pub fn with_continues(mut self, continues: &[bool]) -> Self {
    self.continues = continues.iter().copied().collect();
    self
  }

  pub fn with_start(mut self, start: &str) -> Self {
    self.start = Some(start.to_owned());
    self
  }
}

impl Curator for ScriptedCurator {
  fn answer(&mut self, word: &str, _position: usize, _total: usize) -> io::Result<String> {
    self.asked.push(word.to_owned());
    Ok(self.answers.pop_front().unwrap_or_else(|| "q".to_owned()))
  }

  fn continue_to(&mut self, _next_page: &Path) -> io::Result<bool> {
    Ok(self.continues.pop_front().unwrap_or(false))
  }

  fn start_choice(&mut self, _page_count: usize) -> io::Result<String> {
    Ok(self.start.take().unwrap_or_else(|| "all".to_owned()))
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageResult {
  pub added: Vec<String>,
  pub outcome: PageOutcome,
}

/// Asks about every word of the page not yet in `dictionary`, adding the
/// ones marked archaic. An unrecognized answer leaves the word unclassified.
pub fn classify_page(words: &[String], dictionary: &mut ArchaismDictionary, curator: &mut dyn Curator) -> Result<PageResult> {
  let mut added = vec![];
  let total = words.len();

  for (i, word) in words.iter().enumerate() {
    if dictionary.contains(word) {
      continue;
    }

    let answer = curator.answer(word, i + 1, total)?;
    match Decision::parse(&answer) {
      Ok(Decision::Archaic) => {
        dictionary.insert(word);
        added.push(word.clone());
        println!("{} '{}' added to archaisms", style("+").green(), word);
      },
      Ok(Decision::NotArchaic) => {
        println!("{} '{}' is not archaic", style("-").red(), word);
      },
      Ok(Decision::SkipPage) => {
        println!("Skipping the rest of the page...");
        return Ok(PageResult { added, outcome: PageOutcome::StopPage });
      },
      Ok(Decision::Quit) => {
        return Ok(PageResult { added, outcome: PageOutcome::StopSession });
      },
      Err(e) => {
        tracing::warn!("{}, moving on", e);
      }
    }
  }

  Ok(PageResult { added, outcome: PageOutcome::Continue })
}

pub fn read_page(path: &Path) -> Result<Vec<String>> {
  let text = match fs::read_to_string(path) {
    Ok(text) => text,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(Error::MissingFile(path.to_owned())),
    Err(e) => return Err(e.into()),
  };

  Ok(text.lines()
    .map(|l| l.trim())
    .filter(|l| !l.is_empty() && !l.starts_with('#'))
    .map(|l| l.to_owned())
    .collect())
}

pub fn list_pages(dir: &Path) -> Result<Vec<PathBuf>> {
  if !dir.is_dir() {
    return Err(Error::MissingFile(dir.to_owned()));
  }

  let mut pages = vec![];
  for entry in fs::read_dir(dir)? {
    let path = entry?.path();
    let is_page = path.file_name().and_then(|n| n.to_str()).map_or(false, config::is_page_file_name);
    if is_page && path.is_file() {
      pages.push(path);
    }
  }
  pages.sort();
  Ok(pages)
}

/// Applies a start choice: a 1-based page number or `all`. Anything else
/// starts from the first page.
pub fn select_pages<'a>(pages: &'a [PathBuf], choice: &str) -> Result<&'a [PathBuf]> {
  let choice = choice.trim();

  if !choice.is_empty() && choice.chars().all(|c| c.is_ascii_digit()) {
    return match choice.parse::<usize>() {
      Ok(n) if n >= 1 && n <= pages.len() => Ok(&pages[n - 1 ..]),
      _ => Err(Error::InvalidUserInput(choice.to_owned())),
    };
  }

  if !choice.eq_ignore_ascii_case("all") {
    println!("Starting from the first page");
  }
  Ok(pages)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
  pub pages_visited: usize,
  pub added: Vec<String>,
  pub quit: bool,
}

pub fn run_pages(pages: &[PathBuf], dictionary: &mut ArchaismDictionary, dictionary_path: &Path, curator: &mut dyn Curator) -> Result<SessionSummary> {
  let mut summary = SessionSummary::default();

  for (i, page) in pages.iter().enumerate() {
    println!();
    println!("{}", "=".repeat(50));
    println!("Page {}/{}: {}", i + 1, pages.len(), style(config::file_name_of(page)).bold());

    let words = read_page(page)?;
    tracing::info!("{} words on {}", words.len(), page.display());

    let result = classify_page(&words, dictionary, curator)?;
    summary.pages_visited += 1;

    println!();
    println!("New archaisms on this page: {}", result.added.len());
    println!("Archaisms in total: {}", dictionary.len());
    summary.added.extend(result.added);

    dictionary.save(dictionary_path)?;

    if result.outcome == PageOutcome::StopSession {
      summary.quit = true;
      break;
    }

    if let Some(next) = pages.get(i + 1) {
      if !curator.continue_to(next)? {
        break;
      }
    }
  }

  Ok(summary)
}

pub fn run_session(layout: &Layout, curator: &mut dyn Curator) -> Result<SessionSummary> {
  let dictionary_path = layout.archaisms_path();
  let mut dictionary = ArchaismDictionary::load(&dictionary_path)?;
  println!("Known archaisms: {}", dictionary.len());

  if !dictionary.is_empty() {
    let (shown, rest) = dictionary.sample(10);
    println!("{}", shown);
    if rest > 0 {
      println!("  ... and {} more", rest);
    }
  }

  let pages = list_pages(&layout.words_dir)?;
  println!("Word pages found: {}", pages.len());

  let selected = if dictionary.is_empty() {
    &pages[..]
  }
  else {
    let choice = curator.start_choice(pages.len())?;
    select_pages(&pages, &choice)?
  };

  run_pages(selected, &mut dictionary, &dictionary_path, curator)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn words(ws: &[&str]) -> Vec<String> {
    ws.iter().map(|w| w.to_string()).collect()
  }

  fn write_page(layout: &Layout, number: usize, ws: &[&str]) -> PathBuf {
    let path = layout.page_path(number);
    fs::write(&path, format!("# Words\n# Count: {}\n\n{}\n", ws.len(), ws.join("\n"))).unwrap();
    path
  }

  fn scratch() -> (tempfile::TempDir, Layout) {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::new(dir.path().join("records"), dir.path().join("words"));
    fs::create_dir_all(&layout.words_dir).unwrap();
    (dir, layout)
  }

  #[test]
  fn test_parse_decision() {
    assert_eq!(Decision::parse("y").unwrap(), Decision::Archaic);
    assert_eq!(Decision::parse(" N \n").unwrap(), Decision::NotArchaic);
    assert_eq!(Decision::parse("s").unwrap(), Decision::SkipPage);
    assert_eq!(Decision::parse("Q").unwrap(), Decision::Quit);
    assert!(matches!(Decision::parse("yes"), Err(Error::InvalidUserInput(_))));
    assert!(matches!(Decision::parse(""), Err(Error::InvalidUserInput(_))));
  }

  #[test]
  fn test_classify_page_full() {
    let mut dictionary = ArchaismDictionary::from_words(["аще"]);
    let mut curator = ScriptedCurator::new(["y", "huh", "n", "y"]);
    let result = classify_page(&words(&["аз", "аще", "бог", "мир", "яко"]), &mut dictionary, &mut curator).unwrap();

    assert_eq!(result.outcome, PageOutcome::Continue);
    assert_eq!(result.added, words(&["аз", "яко"]));
    assert_eq!(curator.asked, words(&["аз", "бог", "мир", "яко"]));
    assert!(dictionary.contains("яко"));
    assert!(!dictionary.contains("бог"));
  }

  #[test]
  fn test_skip_and_quit_are_distinct() {
    let page = words(&["аз", "буки", "веди"]);

    let mut dictionary = ArchaismDictionary::new();
    let result = classify_page(&page, &mut dictionary, &mut ScriptedCurator::new(["y", "s"])).unwrap();
    assert_eq!(result, PageResult { added: words(&["аз"]), outcome: PageOutcome::StopPage });

    let mut dictionary = ArchaismDictionary::new();
    let result = classify_page(&page, &mut dictionary, &mut ScriptedCurator::new(["y", "q"])).unwrap();
    assert_eq!(result, PageResult { added: words(&["аз"]), outcome: PageOutcome::StopSession });
  }

  #[test]
  fn test_read_and_list_pages() {
    let (_dir, layout) = scratch();
    write_page(&layout, 2, &["в", "г"]);
    write_page(&layout, 1, &["а", "б"]);
    fs::write(layout.words_dir.join("word_frequency.txt"), "а - 1\n").unwrap();

    let pages = list_pages(&layout.words_dir).unwrap();
    assert_eq!(pages, vec![layout.page_path(1), layout.page_path(2)]);
    assert_eq!(read_page(&pages[0]).unwrap(), words(&["а", "б"]));
    assert!(matches!(read_page(&layout.page_path(9)), Err(Error::MissingFile(_))));
  }

  #[test]
  fn test_select_pages() {
    let pages: Vec<PathBuf> = (1..=3).map(|i| PathBuf::from(config::page_file_name(i))).collect();
    assert_eq!(select_pages(&pages, "all").unwrap().len(), 3);
    assert_eq!(select_pages(&pages, "2").unwrap(), &pages[1..]);
    assert_eq!(select_pages(&pages, "whatever").unwrap().len(), 3);
    assert!(select_pages(&pages, "0").is_err());
    assert!(select_pages(&pages, "4").is_err());
  }

  #[test]
  fn test_quit_stops_session_and_saves() {
    let (_dir, layout) = scratch();
    let pages = vec![write_page(&layout, 1, &["аз", "буки"]), write_page(&layout, 2, &["веди"])];
    let mut dictionary = ArchaismDictionary::new();
    let mut curator = ScriptedCurator::new(["y", "q", "y"]).with_continues(&[true]);

    let summary = run_pages(&pages, &mut dictionary, &layout.archaisms_path(), &mut curator).unwrap();
    assert_eq!(summary, SessionSummary { pages_visited: 1, added: words(&["аз"]), quit: true });
    assert_eq!(ArchaismDictionary::load(&layout.archaisms_path()).unwrap(), ArchaismDictionary::from_words(["аз"]));
    assert_eq!(curator.continues.len(), 1);
  }

  #[test]
  fn test_skip_offers_next_page() {
    let (_dir, layout) = scratch();
    let pages = vec![write_page(&layout, 1, &["аз", "буки"]), write_page(&layout, 2, &["веди"])];
    let mut dictionary = ArchaismDictionary::new();
    let mut curator = ScriptedCurator::new(["s", "y"]).with_continues(&[true]);

    let summary = run_pages(&pages, &mut dictionary, &layout.archaisms_path(), &mut curator).unwrap();
    assert_eq!(summary, SessionSummary { pages_visited: 2, added: words(&["веди"]), quit: false });
  }

  #[test]
  fn test_declined_continue_stops() {
    let (_dir, layout) = scratch();
    let pages = vec![write_page(&layout, 1, &["аз"]), write_page(&layout, 2, &["веди"])];
    let mut dictionary = ArchaismDictionary::new();
    let mut curator = ScriptedCurator::new(["n", "y"]).with_continues(&[false]);

    let summary = run_pages(&pages, &mut dictionary, &layout.archaisms_path(), &mut curator).unwrap();
    assert_eq!(summary.pages_visited, 1);
    assert!(layout.archaisms_path().exists());
  }

  #[test]
  fn test_known_words_not_asked_again() {
    let (_dir, layout) = scratch();
    write_page(&layout, 1, &["аз", "буки", "веди"]);

    let mut first = ScriptedCurator::new(["y", "n", "y"]);
    run_session(&layout, &mut first).unwrap();

    let mut second = ScriptedCurator::new(["n"]).with_start("1");
    run_session(&layout, &mut second).unwrap();
    assert_eq!(second.asked, words(&["буки"]));
  }

  #[test]
  fn test_bad_start_page() {
    let (_dir, layout) = scratch();
    write_page(&layout, 1, &["аз"]);
    ArchaismDictionary::from_words(["яко"]).save(&layout.archaisms_path()).unwrap();

    let mut curator = ScriptedCurator::new(Vec::<String>::new()).with_start("7");
    assert!(matches!(run_session(&layout, &mut curator), Err(Error::InvalidUserInput(_))));
  }
}
