use std::{fs, io, path::{Path, PathBuf}};
use serde_json::{Map, Value};

use crate::atomic;
use crate::error::{Error, Result};

/// A record file: a JSON object whose key order is kept on save.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
  pub path: PathBuf,
  pub fields: Map<String, Value>,
}

impl Record {
  pub fn from_json(path: impl Into<PathBuf>, text: &str) -> Result<Record> {
    let path = path.into();
    let value: Value = serde_json::from_str(text)
      .map_err(|source| Error::MalformedJson { path: path.clone(), source })?;
    match value {
      Value::Object(fields) => Ok(Record { path, fields }),
      _ => Err(Error::NotAnObject(path)),
    }
  }

  pub fn load(path: &Path) -> Result<Record> {
    let text = match fs::read_to_string(path) {
      Ok(text) => text,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(Error::MissingFile(path.to_owned())),
      Err(e) => return Err(e.into()),
    };
    Record::from_json(path, &text)
  }

  pub fn title(&self) -> Option<&str> {
    self.text("title")
  }

  pub fn has_field(&self, name: &str) -> bool {
    self.fields.contains_key(name)
  }

  pub fn text(&self, name: &str) -> Option<&str> {
    self.fields.get(name).and_then(|v| v.as_str())
  }

  pub fn non_empty_text(&self, name: &str) -> Option<&str> {
    self.text(name).filter(|t| !t.is_empty())
  }

  pub fn set_text(&mut self, name: &str, content: &str) {
    self.fields.insert(name.to_owned(), Value::String(content.to_owned()));
  }

  pub fn to_json(&self) -> Result<String> {
    serde_json::to_string_pretty(&self.fields)
      .map_err(|e| Error::write_failure(&self.path, io::Error::new(io::ErrorKind::InvalidData, e)))
  }

  pub fn save(&self) -> Result<()> {
    let text = self.to_json()?;
    atomic::overwrite(&self.path, text.as_bytes())
  }
}

pub fn try_load(path: &Path) -> Option<Record> {
  match Record::load(path) {
    Ok(record) => Some(record),
    Err(e) => {
      tracing::error!("Failed to load {}: {}", path.display(), e);
      None
    }
  }
}

pub fn list_record_files(dir: &Path) -> Result<Vec<PathBuf>> {
  if !dir.is_dir() {
    return Err(Error::MissingFile(dir.to_owned()));
  }

  let mut files = vec![];
  for entry in fs::read_dir(dir)? {
    let path = entry?.path();
    if path.is_file() && path.extension().map_or(false, |e| e == "json") {
      files.push(path);
    }
  }
  files.sort();
  Ok(files)
}

/// Every readable record in `dir`. Unreadable files are logged and skipped.
pub fn load_all(dir: &Path) -> Result<Vec<Record>> {
  let files = list_record_files(dir)?;
  tracing::info!("Found {} record files in {}", files.len(), dir.display());
  Ok(files.iter().filter_map(|p| try_load(p)).collect())
}
