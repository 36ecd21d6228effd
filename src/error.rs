use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("File not found: {}", .0.display())]
  MissingFile(PathBuf),

  #[error("Malformed JSON in {}: {source}", path.display())]
  MalformedJson { path: PathBuf, source: serde_json::Error },

  #[error("Expected a JSON object in {}", .0.display())]
  NotAnObject(PathBuf),

  #[error("Field missing or not text: {0}")]
  MissingField(String),

  #[error("Unrecognized input: {0:?}")]
  InvalidUserInput(String),

  #[error("Could not write {}: {source}", path.display())]
  WriteFailure { path: PathBuf, source: io::Error },

  #[error("IO error: {0}")]
  Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
  pub fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Error::WriteFailure { path: path.into(), source }
  }
}
