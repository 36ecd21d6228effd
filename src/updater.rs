use std::path::Path;
use console::style;

use crate::error::{Error, Result};
use crate::records::{self, Record};
use crate::splitter::{split_default, split_long_field};
use crate::tokenize::{char_len, preview};

pub const PREVIEW_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
  pub length: usize,
  pub preview: String,
  pub parts: Vec<String>,
}

/// `None` when the field is absent or not text. Without `max_length` the
/// field is split at the default length.
pub fn field_info(record: &Record, field: &str, max_length: Option<usize>) -> Option<FieldInfo> {
  let content = record.text(field)?;
  let parts = match max_length {
    Some(n) => split_long_field(content, n),
    None => split_default(content),
  };
  Some(FieldInfo {
    length: char_len(content),
    preview: preview(content, PREVIEW_CHARS),
    parts,
  })
}

pub fn update_field(record: &mut Record, field: &str, content: &str) -> Result<()> {
  if record.has_field(field) && record.text(field).is_none() {
    return Err(Error::MissingField(field.to_owned()));
  }
  record.set_text(field, content);
  Ok(())
}

#[derive(Clone, Debug, Default)]
pub struct UpdateRequest<'a> {
  pub field: &'a str,
  pub new_content: Option<&'a str>,
  pub max_length: Option<usize>,
  pub show_parts: bool,
}

fn print_field_info(field: &str, info: &Option<FieldInfo>, show_parts: bool) {
  println!("Field '{}':", field);
  println!("  Exists: {}", info.is_some());
  if let Some(info) = info {
    println!("  Length: {} characters", info.length);
    println!("  Preview: {}", info.preview);
    println!("  Parts: {}", info.parts.len());
    if show_parts {
      for (i, part) in info.parts.iter().enumerate() {
        println!("{}", style(format!("--- part {} ({} characters) ---", i + 1, char_len(part))).dim());
        println!("{}", part);
      }
    }
  }
}

/// Reports on one field and, when new content is given, overwrites the field
/// and saves the record. Failures are logged and reported as `false`.
pub fn process_record_file(path: &Path, request: &UpdateRequest) -> bool {
  println!("Processing {}", path.display());

  let Some(mut record) = records::try_load(path) else {
    return false;
  };

  let info = field_info(&record, request.field, request.max_length);
  print_field_info(request.field, &info, request.show_parts);

  let Some(content) = request.new_content else {
    return true;
  };

  println!("Updating field '{}'...", request.field);
  if let Err(e) = update_field(&mut record, request.field, content) {
    tracing::error!("Could not update field '{}': {}", request.field, e);
    return false;
  }

  match record.save() {
    Ok(()) => {
      println!("{} File updated", style("ok").green());
      true
    },
    Err(e) => {
      tracing::error!("Could not save {}: {}", path.display(), e);
      false
    }
  }
}
