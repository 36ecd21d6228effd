use std::{fs, io::Write, path::Path};
use tempfile::Builder;

use crate::error::{Error, Result};

// write to a sibling temp file, then rename over the target
pub fn overwrite(path: &Path, contents: &[u8]) -> Result<()> {
  let dir = match path.parent() {
    Some(p) if !p.as_os_str().is_empty() => p,
    _ => Path::new("."),
  };

  let mut file = Builder::new()
    .prefix(".archaism-tools")
    .suffix(".tmp")
    .tempfile_in(dir)
    .map_err(|e| Error::write_failure(path, e))?;

  // the temp file starts out 0600; keep whatever mode the target had
  if let Ok(meta) = fs::metadata(path) {
    file.as_file().set_permissions(meta.permissions()).map_err(|e| Error::write_failure(path, e))?;
  }

  file.write_all(contents).map_err(|e| Error::write_failure(path, e))?;
  file.flush().map_err(|e| Error::write_failure(path, e))?;
  file.persist(path).map_err(|e| Error::write_failure(path, e.error))?;
  Ok(())
}
