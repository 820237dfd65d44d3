// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Make sure the export may land on `path`.
///
/// A missing file, or `force`, passes straight through. Otherwise the user
/// is asked; anything but yes cancels the export.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} already exists.", path.display()));
    if confirm("Replace it? [y/N]: ")? {
        info("The existing file will be replaced.");
        return Ok(());
    }

    Err(AppError::ExportCancelled)
}

fn confirm(prompt: &str) -> AppResult<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Write to a sibling `.part` file, then rename it into place.
/// On failure the `.part` file is removed and `path` is untouched.
pub(crate) fn write_atomically(path: &Path, bytes: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".part");
    let tmp = Path::new(&tmp);

    if let Err(e) = fs::write(tmp, bytes).and_then(|_| fs::rename(tmp, path)) {
        fs::remove_file(tmp).ok();
        return Err(e.into());
    }
    Ok(())
}
