use crate::error::{Result, StoreError};
use crate::file::restrict_file_permissions;
use crate::paths;
use std::fs;
use std::path::{Path, PathBuf};

pub fn backup_to(book: &Path, path: &Path) -> Result<()> {
    if !book.exists() {
        return Err(StoreError::MissingBook(book.to_path_buf()));
    }
    paths::ensure_parent_dir(path)?;
    let target = canonicalize_path(path)?;
    let main_target = canonicalize_path(book)?;
    if main_target == target || is_same_file_identity(&target, &main_target)? {
        return Err(StoreError::InvalidBackupPath(path.to_path_buf()));
    }
    fs::copy(&main_target, &target)?;
    restrict_file_permissions(&target)?;
    Ok(())
}

fn canonicalize_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(fs::canonicalize(path)?);
    }
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let parent = fs::canonicalize(parent)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidBackupPath(path.to_path_buf()))?;
    Ok(parent.join(file_name))
}

#[cfg(unix)]
fn is_same_file_identity(target: &Path, main: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;
    if !target.exists() || !main.exists() {
        return Ok(false);
    }
    let target_meta = fs::metadata(target)?;
    let main_meta = fs::metadata(main)?;
    Ok(target_meta.dev() == main_meta.dev() && target_meta.ino() == main_meta.ino())
}

#[cfg(not(unix))]
fn is_same_file_identity(_target: &Path, _main: &Path) -> Result<bool> {
    Ok(false)
}
