use crate::error::{Result, StoreError};
use chrono::Local;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "phonebook";
const BOOK_FILENAME: &str = "phone_book.txt";
const BACKUP_DIR: &str = "backups";

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(StoreError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    restrict_dir_permissions(&dir)?;
    Ok(dir)
}

pub fn book_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join(BOOK_FILENAME))
}

/// Explicit path first, then the configured one, then the data directory.
pub fn resolve_book_path(
    explicit: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> Result<PathBuf> {
    match explicit.or(configured) {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(StoreError::InvalidDataPath(path));
            }
            Ok(path)
        }
        None => book_path(),
    }
}

pub fn backup_path() -> Result<PathBuf> {
    let dir = ensure_data_dir()?.join(BACKUP_DIR);
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    Ok(dir.join(format!("phone_book-{stamp}.txt")))
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            restrict_dir_permissions(parent)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o700);
    fs::set_permissions(dir, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::resolve_book_path;
    use std::path::PathBuf;

    #[test]
    fn resolve_book_path_prefers_explicit() {
        let path = resolve_book_path(
            Some(PathBuf::from("cli.txt")),
            Some(PathBuf::from("config.txt")),
        )
        .expect("resolve");
        assert_eq!(path, PathBuf::from("cli.txt"));
    }

    #[test]
    fn resolve_book_path_falls_back_to_config() {
        let path = resolve_book_path(None, Some(PathBuf::from("config.txt"))).expect("resolve");
        assert_eq!(path, PathBuf::from("config.txt"));
    }

    #[test]
    fn resolve_book_path_rejects_empty() {
        assert!(resolve_book_path(Some(PathBuf::new()), None).is_err());
    }
}
