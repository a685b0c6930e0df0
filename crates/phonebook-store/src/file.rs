use crate::error::{Result, StoreError};
use crate::paths;
use phonebook_core::{decode, encode, Contact};
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Reads every record in the book. A missing file is an empty book.
pub fn load(path: &Path) -> Result<Vec<Contact>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut contacts = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let contact = decode(line).map_err(|source| StoreError::MalformedRecord {
            line: index + 1,
            source,
        })?;
        contacts.push(contact);
    }
    Ok(contacts)
}

/// Rewrites the whole book in the given order.
pub fn save(path: &Path, contacts: &[Contact]) -> Result<()> {
    paths::ensure_parent_dir(path)?;

    let mut buffer = String::new();
    for contact in contacts {
        buffer.push_str(&encode(contact));
    }

    let staging = staging_path(path);
    let written = write_staging(&staging, buffer.as_bytes()).and_then(|()| {
        fs::rename(&staging, path)?;
        Ok(())
    });
    if written.is_err() {
        let _ = fs::remove_file(&staging);
    }
    written
}

fn write_staging(staging: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = fs::File::create(staging)?;
    restrict_file_permissions(staging)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from("phone_book"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(unix)]
pub(crate) fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    if path.exists() {
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}

#[cfg(not(unix))]
pub(crate) fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::staging_path;
    use std::path::{Path, PathBuf};

    #[test]
    fn staging_path_is_a_sibling() {
        assert_eq!(
            staging_path(Path::new("data/phone_book.txt")),
            PathBuf::from("data/phone_book.txt.tmp")
        );
    }
}
