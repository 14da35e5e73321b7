//! Capability-scoped file access for the EventHub command line.
//!
//! Every helper resolves an ambient directory once and performs the actual
//! read or write through a `cap-std` handle scoped to it.
#![forbid(unsafe_code)]

use std::io::{self, Read, Write};
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Read a whole UTF-8 file into a string.
///
/// # Errors
/// Propagates any IO error, including invalid UTF-8 content.
pub fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Write `contents` to `path`, creating missing parent directories and
/// truncating any existing file.
///
/// # Errors
/// Propagates any IO error raised while creating directories or writing.
pub fn write_file(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    let mut file = dir.create(name.as_str())?;
    file.write_all(contents)?;
    file.flush()
}

/// Return whether `path` names an existing regular file.
///
/// # Errors
/// Returns an error when the parent directory cannot be opened or the
/// entry cannot be inspected.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let inspected = parent_dir_and_name(path).and_then(|(dir, name)| dir.metadata(name.as_str()));
    match inspected {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Create the parent directory of `path` if it does not exist.
///
/// Paths without a parent, or whose parent is the root, need nothing.
///
/// # Errors
/// Propagates failures to open the base directory or create children.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) else {
        return Ok(());
    };
    let (base, relative) = split_base(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("'{path}' does not name a file")))?
        .to_owned();
    let parent = path
        .parent()
        .filter(|p| !p.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split `dir` into an ambient root (filesystem root, drive prefix, or the
/// current directory) and the path beneath it.
fn split_base(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_dir = dir.as_std_path();
    let base = match std_dir.components().next() {
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(prefix).join(std::path::MAIN_SEPARATOR_STR)
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR_STR),
        _ => Utf8PathBuf::from("."),
    };
    let relative = if base.as_str() == "." {
        dir.to_path_buf()
    } else {
        dir.strip_prefix(&base)
            .map_err(|_| io::Error::other(format!("cannot strip '{base}' from '{dir}'")))?
            .to_path_buf()
    };
    let handle = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((handle, relative))
}
