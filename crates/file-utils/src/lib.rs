//! # file-utils
//!
//! Thin convenience wrappers over `std::fs`.
//!
//! Files are created with mode `0644` and directories with `0755` on Unix.
//! Every failure carries the path it happened on.

pub mod error;

use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

pub use error::{FsError, Result};

#[cfg_attr(not(unix), allow(dead_code))]
const FILE_MODE: u32 = 0o644;
#[cfg_attr(not(unix), allow(dead_code))]
const DIR_MODE: u32 = 0o755;

/// Whether anything exists at `path`.
///
/// Like `Path::exists`, a broken symlink or a permission error reads as
/// "does not exist".
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Whether `path` exists and is a directory.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Copy the file at `src` to `dst`, creating `dst`'s parent directories.
///
/// An existing `dst` is truncated. The copy is synced to stable storage
/// before this returns.
///
/// # Errors
///
/// Returns [`FsError::SameFile`] if `dst` already names `src` (directly or
/// through a link), and [`FsError::Io`] naming whichever path failed to open,
/// create, copy or sync.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<u64> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let mut input = File::open(src).map_err(FsError::io(src))?;
    if is_same_file(src, dst)? {
        return Err(FsError::SameFile {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        });
    }
    create_parent(dst)?;
    let mut output = create_file(dst)?;
    let copied = io::copy(&mut input, &mut output).map_err(FsError::io(dst))?;
    output.sync_all().map_err(FsError::io(dst))?;
    debug!("copied {} bytes: {} -> {}", copied, src.display(), dst.display());
    Ok(copied)
}

/// Read the whole file at `path`.
///
/// # Errors
///
/// Returns [`FsError::Io`] if the file cannot be read.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(FsError::io(path))
}

/// Write `data` to `path`, replacing any existing content and creating
/// parent directories.
///
/// # Errors
///
/// Returns [`FsError::Io`] if a directory or the file cannot be created or
/// written.
pub fn write_file(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    create_parent(path)?;
    let mut file = create_file(path)?;
    file.write_all(data.as_ref()).map_err(FsError::io(path))?;
    debug!("wrote {} bytes to {}", data.as_ref().len(), path.display());
    Ok(())
}

/// Every file under `dir`, recursively. Directories are left out; the order
/// is traversal order, not sorted.
///
/// # Errors
///
/// Returns [`FsError::Walk`] if `dir` or any entry beneath it cannot be read.
pub fn list_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Remove `path` and, for a directory, everything beneath it. Removing a
/// path that does not exist succeeds.
///
/// # Errors
///
/// Returns [`FsError::Io`] for any failure other than "not found".
pub fn remove(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(FsError::io(path)(err)),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match removed {
        Ok(()) => {
            debug!("removed {}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(FsError::io(path)(err)),
    }
}

/// Whether an existing `dst` is the same file as `src`. Truncating `dst`
/// would otherwise empty the source before it is read.
fn is_same_file(src: &Path, dst: &Path) -> Result<bool> {
    let dst = match fs::canonicalize(dst) {
        Ok(dst) => dst,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(FsError::io(dst)(err)),
    };
    let src = fs::canonicalize(src).map_err(FsError::io(src))?;
    Ok(src == dst)
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            let mut builder = DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::DirBuilderExt;
                builder.mode(DIR_MODE);
            }
            builder.create(parent).map_err(FsError::io(parent))
        }
        _ => Ok(()),
    }
}

fn create_file(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path).map_err(FsError::io(path))
}
