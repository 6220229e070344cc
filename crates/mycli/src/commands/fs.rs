use std::io::Write;

use anyhow::{Context, Result};
use log::info;

use crate::cli::FsCommand;

/// Run one `mycli fs` subcommand, writing its output to `out`.
///
/// # Errors
///
/// Returns the underlying file-system error with the offending path.
pub fn run_fs(cmd: &FsCommand, out: &mut impl Write) -> Result<()> {
    match cmd {
        FsCommand::Copy { src, dst } => {
            let copied = file_utils::copy_file(src, dst)?;
            info!("copied {} -> {}", src.display(), dst.display());
            writeln!(out, "copied {copied} bytes to {}", dst.display())?;
        }
        FsCommand::Ls { dir } => {
            if !file_utils::is_dir(dir) {
                anyhow::bail!("not a directory: {}", dir.display());
            }
            let mut files = file_utils::list_files(dir)?;
            files.sort();
            for file in files {
                writeln!(out, "{}", file.display())?;
            }
        }
        FsCommand::Rm { path } => {
            if !file_utils::exists(path) {
                info!("nothing to remove at {}", path.display());
            }
            file_utils::remove(path)?;
        }
        FsCommand::Cat { path } => {
            let data = file_utils::read_file(path)?;
            out.write_all(&data)
                .with_context(|| format!("Failed to write {} to output", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_then_cat() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("a/b/dst.txt");
        std::fs::write(&src, "payload").unwrap();

        let mut out = Vec::new();
        run_fs(&FsCommand::Copy { src, dst: dst.clone() }, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("copied 7 bytes"));

        let mut out = Vec::new();
        run_fs(&FsCommand::Cat { path: dst }, &mut out).unwrap();
        assert_eq!(out, b"payload");
    }

    #[test]
    fn test_ls_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "sub/c.txt"] {
            file_utils::write_file(dir.path().join(name), b"x").unwrap();
        }

        let mut out = Vec::new();
        run_fs(&FsCommand::Ls { dir: dir.path().to_path_buf() }, &mut out).unwrap();
        let listed: Vec<String> = String::from_utf8(out).unwrap().lines().map(String::from).collect();
        let expected: Vec<String> = ["a.txt", "b.txt", "sub/c.txt"]
            .iter()
            .map(|name| dir.path().join(name).display().to_string())
            .collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_ls_rejects_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("f.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(run_fs(&FsCommand::Ls { dir: file }, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_rm_missing_is_ok() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone");
        run_fs(&FsCommand::Rm { path }, &mut Vec::new()).unwrap();
    }
}
