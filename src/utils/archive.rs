use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};

/// Zips the contents of `dir` into an in-memory archive.
///
/// Entries are stored relative to `dir` with `/` separators, in sorted
/// order so the archive layout does not depend on directory iteration order.
pub fn zip_directory(dir: &Path) -> Result<Vec<u8>> {
    let mut files = Vec::new();
    collect_files(dir, dir, &mut files)?;
    files.sort();

    tracing::debug!("Zipping {} files from {}", files.len(), dir.display());

    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for relative in files {
        let data = fs::read(dir.join(&relative))?;
        zip.start_file::<_, ()>(relative, FileOptions::default())?;
        zip.write_all(&data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn collect_files(root: &Path, current: &Path, out: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(current)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, out)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            out.push(name);
        }
    }
    Ok(())
}
