use crate::constants::UPLOAD_PREFIX;
use crate::error::AppError;
use axum::extract::multipart::Field;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::{fs::File, io::AsyncWriteExt};

/// Reduces a client-supplied filename to its last path component.
///
/// Both `/` and `\` count as separators so a Windows-style name can't climb
/// out of the upload directory either. Returns `None` when nothing usable is
/// left.
pub fn sanitize_filename(name: &str) -> Option<&str> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    match base {
        "" | "." | ".." => None,
        base => Some(base),
    }
}

pub fn storage_path(upload_dir: &Path, filename: &str) -> PathBuf {
    upload_dir.join(format!("{}{}", UPLOAD_PREFIX, filename))
}

/// Streams a multipart field into `path`, replacing any previous file.
///
/// Chunks land in a temporary file next to `path` which is only renamed into
/// place once the whole field has been received, so a failed upload leaves
/// the old file untouched.
pub async fn store_field(field: &mut Field<'_>, path: &Path) -> Result<u64, AppError> {
    let storage_err = |source: std::io::Error| AppError::Storage {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let (std_file, temp_path) = NamedTempFile::new_in(dir)
        .map_err(storage_err)?
        .into_parts();

    let mut file = File::from_std(std_file);
    let mut written = 0u64;
    while let Some(chunk) = field.chunk().await? {
        file.write_all(&chunk).await.map_err(storage_err)?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(storage_err)?;
    drop(file);

    temp_path
        .persist(path)
        .map_err(|err| storage_err(err.error))?;

    Ok(written)
}
