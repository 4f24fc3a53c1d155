use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database at `db_path` to `dest_file`, optionally as a zip.
    /// Returns the path actually written.
    pub fn backup(db_path: &str, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            let zip_path = dest.with_extension("zip");
            ensure_writable(&zip_path, force)?;
            compress_into(src, &zip_path)?;
            zip_path
        } else {
            ensure_writable(dest, force)?;
            fs::copy(src, dest)?;
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));

        match Connection::open(src) {
            Ok(conn) => {
                if let Err(e) = ttlog(
                    &conn,
                    "backup",
                    &final_path.to_string_lossy(),
                    if compress {
                        "Backup created and compressed"
                    } else {
                        "Backup created"
                    },
                ) {
                    warning(format!("Failed to write internal log: {}", e));
                }
            }
            Err(e) => warning(format!("Failed to write internal log: {}", e)),
        }

        Ok(final_path)
    }
}

/// Store `src` as the only entry of a deflated zip at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "geotimbra.sqlite".to_string());

    zip.start_file(entry_name, options)
        .map_err(|e| AppError::Other(format!("zip error: {e}")))?;

    let mut f = fs::File::open(src)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()
        .map_err(|e| AppError::Other(format!("zip error: {e}")))?;

    Ok(())
}
