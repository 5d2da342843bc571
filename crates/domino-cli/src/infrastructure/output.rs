//! Writers for generated sheets.
//!
//! Parent directories are created on demand, so an output path such as
//! `out/2024/dominos.svg` works on a clean checkout.

use std::path::{Path, PathBuf};

use domino_core::SvgDocument;
use thiserror::Error;
use tracing::info;

use crate::application::generate_sheet::SheetManifest;

/// Errors raised while writing output files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// A file system I/O error occurred.
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be serialised.
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes the SVG document to `path`.
///
/// # Errors
///
/// Returns [`OutputError::Io`] if the directory or file cannot be written.
pub fn write_svg(document: &SvgDocument, path: &Path) -> Result<(), OutputError> {
    ensure_parent_dir(path)?;
    document.write_to(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        width_mm = document.width_mm(),
        height_mm = document.height_mm(),
        "wrote SVG sheet"
    );
    Ok(())
}

/// Writes the manifest as pretty-printed JSON to `path`.
///
/// # Errors
///
/// Returns [`OutputError::Serialize`] if serialisation fails or
/// [`OutputError::Io`] if the file cannot be written.
pub fn write_manifest(manifest: &SheetManifest, path: &Path) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(manifest)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, json).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), sheet_id = %manifest.sheet_id, "wrote sheet manifest");
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|source| OutputError::Io {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
