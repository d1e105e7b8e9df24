use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{PawtrailError, PawtrailResult};

/// Directories scanned for a usable face when no font is configured.
const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

/// Load recap font bytes.
///
/// Reads `preferred` when it exists; otherwise falls back to the first
/// TTF/OTF face found under the system font directories.
pub fn load_font_bytes(preferred: Option<&Path>) -> PawtrailResult<Vec<u8>> {
    if let Some(path) = preferred
        && path.is_file()
    {
        return std::fs::read(path)
            .with_context(|| format!("read font '{}'", path.display()))
            .map_err(PawtrailError::from);
    }

    for dir in SYSTEM_FONT_DIRS {
        if let Some(found) = find_font_in_dir(Path::new(dir)) {
            return std::fs::read(&found)
                .with_context(|| format!("read font '{}'", found.display()))
                .map_err(PawtrailError::from);
        }
    }

    Err(PawtrailError::validation(
        "no recap font configured and no system TTF/OTF face found",
    ))
}

/// Depth-first search for the first TTF/OTF file under `dir`.
pub fn find_font_in_dir(dir: &Path) -> Option<PathBuf> {
    let rd = std::fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();

    for entry in rd.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext == "ttf" || ext == "otf" {
            return Some(path);
        }
    }

    subdirs.into_iter().find_map(|d| find_font_in_dir(&d))
}
