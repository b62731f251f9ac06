use crate::constants::{PHOTO_ALT, PHOTO_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// A displayable photo: its public URL path and alt text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    pub alt: String,
}

impl Photo {
    pub fn from_file_name(file_name: &str) -> Self {
        Self {
            src: format!("/{file_name}"),
            alt: PHOTO_ALT.to_string(),
        }
    }
}

pub fn is_photo_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            PHOTO_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// List the photos in `dir`, sorted by file name.
///
/// Index assignment follows this order, so adding or renaming a file changes
/// every derived layout.
pub fn discover(dir: &Path) -> io::Result<Vec<Photo>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if is_photo_file(name) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    log::debug!("[catalog] {} photos in {}", names.len(), dir.display());
    Ok(names.iter().map(|n| Photo::from_file_name(n)).collect())
}
