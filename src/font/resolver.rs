//! Font Resolution
//!
//! Finds the four variants of a font family in a directory by file name
//! convention (`<Family>-Regular.ttf`, `-Bold.ttf`, `-Italic.ttf`,
//! `-BoldItalic.ttf`) and loads them with a shared size and DPI.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::face::{FontFace, FontFaceSet, FontStyle, GlyphFace};
use super::FontError;

/// Paths of the four variants found in a font directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFiles {
    pub regular: PathBuf,
    pub bold: PathBuf,
    pub italic: PathBuf,
    pub bold_italic: PathBuf,
}

impl FontFiles {
    pub fn path(&self, style: FontStyle) -> &Path {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
            FontStyle::BoldItalic => &self.bold_italic,
        }
    }
}

/// Monospace families shipped with all four variants by common
/// distributions, listed by directory and file names
const SYSTEM_FAMILIES: &[(&str, [&str; 4])] = &[
    (
        "/usr/share/fonts/truetype/liberation",
        [
            "LiberationMono-Regular.ttf",
            "LiberationMono-Bold.ttf",
            "LiberationMono-Italic.ttf",
            "LiberationMono-BoldItalic.ttf",
        ],
    ),
    (
        "/usr/share/fonts/liberation-mono",
        [
            "LiberationMono-Regular.ttf",
            "LiberationMono-Bold.ttf",
            "LiberationMono-Italic.ttf",
            "LiberationMono-BoldItalic.ttf",
        ],
    ),
    (
        "/usr/share/fonts/truetype/hack",
        ["Hack-Regular.ttf", "Hack-Bold.ttf", "Hack-Italic.ttf", "Hack-BoldItalic.ttf"],
    ),
    (
        "/usr/share/fonts/truetype/jetbrains-mono",
        [
            "JetBrainsMono-Regular.ttf",
            "JetBrainsMono-Bold.ttf",
            "JetBrainsMono-Italic.ttf",
            "JetBrainsMono-BoldItalic.ttf",
        ],
    ),
];

/// Single-file monospace fonts, used for every variant when no complete
/// family is installed
const SYSTEM_SINGLE_FILES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/ubuntu/UbuntuMono-R.ttf",
    "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
];

/// Scan `dir` for one `.ttf` file per style.
///
/// Entries that are directories or not `.ttf` files are ignored; the rest
/// are matched with [`match_font_names`].
pub fn resolve_font_files(dir: &Path) -> Result<FontFiles, FontError> {
    let read_error = |source| FontError::ReadDirectory {
        dir: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if entry.file_type().map_err(read_error)?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_owned());
        }
    }

    match_font_names(dir, names.iter().map(String::as_str))
}

/// Pick one file per style from a list of file names in `dir`.
///
/// Only names ending in `.ttf` are considered. Fails if a style suffix
/// matches two names or if any style has no match.
pub fn match_font_names<'a, I>(dir: &Path, names: I) -> Result<FontFiles, FontError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut names: Vec<&str> = names.into_iter().filter(|n| n.ends_with(".ttf")).collect();
    // Listing order is platform dependent
    names.sort_unstable();

    let mut found: HashMap<FontStyle, &str> = HashMap::new();
    for name in names {
        for style in FontStyle::ALL {
            if !name.ends_with(&style.file_suffix()) {
                continue;
            }
            if let Some(existing) = found.get(&style) {
                return Err(FontError::Duplicate {
                    style,
                    first: existing.to_string(),
                    second: name.to_owned(),
                });
            }
            tracing::debug!("Font {} resolved to {}", style, name);
            found.insert(style, name);
        }
    }

    let take = |style: FontStyle| {
        found
            .get(&style)
            .map(|name| dir.join(name))
            .ok_or_else(|| FontError::Missing {
                style,
                dir: dir.to_path_buf(),
            })
    };

    Ok(FontFiles {
        regular: take(FontStyle::Regular)?,
        bold: take(FontStyle::Bold)?,
        italic: take(FontStyle::Italic)?,
        bold_italic: take(FontStyle::BoldItalic)?,
    })
}

/// Resolve and load all four faces from `dir` at `size` points and `dpi`
pub fn load_font_set(dir: &Path, size: f32, dpi: f32) -> Result<FontFaceSet, FontError> {
    let files = resolve_font_files(dir)?;

    let load = |style: FontStyle| -> Result<Arc<dyn GlyphFace>, FontError> {
        let path = files.path(style);
        let data = fs::read(path).map_err(|source| FontError::ReadFile {
            style,
            path: path.to_path_buf(),
            source,
        })?;
        let face = FontFace::from_bytes(&data, size, dpi).map_err(|reason| FontError::Parse {
            style,
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(Arc::new(face))
    };

    let set = FontFaceSet::new(
        load(FontStyle::Regular)?,
        load(FontStyle::Bold)?,
        load(FontStyle::Italic)?,
        load(FontStyle::BoldItalic)?,
    );
    tracing::info!("Loaded fonts from {} at {}pt / {} dpi", dir.display(), size, dpi);
    Ok(set)
}

/// Load `dir`, or installed system fonts when `dir` does not exist.
///
/// A directory that exists but lacks a variant is still an error.
pub fn load_font_set_or_default(dir: &Path, size: f32, dpi: f32) -> Result<FontFaceSet, FontError> {
    match load_font_set(dir, size, dpi) {
        Err(FontError::ReadDirectory { source, .. }) => {
            tracing::warn!(
                "Cannot read font directory {} ({}), trying system fonts",
                dir.display(),
                source
            );
            load_system_font_set(size, dpi).ok_or_else(|| FontError::NoFontFound {
                dir: dir.to_path_buf(),
            })
        },
        other => other,
    }
}

/// Load the first installed system monospace font, in order of preference
pub fn load_system_font_set(size: f32, dpi: f32) -> Option<FontFaceSet> {
    for (dir, names) in SYSTEM_FAMILIES {
        let dir = Path::new(dir);
        let Ok(files) = match_font_names(dir, names.iter().copied()) else {
            continue;
        };
        let data: Result<Vec<Vec<u8>>, _> = FontStyle::ALL
            .iter()
            .map(|&style| fs::read(files.path(style)))
            .collect();
        let Ok(data) = data else {
            continue;
        };
        let fonts = [
            (data[0].as_slice(), names[0]),
            (data[1].as_slice(), names[1]),
            (data[2].as_slice(), names[2]),
            (data[3].as_slice(), names[3]),
        ];
        match FontFaceSet::from_bytes(fonts, size, dpi) {
            Ok(set) => {
                tracing::info!("Loaded font family from {}", dir.display());
                return Some(set);
            },
            Err(e) => tracing::debug!("Skipping {}: {}", dir.display(), e),
        }
    }

    for path in SYSTEM_SINGLE_FILES {
        let Ok(data) = fs::read(path) else {
            continue;
        };
        let data = data.as_slice();
        match FontFaceSet::from_bytes([(data, *path); 4], size, dpi) {
            Ok(set) => {
                tracing::info!("Loaded font: {} (used for all styles)", path);
                return Some(set);
            },
            Err(e) => tracing::debug!("Skipping {}: {}", path, e),
        }
    }

    None
}
