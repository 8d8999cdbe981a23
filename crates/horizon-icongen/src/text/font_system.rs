//! Font file probing and per-file font databases.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{IconError, IconResult};
use crate::logging::targets;

/// Configuration for initializing a font system.
#[derive(Debug, Clone)]
pub struct FontSystemConfig {
    /// Locale string for text shaping (e.g., "en-US").
    pub locale: String,
}

impl Default for FontSystemConfig {
    fn default() -> Self {
        Self {
            locale: sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string()),
        }
    }
}

impl FontSystemConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Summary of a font file that parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedFont {
    /// Path the font was read from.
    pub path: PathBuf,
    /// Design units per em.
    pub units_per_em: u16,
    /// Number of glyphs in the first face.
    pub glyph_count: u16,
}

/// Check that `path` exists and parses as a font file.
///
/// A bare file name such as `arial.ttf` that is not found relative to the
/// working directory is looked up in the system font directories, and the
/// returned [`ProbedFont::path`] is where it was found. Only the first face
/// of a collection is inspected.
pub fn probe_font_file(path: impl AsRef<Path>) -> IconResult<ProbedFont> {
    let requested = path.as_ref();
    let (path, data) = match std::fs::read(requested) {
        Ok(data) => (requested.to_path_buf(), data),
        Err(source) => {
            let found = bare_file_name(requested).and_then(find_system_font);
            let Some(found) = found else {
                return Err(IconError::FontNotFound {
                    path: requested.to_path_buf(),
                    source,
                });
            };
            debug!(
                target: targets::TEXT,
                "Found {} in system fonts at {}",
                requested.display(),
                found.display()
            );
            let data = std::fs::read(&found).map_err(|source| IconError::FontNotFound {
                path: found.clone(),
                source,
            })?;
            (found, data)
        }
    };

    let face = match ttf_parser::Face::parse(&data, 0) {
        Ok(face) => face,
        Err(e) => {
            return Err(IconError::InvalidFont {
                path,
                reason: e.to_string(),
            });
        }
    };

    Ok(ProbedFont {
        units_per_em: face.units_per_em(),
        glyph_count: face.number_of_glyphs(),
        path,
    })
}

/// The file name of `path` if it has no directory part.
fn bare_file_name(path: &Path) -> Option<&OsStr> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Some(name),
        _ => None,
    }
}

/// Find an installed font file by its file name.
///
/// Scans the platform font directories once per process (Windows
/// `Fonts`, macOS `/Library/Fonts` and `/System/Library/Fonts`, XDG and
/// `/usr/share/fonts` elsewhere) and returns the first file whose name
/// matches exactly.
pub fn find_system_font(file_name: &OsStr) -> Option<PathBuf> {
    static SYSTEM_FONT_FILES: OnceLock<Vec<PathBuf>> = OnceLock::new();

    let files = SYSTEM_FONT_FILES.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        let files = system_font_files(&db);
        debug!(target: targets::TEXT, files = files.len(), "Indexed system fonts");
        files
    });
    find_by_file_name(files, file_name)
}

/// Distinct file paths backing the faces of `db`, in database order.
fn system_font_files(db: &fontdb::Database) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    for face in db.faces() {
        let path = match &face.source {
            fontdb::Source::File(path) => path,
            fontdb::Source::SharedFile(path, _) => path,
            fontdb::Source::Binary(_) => continue,
        };
        if !files.contains(path) {
            files.push(path.clone());
        }
    }
    files
}

fn find_by_file_name(files: &[PathBuf], file_name: &OsStr) -> Option<PathBuf> {
    files
        .iter()
        .find(|path| path.file_name() == Some(file_name))
        .cloned()
}

/// Information about a loaded font face.
#[derive(Debug, Clone)]
pub struct FontFaceInfo {
    /// The family names this face belongs to.
    pub families: Vec<String>,
    /// The weight of this face.
    pub weight: fontdb::Weight,
    /// The style of this face.
    pub style: fontdb::Style,
    /// The stretch of this face.
    pub stretch: fontdb::Stretch,
}

impl FontFaceInfo {
    /// The primary family name.
    pub fn family(&self) -> Option<&str> {
        self.families.first().map(String::as_str)
    }
}

/// A font system holding exactly the faces of one font file.
///
/// Wraps cosmic-text's FontSystem so shaping never falls back to a system
/// font that was not asked for.
pub struct FontSystem {
    inner: cosmic_text::FontSystem,
    path: PathBuf,
}

impl FontSystem {
    /// Create a font system containing only the faces in `path`.
    pub fn from_font_file(path: impl AsRef<Path>, config: FontSystemConfig) -> IconResult<Self> {
        let path = path.as_ref();
        let mut db = fontdb::Database::new();
        db.load_font_file(path)
            .map_err(|source| IconError::FontNotFound {
                path: path.to_path_buf(),
                source,
            })?;

        // fontdb skips unparsable files silently
        if db.faces().next().is_none() {
            return Err(IconError::InvalidFont {
                path: path.to_path_buf(),
                reason: "no font faces found".to_string(),
            });
        }

        let inner = cosmic_text::FontSystem::new_with_locale_and_db(config.locale, db);
        Ok(Self {
            inner,
            path: path.to_path_buf(),
        })
    }

    /// The file this font system was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a mutable reference to the underlying cosmic-text font system.
    pub fn inner_mut(&mut self) -> &mut cosmic_text::FontSystem {
        &mut self.inner
    }

    /// Information about the first face in the file.
    pub fn primary_face(&self) -> Option<FontFaceInfo> {
        self.inner.db().faces().next().map(|face| FontFaceInfo {
            families: face.families.iter().map(|(name, _)| name.clone()).collect(),
            weight: face.weight,
            style: face.style,
            stretch: face.stretch,
        })
    }

    /// Get the number of loaded font faces.
    pub fn face_count(&self) -> usize {
        self.inner.db().faces().count()
    }
}

impl std::fmt::Debug for FontSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSystem")
            .field("path", &self.path)
            .field("face_count", &self.face_count())
            .finish()
    }
}
