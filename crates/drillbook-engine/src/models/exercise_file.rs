use relative_path::{RelativePath, RelativePathBuf};

/// Marker in solution file names that the downloadable copy drops.
pub const SOLUTIONS_SUFFIX: &str = "_solutions";

/// An exercise file with a relative path and display-friendly name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl ExerciseFile {
    /// Create a new ExerciseFile from a path relative to the exercises root
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Human-readable name, e.g. `02_joins_solutions.sql` → `02 Joins `
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// File name on disk.
    pub fn file_name(&self) -> &str {
        self.relative_path.file_name().unwrap_or_default()
    }

    /// File name offered for download: the solutions marker removed.
    pub fn download_name(&self) -> String {
        self.file_name().replace(SOLUTIONS_SUFFIX, "")
    }

    /// Stem with underscores as spaces, every `solutions` removed, then title-cased.
    fn extract_display_name(path: &RelativePath) -> String {
        let stem = path.file_stem().unwrap_or("Untitled");
        title_case(&stem.replace('_', " ").replace("solutions", ""))
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
///
/// Digits, spaces and punctuation all start a new run, so `1st` becomes `1St`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

impl From<RelativePathBuf> for ExerciseFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for ExerciseFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
