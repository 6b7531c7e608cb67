use crate::models::{ContentKind, ExerciseContent, ExerciseFile, Topic};
use crate::parsing::{ParseError, parse_notebook, parse_sql};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid exercises directory: {0}")]
    InvalidExercisesDir(String),
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Unreadable directory entry: {0}")]
    Glob(#[from] glob::GlobError),
    #[error("Not an exercise file: {0}")]
    UnsupportedFile(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Read an exercise file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// List the files of a topic, sorted by path. Subdirectories are not searched.
pub fn scan_exercise_files(root: &Path, topic: &Topic) -> Result<Vec<ExerciseFile>, IoError> {
    let dir = topic.dir.to_path(root);
    if !dir.is_dir() {
        return Err(IoError::InvalidExercisesDir(format!(
            "topic directory not found: {}",
            dir.display()
        )));
    }

    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        topic.kind.extension()
    );

    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            log::warn!("skipping non UTF-8 file name: {}", path.display());
            continue;
        };
        files.push(ExerciseFile::new(topic.dir.join(name)));
    }
    files.sort();
    log::debug!("found {} files for topic {}", files.len(), topic.title);
    Ok(files)
}

/// Read and parse an exercise file with the parser for its topic.
pub fn load_exercise(
    topic: &Topic,
    file: &ExerciseFile,
    root: &Path,
) -> Result<ExerciseContent, LoadError> {
    let content = read_file(file.relative_path(), root)?;
    let parsed = match topic.kind {
        ContentKind::Sql => ExerciseContent::Sql(parse_sql(&content)),
        ContentKind::Notebook => ExerciseContent::Notebook(parse_notebook(&content)?),
    };
    Ok(parsed)
}

/// Copy a file's raw bytes into `dest_dir` under `file_name`.
pub fn export_file(
    relative_path: &RelativePath,
    root: &Path,
    dest_dir: &Path,
    file_name: &str,
) -> Result<PathBuf, IoError> {
    let source = relative_path.to_path(root);
    if !source.exists() {
        return Err(IoError::NotFound(source));
    }
    fs::create_dir_all(dest_dir)?;
    let dest = dest_dir.join(file_name);
    fs::copy(&source, &dest)?;
    Ok(dest)
}

/// Export a file and, when its topic keeps one, its unsolved counterpart.
///
/// The solution keeps its own name; the challenge gets the download name.
/// A topic data file is copied alongside under its own name.
pub fn export_exercise(
    topic: &Topic,
    file: &ExerciseFile,
    root: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, IoError> {
    let mut written = Vec::new();
    match topic.challenge_for(file) {
        Some(challenge) => {
            written.push(export_file(
                &challenge,
                root,
                dest_dir,
                &file.download_name(),
            )?);
            written.push(export_file(
                file.relative_path(),
                root,
                dest_dir,
                file.file_name(),
            )?);
        }
        None => {
            written.push(export_file(
                file.relative_path(),
                root,
                dest_dir,
                &file.download_name(),
            )?);
        }
    }
    if let Some(data) = &topic.data_file {
        let name = data.file_name().unwrap_or(data.as_str());
        written.push(export_file(data, root, dest_dir, name)?);
    }
    Ok(written)
}

/// Load a single file outside any topic, picking the parser from its extension.
pub fn load_path(path: &Path) -> Result<ExerciseContent, LoadError> {
    let kind = [ContentKind::Sql, ContentKind::Notebook]
        .into_iter()
        .find(|kind| path.extension().is_some_and(|ext| ext == kind.extension()))
        .ok_or_else(|| IoError::UnsupportedFile(path.to_path_buf()))?;
    let (Some(dir), Some(name)) = (path.parent(), path.file_name().and_then(|n| n.to_str()))
    else {
        return Err(IoError::UnsupportedFile(path.to_path_buf()).into());
    };

    let topic = Topic::new("", "", kind);
    load_exercise(&topic, &ExerciseFile::new(RelativePathBuf::from(name)), dir)
}

pub fn validate_exercises_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidExercisesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
