use std::io;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, PatternError};
use log::{debug, info};
use thiserror::Error;

use crate::constants::{FILE_EXT, SOURCE_EXT};
use crate::image::decoder::DecodeError;
use crate::image::encoder::EncodingError;
use crate::image::{decode, encode};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodingError),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("No BMP files found in {}", .0.display())]
    NoBmpFiles(PathBuf),
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] PatternError),
    #[error("Failed to list directory: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Input was not a BMP file and was left alone
    Skipped,
    Converted {
        output: PathBuf,
        width: u32,
        height: u32,
        bytes: usize,
    },
}

/// Progress events emitted while converting a directory.
#[derive(Debug)]
pub enum Progress<'a> {
    /// BMP files about to be converted
    Found(usize),
    /// One file is about to be converted
    Started(&'a Path),
    /// One file finished, successfully or not
    Finished(&'a Path, &'a Result<Conversion, ConvertError>),
}

#[derive(Debug, Default)]
pub struct DirectoryReport {
    pub found: usize,
    pub converted: usize,
    pub failures: Vec<(PathBuf, ConvertError)>,
}

impl DirectoryReport {
    pub fn is_success(&self) -> bool {
        self.converted > 0
    }
}

pub fn is_bmp(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXT))
}

/// Sibling path with the same stem and the packed extension.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(FILE_EXT)
}

/// Converts one BMP into a sibling `.bin` file.
///
/// Anything that is not a `.bmp` is skipped rather than treated as an error.
/// The output is only created once the whole packed buffer is ready.
pub fn convert_file(input: &Path) -> Result<Conversion, ConvertError> {
    if !is_bmp(input) {
        debug!("Skipping {}: not a BMP file", input.display());
        return Ok(Conversion::Skipped);
    }

    let image = decode(input)?;
    let packed = encode(&image)?;

    let output = output_path(input);
    packed.save(&output)?;
    info!(
        "Converted {} to {} ({} bytes)",
        input.display(),
        output.display(),
        packed.data.len()
    );

    Ok(Conversion::Converted {
        output,
        width: packed.width,
        height: packed.height,
        bytes: packed.data.len(),
    })
}

/// Regular files directly inside `dir` with a `.bmp` extension, sorted.
pub fn find_bmp_files(dir: &Path) -> Result<Vec<PathBuf>, DirectoryError> {
    if !dir.is_dir() {
        return Err(DirectoryError::NotADirectory(dir.to_path_buf()));
    }

    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&dir.to_string_lossy()),
        SOURCE_EXT
    );
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry.map_err(io::Error::from)?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

pub fn convert_directory(dir: &Path) -> Result<DirectoryReport, DirectoryError> {
    convert_directory_with(dir, |_| {})
}

/// Like [`convert_directory`], reporting [`Progress`] as it goes.
///
/// One file failing never stops the others; failures end up in the report.
pub fn convert_directory_with<F>(dir: &Path, mut on_progress: F) -> Result<DirectoryReport, DirectoryError>
where
    F: FnMut(Progress<'_>),
{
    let files = find_bmp_files(dir)?;
    if files.is_empty() {
        return Err(DirectoryError::NoBmpFiles(dir.to_path_buf()));
    }
    debug!("Found {} BMP files in {}", files.len(), dir.display());
    on_progress(Progress::Found(files.len()));

    let mut report = DirectoryReport {
        found: files.len(),
        ..DirectoryReport::default()
    };

    for path in files {
        on_progress(Progress::Started(&path));
        let result = convert_file(&path);
        on_progress(Progress::Finished(&path, &result));

        match result {
            Ok(Conversion::Converted { .. }) => report.converted += 1,
            Ok(Conversion::Skipped) => {}
            Err(err) => {
                debug!("Failed to convert {}: {}", path.display(), err);
                report.failures.push((path, err));
            }
        }
    }

    info!(
        "Directory {}: {}/{} converted",
        dir.display(),
        report.converted,
        report.found
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bmp_case_insensitive() {
        assert!(is_bmp(Path::new("logo.bmp")));
        assert!(is_bmp(Path::new("dir/LOGO.BMP")));
        assert!(!is_bmp(Path::new("logo.png")));
        assert!(!is_bmp(Path::new("bmp")));
        assert!(!is_bmp(Path::new("logo.bmp.txt")));
    }

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(output_path(Path::new("a/b/logo.bmp")), PathBuf::from("a/b/logo.bin"));
        assert_eq!(output_path(Path::new("font.v2.BMP")), PathBuf::from("font.v2.bin"));
    }

    #[test]
    fn test_non_bmp_is_skipped() {
        let result = convert_file(Path::new("does/not/exist.txt")).unwrap();
        assert_eq!(result, Conversion::Skipped);
    }

    #[test]
    fn test_missing_bmp_is_an_error() {
        assert!(convert_file(Path::new("does/not/exist.bmp")).is_err());
    }

    #[test]
    fn test_not_a_directory() {
        let result = convert_directory(Path::new("does/not/exist"));
        assert!(matches!(result, Err(DirectoryError::NotADirectory(_))));
    }
}
