//! High score persistence
//!
//! One text file, one line: the decimal high score. Written only when a
//! finished run beats the stored value, never per frame. Corrupt contents
//! are a recoverable error, not a crash.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("save file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("corrupt save data: {0:?}")]
    Corrupt(String),
}

/// Read the stored high score
pub fn read(path: &Path) -> Result<u32, HighScoreError> {
    let contents = fs::read_to_string(path)?;
    contents
        .trim()
        .parse()
        .map_err(|_| HighScoreError::Corrupt(contents.trim().to_string()))
}

/// Overwrite the stored high score with its decimal string
pub fn write(path: &Path, score: u32) -> Result<(), HighScoreError> {
    fs::write(path, format!("{score}\n"))?;
    Ok(())
}

/// Read, creating the file with a zero score on first run; a corrupt file
/// logs a warning and yields zero instead of terminating the process.
pub fn load_or_zero(path: &Path) -> u32 {
    match read(path) {
        Ok(score) => score,
        Err(HighScoreError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("no high score file at {}, creating", path.display());
            if let Err(err) = write(path, 0) {
                log::warn!("could not create high score file: {err}");
                return 0;
            }
            read(path).unwrap_or(0)
        }
        Err(HighScoreError::Corrupt(contents)) => {
            log::warn!("corrupt high score file ({contents:?}), defaulting to 0");
            0
        }
        Err(err) => {
            log::warn!("could not read high score: {err}");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("gapwing-test-{}-{}", std::process::id(), name));
        path
    }

    #[test]
    fn round_trip() {
        let path = temp_path("round-trip");
        write(&path, 42).unwrap();
        assert_eq!(read(&path).unwrap(), 42);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn first_run_creates_zero_file() {
        let path = temp_path("first-run");
        let _ = fs::remove_file(&path);
        assert_eq!(load_or_zero(&path), 0);
        // The fallback created the file, so a plain read now succeeds
        assert_eq!(read(&path).unwrap(), 0);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn corrupt_file_is_recoverable() {
        let path = temp_path("corrupt");
        fs::write(&path, "not a number").unwrap();
        assert!(matches!(read(&path), Err(HighScoreError::Corrupt(_))));
        assert_eq!(load_or_zero(&path), 0);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_is_single_decimal_line() {
        let path = temp_path("layout");
        write(&path, 1234).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1234\n");
        fs::remove_file(&path).unwrap();
    }
}
