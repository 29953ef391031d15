//! One recorded answer per label, stored as `<dir>/<label>.answer`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct AnswerStore {
    dir: PathBuf,
}

impl AnswerStore {
    pub const EXTENSION: &'static str = "answer";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        AnswerStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, label: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", label, Self::EXTENSION))
    }

    /// Read the recorded answer for `label`.
    ///
    /// A missing file is [`Error::MissingAnswerFile`]: there is no baseline
    /// to check against.
    pub fn read(&self, label: &str) -> Result<i64> {
        let path = self.path_for(label);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::MissingAnswerFile {
                    label: label.to_string(),
                    path,
                });
            }
            Err(source) => return Err(Error::Io { path, source }),
        };

        match content.trim().parse::<i64>() {
            Ok(answer) => Ok(answer),
            Err(_) => Err(Error::MalformedAnswer { path, content }),
        }
    }

    /// Record `answer` for `label`, replacing any previous value.
    pub fn write(&self, label: &str, answer: i64) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| Error::io(&self.dir, source))?;
        let path = self.path_for(label);
        fs::write(&path, format!("{}\n", answer)).map_err(|source| Error::io(&path, source))?;
        log::info!("recorded {} = {} in {}", label, answer, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_for_label() {
        let store = AnswerStore::new("answers");
        assert_eq!(
            store.path_for("day1_part2"),
            Path::new("answers").join("day1_part2.answer")
        );
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = AnswerStore::new(dir.path());

        store.write("X", 42).unwrap();
        assert_eq!(fs::read_to_string(store.path_for("X")).unwrap(), "42\n");
        assert_eq!(store.read("X").unwrap(), 42);

        store.write("X", -7).unwrap();
        assert_eq!(store.read("X").unwrap(), -7);
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = TempDir::new().unwrap();
        let store = AnswerStore::new(dir.path().join("nested").join("1"));

        store.write("day1_part1", 7).unwrap();
        assert_eq!(store.read("day1_part1").unwrap(), 7);
    }

    #[test]
    fn test_read_missing() {
        let dir = TempDir::new().unwrap();
        let store = AnswerStore::new(dir.path());

        match store.read("X") {
            Err(Error::MissingAnswerFile { label, path }) => {
                assert_eq!(label, "X");
                assert_eq!(path, store.path_for("X"));
            }
            other => panic!("expected MissingAnswerFile, got {:?}", other),
        }
    }

    #[test]
    fn test_read_tolerates_whitespace() {
        let dir = TempDir::new().unwrap();
        let store = AnswerStore::new(dir.path());
        fs::write(store.path_for("X"), "  150\r\n").unwrap();

        assert_eq!(store.read("X").unwrap(), 150);
    }

    #[test]
    fn test_read_malformed() {
        let dir = TempDir::new().unwrap();
        let store = AnswerStore::new(dir.path());
        fs::write(store.path_for("X"), "forty-two").unwrap();

        assert!(matches!(
            store.read("X"),
            Err(Error::MalformedAnswer { .. })
        ));
    }
}
