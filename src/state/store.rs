//! Persistence for the highest level reached.
//!
//! The game only ever stores one number. Stores report failures through
//! [`StoreError`]; the game logs them and carries on.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory name under the platform data dir.
pub const APP_DIR: &str = "pairdice";

/// File holding the [`LevelRecord`].
pub const RECORD_FILE: &str = "highest_level.json";

/// Persistence port for the highest level.
pub trait LevelStore: fmt::Debug {
    /// Stored level, or `None` if nothing has been saved yet.
    fn load_highest_level(&self) -> Result<Option<u32>, StoreError>;

    fn save_highest_level(&mut self, level: u32) -> Result<(), StoreError>;
}

/// Store errors.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Level store I/O failed: {}", e),
            Self::Parse(e) => write!(f, "Level store is corrupt: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// On-disk record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub highest_level: u32,
    pub reached_at: chrono::DateTime<chrono::Utc>,
}

/// Store kept in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    level: Option<u32>,
    /// Number of successful saves
    pub saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(level: u32) -> Self {
        Self {
            level: Some(level),
            saves: 0,
        }
    }
}

impl LevelStore for MemoryStore {
    fn load_highest_level(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.level)
    }

    fn save_highest_level(&mut self, level: u32) -> Result<(), StoreError> {
        self.level = Some(level);
        self.saves += 1;
        Ok(())
    }
}

/// Store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform data directory, or the working directory if
    /// there is none.
    pub fn default_location() -> Self {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(RECORD_FILE);
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full record, if the file exists.
    pub fn load_record(&self) -> Result<Option<LevelRecord>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }
}

impl LevelStore for JsonFileStore {
    fn load_highest_level(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.load_record()?.map(|r| r.highest_level))
    }

    fn save_highest_level(&mut self, level: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let record = LevelRecord {
            highest_level: level,
            reached_at: chrono::Utc::now(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&record)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("pairdice-store-{}-{}", std::process::id(), name));
        path.push(RECORD_FILE);
        path
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load_highest_level().unwrap(), None);

        store.save_highest_level(3).unwrap();
        assert_eq!(store.load_highest_level().unwrap(), Some(3));
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn test_file_store_missing_file() {
        let store = JsonFileStore::new(temp_path("missing"));
        assert_eq!(store.load_highest_level().unwrap(), None);
    }

    #[test]
    fn test_file_store_save_load() {
        let path = temp_path("roundtrip");
        let mut store = JsonFileStore::new(&path);

        store.save_highest_level(4).unwrap();
        assert_eq!(store.load_highest_level().unwrap(), Some(4));

        let record = store.load_record().unwrap().unwrap();
        assert_eq!(record.highest_level, 4);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_file_store_corrupt() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.load_highest_level().unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
        assert!(err.to_string().contains("corrupt"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_default_location() {
        let store = JsonFileStore::default_location();
        assert!(store.path().ends_with(Path::new(APP_DIR).join(RECORD_FILE)));
    }
}
