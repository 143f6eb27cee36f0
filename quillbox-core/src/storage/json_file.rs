/*
    json_file.rs - File-backed persistence

    One <key>.json file per storage key under a data directory.
    Writes go to a temporary file first and are renamed into place,
    so a crash mid-write never leaves a truncated document behind.
*/

use super::{PersistencePort, StorageKey, StorageResult};
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::PathBuf;

/// Persistence backend storing each key as a JSON file
pub struct JsonFileBackend {
    data_dir: PathBuf,
}

impl JsonFileBackend {
    /// Open a backend rooted at `data_dir`, creating the directory if needed.
    pub fn open(data_dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let data_dir = data_dir.into();
        create_dir_all(&data_dir)?;
        Ok(JsonFileBackend { data_dir })
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.data_dir.join(format!("{}.json", key.as_str()))
    }
}

impl PersistencePort for JsonFileBackend {
    fn save(&self, key: StorageKey, json: &str) -> StorageResult<()> {
        let temp_path = self.data_dir.join(format!("{}.json.tmp", key.as_str()));
        let mut file = File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        drop(file);

        std::fs::rename(temp_path, self.path_for(key))?;
        Ok(())
    }

    fn load(&self, key: StorageKey) -> StorageResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn remove(&self, key: StorageKey) -> StorageResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let backend = JsonFileBackend::open(dir.path()).unwrap();

        backend.save(StorageKey::Users, r#"[{"username":"admin"}]"#).unwrap();

        let loaded = backend.load(StorageKey::Users).unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"[{"username":"admin"}]"#));
    }

    #[test]
    fn test_load_absent_key() {
        let dir = tempdir().unwrap();
        let backend = JsonFileBackend::open(dir.path()).unwrap();

        assert!(backend.load(StorageKey::ContentData).unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let dir = tempdir().unwrap();
        let backend = JsonFileBackend::open(dir.path()).unwrap();

        backend.save(StorageKey::ContentDraft, r#"{"title":"a"}"#).unwrap();
        backend.save(StorageKey::ContentDraft, r#"{"title":"b"}"#).unwrap();

        let loaded = backend.load(StorageKey::ContentDraft).unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"title":"b"}"#));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let backend = JsonFileBackend::open(dir.path()).unwrap();

        backend.save(StorageKey::Session, r#"{"username":"alice"}"#).unwrap();
        backend.remove(StorageKey::Session).unwrap();
        assert!(backend.load(StorageKey::Session).unwrap().is_none());

        // Removing again is a no-op
        backend.remove(StorageKey::Session).unwrap();
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let backend = JsonFileBackend::open(dir.path()).unwrap();

        backend.save(StorageKey::Users, "[]").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["users.json"]);
    }
}
