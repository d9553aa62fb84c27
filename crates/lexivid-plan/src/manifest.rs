use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use lexivid_core::{LexividError, LexividResult};

/// One entry of the generation manifest: a word plus the image and audio
/// assets illustrating it. Paths are relative to the project directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestRecord {
    pub word: String,
    pub image: PathBuf,
    pub audio: PathBuf,
}

impl ManifestRecord {
    /// Structural check beyond what serde enforces: all fields non-empty.
    fn check(&self, index: usize) -> Result<(), String> {
        if self.word.is_empty() {
            return Err(format!("record {}: empty word", index));
        }
        if self.image.as_os_str().is_empty() {
            return Err(format!("record {} ({:?}): empty image path", index, self.word));
        }
        if self.audio.as_os_str().is_empty() {
            return Err(format!("record {} ({:?}): empty audio path", index, self.word));
        }
        Ok(())
    }
}

/// The ordered list of records driving one generation run.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub records: Vec<ManifestRecord>,
}

impl Manifest {
    /// Load a manifest from a JSON file containing an array of records.
    ///
    /// Fails with `ManifestNotFound` when the file does not exist and
    /// `ManifestParse` when the content is not a valid array of records.
    /// An empty array is a valid, empty run.
    pub fn load(path: &Path) -> LexividResult<Self> {
        if !path.exists() {
            return Err(LexividError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let records: Vec<ManifestRecord> = serde_json::from_str(&content)
            .map_err(|e| LexividError::manifest_parse(format!("invalid JSON: {}", e), path))?;

        for (index, record) in records.iter().enumerate() {
            record
                .check(index)
                .map_err(|message| LexividError::manifest_parse(message, path))?;
        }

        Ok(Manifest { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_manifest() {
        let path = write_manifest(
            "lexivid_manifest_valid.json",
            r#"[
                {"word": "Cat", "image": "Assets/Images/cat.jpg", "audio": "Assets/Audio/cat.wav"},
                {"word": "Dog", "image": "Assets/Images/dog.jpg", "audio": "Assets/Audio/dog.wav"}
            ]"#,
        );

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.records[0].word, "Cat");
        assert_eq!(manifest.records[1].audio, PathBuf::from("Assets/Audio/dog.wav"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("lexivid_manifest_does_not_exist.json");
        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, LexividError::ManifestNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let path = write_manifest("lexivid_manifest_broken.json", "{ not json ]");
        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, LexividError::ManifestParse { .. }));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_not_an_array() {
        let path = write_manifest(
            "lexivid_manifest_object.json",
            r#"{"word": "Cat", "image": "a.jpg", "audio": "a.wav"}"#,
        );
        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, LexividError::ManifestParse { .. }));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_record_missing_field() {
        let path = write_manifest(
            "lexivid_manifest_missing_field.json",
            r#"[{"word": "Cat", "image": "a.jpg"}]"#,
        );
        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, LexividError::ManifestParse { .. }));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_empty_word_rejected() {
        let path = write_manifest(
            "lexivid_manifest_empty_word.json",
            r#"[{"word": "", "image": "a.jpg", "audio": "a.wav"}]"#,
        );
        let err = Manifest::load(&path).unwrap_err();
        assert!(err.to_string().contains("empty word"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_empty_array() {
        let path = write_manifest("lexivid_manifest_empty.json", "[]");
        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.is_empty());
        let _ = std::fs::remove_file(&path);
    }
}
