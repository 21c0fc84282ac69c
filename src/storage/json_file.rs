//! JSON file backed store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::recipes::Recipe;
use crate::storage::{RecipeStore, StoreError};

/// Keeps the collection as one pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl RecipeStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<Recipe>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No recipe file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    async fn save_all(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(recipes).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), count = recipes.len(), "Saved recipes");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::Instructions;

    fn sample() -> Vec<Recipe> {
        vec![
            Recipe {
                id: 2,
                title: "Tea".into(),
                ingredients: vec!["water".into(), "tea leaf".into()],
                instructions: Instructions::Text("Boil and steep".into()),
                cook_time: String::new(),
                difficulty: "medium".into(),
            },
            Recipe {
                id: 1,
                title: "Toast".into(),
                ingredients: vec!["bread".into()],
                instructions: Instructions::Steps(vec!["Slice".into(), "Toast".into()]),
                cook_time: "3 min".into(),
                difficulty: "easy".into(),
            },
        ]
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("recipes.json"));

        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("recipes.json"));

        store.save_all(&sample()).await.unwrap();
        assert_eq!(store.load_all().await.unwrap(), sample());
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("recipes.json");
        let store = JsonFileStore::new(&path);

        store.save_all(&sample()).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_file_is_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("recipes.json"));
        store.save_all(&sample()[..1]).await.unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": 2,"));
        assert!(text.contains("\"cookTime\": \"\""));
    }

    #[tokio::test]
    async fn test_save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("recipes.json"));

        store.save_all(&sample()).await.unwrap();
        store.save_all(&sample()[1..]).await.unwrap();
        assert_eq!(store.load_all().await.unwrap(), sample()[1..].to_vec());
    }

    #[tokio::test]
    async fn test_loose_legacy_file_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "title": "Soup", "ingredients": "water, salt",
                 "instructions": "Boil", "cookTime": 20, "difficulty": "easy"}]"#,
        )
        .unwrap();
        let store = JsonFileStore::new(&path);

        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded[0].ingredients, vec!["water, salt"]);
        assert_eq!(loaded[0].cook_time, "20");

        // The next write stores the normalized shapes.
        store.save_all(&loaded).await.unwrap();
        let rewritten: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rewritten[0]["ingredients"], serde_json::json!(["water, salt"]));
        assert_eq!(rewritten[0]["cookTime"], "20");
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_unreadable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be.
        let store = JsonFileStore::new(dir.path());

        assert!(matches!(store.load_all().await, Err(StoreError::Io { .. })));
        assert!(matches!(store.save_all(&sample()).await, Err(StoreError::Io { .. })));
    }
}
