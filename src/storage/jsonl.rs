//! JSONL (JSON Lines) snapshot reading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{SnapshotDir, StorageError};

/// Entity types held in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Game,
    Player,
    Commander,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Game => "games.jsonl",
            EntityType::Player => "players.jsonl",
            EntityType::Commander => "commanders.jsonl",
        }
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for a specific entity type.
    pub fn for_entity(dir: &SnapshotDir, entity: EntityType) -> Self {
        Self::new(dir.entity_path(entity))
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all entities from the file.
    ///
    /// A missing file reads as an empty snapshot. Malformed lines are
    /// skipped with a warning so one bad record cannot poison a snapshot.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num, self.path, e
                    );
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestEntity {
        id: String,
        name: String,
        value: u32,
    }

    fn write_jsonl(path: &std::path::Path, items: &[TestEntity]) {
        let mut content = String::new();
        for item in items {
            content.push_str(&serde_json::to_string(item).unwrap());
            content.push('\n');
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_read_all() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.jsonl");

        let entities = vec![
            TestEntity {
                id: "1".to_string(),
                name: "First".to_string(),
                value: 100,
            },
            TestEntity {
                id: "2".to_string(),
                name: "Second".to_string(),
                value: 200,
            },
        ];
        write_jsonl(&path, &entities);

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let read_entities = reader.read_all().unwrap();

        assert_eq!(read_entities.len(), 2);
        assert_eq!(read_entities[0], entities[0]);
        assert_eq!(read_entities[1], entities[1]);
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.jsonl");

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        assert!(!reader.exists());
        assert!(reader.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_read_all_skips_bad_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad_lines.jsonl");

        std::fs::write(
            &path,
            r#"{"id":"1","name":"Good","value":1}
not-valid-json
{"id":"2","name":"Also Good","value":2}
"#,
        )
        .unwrap();

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let entities = reader.read_all().unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Good");
        assert_eq!(entities[1].name, "Also Good");
    }

    #[test]
    fn test_read_all_skips_empty_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty_lines.jsonl");

        std::fs::write(
            &path,
            r#"{"id":"1","name":"A","value":1}

{"id":"2","name":"B","value":2}
"#,
        )
        .unwrap();

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        assert_eq!(reader.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_for_entity_path() {
        let temp_dir = TempDir::new().unwrap();
        let dir = SnapshotDir::new(temp_dir.path().to_path_buf());

        let reader: JsonlReader<TestEntity> = JsonlReader::for_entity(&dir, EntityType::Game);
        assert_eq!(reader.path, dir.entity_path(EntityType::Game));
    }

    #[test]
    fn test_entity_type_filenames() {
        assert_eq!(EntityType::Game.filename(), "games.jsonl");
        assert_eq!(EntityType::Player.filename(), "players.jsonl");
        assert_eq!(EntityType::Commander.filename(), "commanders.jsonl");
    }

    #[test]
    fn test_reads_real_game_snapshot() {
        use crate::models::{Game, Participant};
        use chrono::{TimeZone, Utc};

        let temp_dir = TempDir::new().unwrap();
        let dir = SnapshotDir::new(temp_dir.path().to_path_buf());

        let game = Game::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 19, 0, 0).unwrap(),
            vec![
                Participant::new("p1".into(), "c1".into(), 0),
                Participant::new("p2".into(), "c2".into(), 1),
            ],
        );
        std::fs::write(
            dir.entity_path(EntityType::Game),
            format!("{}\n", serde_json::to_string(&game).unwrap()),
        )
        .unwrap();

        let reader: JsonlReader<Game> = JsonlReader::for_entity(&dir, EntityType::Game);
        let games = reader.read_all().unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, game.id);
        assert_eq!(games[0].pod_size(), 2);
    }
}
