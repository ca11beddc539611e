//! Participant repository for JSON storage
//!
//! Manages loading and saving the ordered participant list to participants.json

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::SplitError;
use crate::models::Participant;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Serializable participant data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ParticipantData {
    #[serde(default)]
    participants: Vec<Participant>,
}

/// Repository for participant persistence
///
/// Participants are kept in insertion order, which is the display order.
pub struct ParticipantRepository {
    path: PathBuf,
    data: RwLock<Vec<Participant>>,
}

impl ParticipantRepository {
    /// Create a new participant repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Participant>>, SplitError> {
        self.data
            .read()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Participant>>, SplitError> {
        self.data
            .write()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load participants from disk
    ///
    /// A missing or corrupt file yields an empty participant list.
    pub fn load(&self) -> Result<(), SplitError> {
        let file_data: ParticipantData = read_json_or_default(&self.path);

        let mut data = self.write()?;
        *data = file_data.participants;
        Ok(())
    }

    /// Save participants to disk
    pub fn save(&self) -> Result<(), SplitError> {
        let data = self.read()?;
        let file_data = ParticipantData {
            participants: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all participants in insertion order
    pub fn get_all(&self) -> Result<Vec<Participant>, SplitError> {
        Ok(self.read()?.clone())
    }

    /// Get a participant by exact name
    pub fn get(&self, name: &str) -> Result<Option<Participant>, SplitError> {
        Ok(self.read()?.iter().find(|p| p.name == name).cloned())
    }

    /// Check whether a name is in the active set
    pub fn contains(&self, name: &str) -> Result<bool, SplitError> {
        Ok(self.read()?.iter().any(|p| p.name == name))
    }

    /// Append a participant unless the name is already taken
    ///
    /// Returns `false` and leaves the list untouched on a duplicate name.
    pub fn insert(&self, participant: Participant) -> Result<bool, SplitError> {
        let mut data = self.write()?;
        if data.iter().any(|p| p.name == participant.name) {
            return Ok(false);
        }
        data.push(participant);
        Ok(true)
    }

    /// Re-insert a participant at a given position (used to undo a removal)
    pub fn restore_at(&self, index: usize, participant: Participant) -> Result<(), SplitError> {
        let mut data = self.write()?;
        let index = index.min(data.len());
        data.insert(index, participant);
        Ok(())
    }

    /// Remove a participant by name, returning it and its former position
    pub fn remove(&self, name: &str) -> Result<Option<(usize, Participant)>, SplitError> {
        let mut data = self.write()?;
        Ok(data
            .iter()
            .position(|p| p.name == name)
            .map(|index| (index, data.remove(index))))
    }

    /// Replace the whole participant list
    pub fn replace_all(&self, participants: Vec<Participant>) -> Result<(), SplitError> {
        *self.write()? = participants;
        Ok(())
    }

    /// Count participants
    pub fn count(&self) -> Result<usize, SplitError> {
        Ok(self.read()?.len())
    }
}
