//! Participant service
//!
//! Adds and removes participants, enforcing unique names and the configured
//! removal policy. Removal never touches past expense records.

use crate::audit::AuditEntry;
use crate::config::settings::RemovalPolicy;
use crate::error::{SplitError, SplitResult};
use crate::models::Participant;
use crate::storage::Storage;

use super::balance::BalanceService;

/// Service for participant management
pub struct ParticipantService<'a> {
    storage: &'a Storage,
    removal_policy: RemovalPolicy,
}

impl<'a> ParticipantService<'a> {
    /// Create a participant service with the default removal policy
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            removal_policy: RemovalPolicy::default(),
        }
    }

    /// Use a specific removal policy
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    /// Add a new participant at the end of the list
    pub fn add(&self, name: &str) -> SplitResult<Participant> {
        let participant = Participant::new(name.trim());

        participant
            .validate()
            .map_err(|e| SplitError::Validation(e.to_string()))?;

        if !self.storage.participants.insert(participant.clone())? {
            return Err(SplitError::DuplicateParticipant(participant.name));
        }

        if let Err(err) = self.storage.participants.save() {
            self.storage.participants.remove(&participant.name)?;
            return Err(err);
        }

        if let Err(err) = self
            .storage
            .record_audit(&AuditEntry::participant_added(&participant))
        {
            tracing::warn!(error = %err, "failed to write audit entry");
        }

        tracing::info!(participant = %participant.name, "participant added");
        Ok(participant)
    }

    /// Remove a participant from the active set
    ///
    /// Expense records that mention the participant are kept as they are.
    pub fn remove(&self, name: &str) -> SplitResult<Participant> {
        let name = name.trim();

        if !self.storage.participants.contains(name)? {
            return Err(SplitError::participant_not_found(name));
        }

        let balance = BalanceService::new(self.storage).balance_of(name)?;
        if self.removal_policy == RemovalPolicy::RequireSettled && !balance.is_zero() {
            return Err(SplitError::ParticipantHasBalance {
                name: name.to_string(),
                balance,
            });
        }

        let (index, participant) = self
            .storage
            .participants
            .remove(name)?
            .ok_or_else(|| SplitError::participant_not_found(name))?;

        if let Err(err) = self.storage.participants.save() {
            self.storage.participants.restore_at(index, participant)?;
            return Err(err);
        }

        if let Err(err) = self
            .storage
            .record_audit(&AuditEntry::participant_removed(&participant, balance))
        {
            tracing::warn!(error = %err, "failed to write audit entry");
        }

        tracing::info!(participant = %participant.name, "participant removed");
        Ok(participant)
    }

    /// All active participants in insertion order
    pub fn list(&self) -> SplitResult<Vec<Participant>> {
        self.storage.participants.get_all()
    }

    /// Look up an active participant by name
    pub fn find(&self, name: &str) -> SplitResult<Option<Participant>> {
        self.storage.participants.get(name.trim())
    }

    pub fn count(&self) -> SplitResult<usize> {
        self.storage.participants.count()
    }
}
