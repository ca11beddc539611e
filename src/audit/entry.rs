//! Audit log entries
//!
//! The ledger never edits records, so there are only three things worth
//! recording: a participant joining, a participant leaving, and an expense
//! being recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRecord, Money, Participant};

/// A ledger change, stored with an `event` tag in each log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    ParticipantAdded {
        name: String,
    },
    /// `balance` is what the participant was owed (or owed) when they left
    ParticipantRemoved {
        name: String,
        balance: Money,
    },
    ExpenseRecorded {
        expense: ExpenseRecord,
    },
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: AuditEvent,
}

impl AuditEntry {
    fn now(event: AuditEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }

    pub fn participant_added(participant: &Participant) -> Self {
        Self::now(AuditEvent::ParticipantAdded {
            name: participant.name.clone(),
        })
    }

    pub fn participant_removed(participant: &Participant, balance: Money) -> Self {
        Self::now(AuditEvent::ParticipantRemoved {
            name: participant.name.clone(),
            balance,
        })
    }

    pub fn expense_recorded(expense: &ExpenseRecord) -> Self {
        Self::now(AuditEvent::ExpenseRecorded {
            expense: expense.clone(),
        })
    }

    /// Participant name, or the short expense ID
    pub fn subject(&self) -> String {
        match &self.event {
            AuditEvent::ParticipantAdded { name } | AuditEvent::ParticipantRemoved { name, .. } => {
                name.clone()
            }
            AuditEvent::ExpenseRecorded { expense } => expense.id.to_string(),
        }
    }

    /// One-line description for `roomsplit audit`
    pub fn format_human_readable(&self) -> String {
        let when = self.timestamp.format("%Y-%m-%d %H:%M:%S UTC");

        match &self.event {
            AuditEvent::ParticipantAdded { name } => {
                format!("[{}] added participant {}", when, name)
            }
            AuditEvent::ParticipantRemoved { name, balance } if balance.is_zero() => {
                format!("[{}] removed participant {} (settled)", when, name)
            }
            AuditEvent::ParticipantRemoved { name, balance } => {
                format!(
                    "[{}] removed participant {} (balance {})",
                    when, name, balance
                )
            }
            AuditEvent::ExpenseRecorded { expense } => {
                let label = if expense.name.is_empty() {
                    "(unnamed)"
                } else {
                    expense.name.as_str()
                };
                format!(
                    "[{}] recorded {}: {}, {} paid by {}, split {} ways",
                    when,
                    expense.id,
                    label,
                    expense.amount,
                    expense.payer,
                    expense.participant_count()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Split;

    fn groceries() -> ExpenseRecord {
        let mut split = Split::new();
        split.insert("A".into(), Money::zero());
        split.insert("B".into(), Money::from_cents(1000));
        split.insert("C".into(), Money::from_cents(1000));
        ExpenseRecord::new("Groceries", Money::from_cents(3000), "A", split, None)
    }

    #[test]
    fn test_event_tag_in_json() {
        let entry = AuditEntry::participant_added(&Participant::new("Bob"));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["event"], "participant_added");
        assert_eq!(json["name"], "Bob");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_expense_entry_keeps_record() {
        let expense = groceries();
        let entry = AuditEntry::expense_recorded(&expense);

        let line = serde_json::to_string(&entry).unwrap();
        let parsed: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, entry);
        assert_eq!(parsed.subject(), expense.id.to_string());
    }

    #[test]
    fn test_participant_lines() {
        let bob = Participant::new("Bob");

        let added = AuditEntry::participant_added(&bob).format_human_readable();
        assert!(added.ends_with("] added participant Bob"));

        let settled = AuditEntry::participant_removed(&bob, Money::zero());
        assert!(settled
            .format_human_readable()
            .ends_with("removed participant Bob (settled)"));

        let owing = AuditEntry::participant_removed(&bob, Money::from_cents(-1250));
        assert!(owing
            .format_human_readable()
            .ends_with("removed participant Bob (balance -$12.50)"));
    }

    #[test]
    fn test_expense_line() {
        let expense = groceries();
        let line = AuditEntry::expense_recorded(&expense).format_human_readable();

        assert!(line.contains(&format!(
            "recorded {}: Groceries, $30.00 paid by A, split 3 ways",
            expense.id
        )));
    }
}
