//! Audit logging system for roomsplit
//!
//! Records participant additions and removals and every recorded expense in
//! an append-only, line-delimited JSON log (`audit.log`).
//!
//! - `AuditEntry`: a timestamped `AuditEvent` (participant added or removed,
//!   expense recorded). Expense events carry the full record.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, AuditEvent};
pub use logger::AuditLogger;
