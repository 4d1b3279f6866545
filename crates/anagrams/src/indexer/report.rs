//! Bulk save report
//!
//! Counts what happened to each record of a bulk save.

use serde::Serialize;

/// Result counters of a bulk save
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveReport {
  /// Records in the input batch
  pub total: usize,
  /// Records written to the index
  pub saved: usize,
  /// Records the index rejected
  pub rejected: usize,
}

impl SaveReport {
  /// Whether every record was saved (rejected == 0)
  pub fn is_all_saved(&self) -> bool {
    self.rejected == 0
  }

  /// Record a saved record
  pub fn record_saved(&mut self) {
    self.total += 1;
    self.saved += 1;
  }

  /// Record a rejected record
  pub fn record_rejected(&mut self) {
    self.total += 1;
    self.rejected += 1;
  }
}
