//! Clocks and human-readable reference generation

use crate::core::traits::Clock;
use chrono::{DateTime, NaiveDate, Utc};

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, for deterministic runs and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Generates `TXN-YYYYMMDD-NNN` references
///
/// The sequence restarts every UTC day and always continues after the highest
/// sequence already recorded in the ledger for that day, so generated
/// references never collide with seeded or caller-supplied ones.
#[derive(Debug, Clone, Default)]
pub struct ReferenceGenerator {
    day: Option<NaiveDate>,
    sequence: u32,
}

impl ReferenceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next reference for `now`
    ///
    /// # Arguments
    ///
    /// * `now` - Instant whose UTC day prefixes the reference
    /// * `highest_used` - Highest sequence the ledger holds for that day
    pub fn next(&mut self, now: DateTime<Utc>, highest_used: u32) -> String {
        let today = now.date_naive();
        if self.day != Some(today) {
            self.day = Some(today);
            self.sequence = 0;
        }

        self.sequence = self.sequence.max(highest_used).saturating_add(1);
        format!("TXN-{}-{:03}", today.format("%Y%m%d"), self.sequence)
    }
}

/// Day and sequence of a `TXN-YYYYMMDD-NNN` reference
///
/// Returns `None` for references in any other format.
pub fn parse_reference(reference: &str) -> Option<(NaiveDate, u32)> {
    let rest = reference.strip_prefix("TXN-")?;
    let (day, sequence) = rest.split_once('-')?;
    if day.len() != 8 {
        return None;
    }
    let day = NaiveDate::parse_from_str(day, "%Y%m%d").ok()?;
    let sequence = sequence.parse::<u32>().ok()?;
    Some((day, sequence))
}
