//! Per-day attendance records, indexed by the calendar date of check-in.
//!
//! The ledger enforces the one-record-per-employee-per-day rule and the
//! check-in to check-out transition, and derives working hours when a
//! record closes. It performs no calendar sanity checking beyond the
//! ordering between the two timestamps: employee existence and the
//! "not in the future" rule are enforced before a timestamp reaches it.

use super::directory::{Employee, EmployeeDirectory, EmployeeId};
use super::formatter::format_duration;
use crate::msg_debug;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use thiserror::Error;

/// Check-in/check-out lifecycle for one employee on one calendar date.
///
/// The variants make the state machine explicit: a record is created
/// `Open` and transitions to `Closed` at most once. `Closed` is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Open {
        check_in: NaiveDateTime,
    },
    Closed {
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
        /// Elapsed time between check-in and check-out, `HH:MM`.
        working_hours: String,
    },
}

/// A single day's attendance event for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub employee_id: EmployeeId,
    pub session: Session,
}

impl AttendanceRecord {
    pub fn check_in(&self) -> NaiveDateTime {
        match &self.session {
            Session::Open { check_in } | Session::Closed { check_in, .. } => *check_in,
        }
    }

    pub fn check_out(&self) -> Option<NaiveDateTime> {
        match &self.session {
            Session::Open { .. } => None,
            Session::Closed { check_out, .. } => Some(*check_out),
        }
    }

    pub fn working_hours(&self) -> Option<&str> {
        match &self.session {
            Session::Open { .. } => None,
            Session::Closed { working_hours, .. } => Some(working_hours),
        }
    }
}

/// Failures surfaced by ledger state transitions. All are recoverable
/// and none leaves partial state behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("already checked in for {0}")]
    DuplicateCheckIn(NaiveDate),
    #[error("no check-in found for {0}")]
    NoOpenCheckIn(NaiveDate),
    #[error("already checked out for {0}")]
    AlreadyCheckedOut(NaiveDate),
    #[error("check-out must be after the check-in at {0}")]
    CheckOutBeforeCheckIn(NaiveDateTime),
}

#[derive(Debug, Default)]
pub struct AttendanceLedger {
    records: HashMap<NaiveDate, Vec<AttendanceRecord>>,
}

impl AttendanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a record exists for the pair, open or closed.
    pub fn has_record(&self, employee_id: EmployeeId, date: NaiveDate) -> bool {
        self.records
            .get(&date)
            .is_some_and(|day| day.iter().any(|r| r.employee_id == employee_id))
    }

    /// Records a check-in. A second check-in for the same employee and
    /// date is rejected even after a completed check-out: one attendance
    /// event per day.
    pub fn check_in(&mut self, employee_id: EmployeeId, timestamp: NaiveDateTime) -> Result<(), LedgerError> {
        let date = timestamp.date();
        if self.has_record(employee_id, date) {
            return Err(LedgerError::DuplicateCheckIn(date));
        }
        self.records.entry(date).or_default().push(AttendanceRecord {
            employee_id,
            session: Session::Open { check_in: timestamp },
        });
        Ok(())
    }

    /// Closes the day's open record and derives its working hours. The
    /// check-out must be strictly after the check-in; a rejected
    /// timestamp leaves the record open and unchanged.
    pub fn check_out(&mut self, employee_id: EmployeeId, timestamp: NaiveDateTime) -> Result<&AttendanceRecord, LedgerError> {
        let date = timestamp.date();
        let record = self
            .records
            .get_mut(&date)
            .and_then(|day| day.iter_mut().find(|r| r.employee_id == employee_id))
            .ok_or(LedgerError::NoOpenCheckIn(date))?;

        let check_in = match record.session {
            Session::Closed { .. } => return Err(LedgerError::AlreadyCheckedOut(date)),
            Session::Open { check_in } => check_in,
        };
        if timestamp <= check_in {
            return Err(LedgerError::CheckOutBeforeCheckIn(check_in));
        }

        record.session = Session::Closed {
            check_in,
            check_out: timestamp,
            working_hours: format_duration(&(timestamp - check_in)),
        };
        Ok(&*record)
    }

    /// Every record for `date` paired with its employee, sorted by first
    /// name ascending; ties keep insertion order. A record whose employee
    /// cannot be resolved is skipped rather than failing the report.
    pub fn daily_report(&self, date: NaiveDate, directory: &EmployeeDirectory) -> Vec<(Employee, AttendanceRecord)> {
        let mut pairs: Vec<(Employee, AttendanceRecord)> = self
            .records
            .get(&date)
            .map(|day| {
                day.iter()
                    .filter_map(|record| match directory.get(record.employee_id) {
                        Some(employee) => Some((employee.clone(), record.clone())),
                        None => {
                            msg_debug!(format!("skipping record for unknown employee {}", record.employee_id));
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();
        pairs.sort_by(|a, b| a.0.first_name.cmp(&b.0.first_name));
        pairs
    }
}
