//! Duration and report-row formatting for display and export.
//!
//! All elapsed times render as "HH:MM": hours are unbounded and
//! zero-padded to at least two digits, minutes are the remainder mod 60.
//! Report rows are pre-formatted strings so that the terminal table and
//! the export writers emit exactly the same values.

use super::directory::Employee;
use super::ledger::AttendanceRecord;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A daily-report row with every value pre-formatted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedAttendance {
    /// 1-based row number after sorting.
    pub row: usize,
    pub employee_id: String,
    pub employee: String,
    /// Check-in time, "HH:MM".
    pub check_in: String,
    /// Check-out time, or "-" while the session is still open.
    pub check_out: String,
    /// Elapsed working hours, or "--:--" while the session is still open.
    pub working_hours: String,
}

/// Flattens report pairs into display rows, keeping their order.
pub fn format_report(pairs: &[(Employee, AttendanceRecord)]) -> Vec<FormattedAttendance> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, (employee, record))| FormattedAttendance {
            row: i + 1,
            employee_id: employee.id.to_string(),
            employee: format!("{} {}", employee.first_name, employee.last_name),
            check_in: record.check_in().format("%H:%M").to_string(),
            check_out: record
                .check_out()
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            working_hours: record.working_hours().unwrap_or("--:--").to_string(),
        })
        .collect()
}

/// Formats a duration as "HH:MM".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    // Negative elapsed time cannot come out of the ledger; clamp anyway.
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}
