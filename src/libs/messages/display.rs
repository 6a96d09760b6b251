//! Display implementation for application messages.
//!
//! All user-facing text is defined here, in one place, so wording stays
//! consistent across prompts, tables, and notifications. Domain errors
//! carry their own `Display` implementations and are rendered directly
//! by the message macros.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === EMPLOYEE MESSAGES ===
            Message::EmployeeAdded(id) => format!("Employee added successfully with ID: {}", id),
            Message::EmployeeListHeader => "Employee list:".to_string(),
            Message::NoEmployeesFound => "No employees in the list.".to_string(),
            Message::InvalidContactNumber => "Invalid contact number.".to_string(),

            // === ATTENDANCE MESSAGES ===
            Message::CheckInRecorded(time, date) => format!("Check-in successful at {} on {}", time, date),
            Message::CheckOutRecorded(time, hours) => {
                format!("Check-out successful at {}. Working hours: {}", time, hours)
            }

            // === REPORT MESSAGES ===
            Message::ReportHeader(date) => format!("Attendance report for {}", date),
            Message::ReportHeaderFor(organization, date) => {
                format!("{}: attendance report for {}", organization, date)
            }
            Message::NoAttendanceForDate(date) => format!("No attendance records for {}", date),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::NothingToExport => "Nothing to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),

            // === PROMPTS ===
            Message::PromptFirstName => "Enter first name".to_string(),
            Message::PromptLastName => "Enter last name".to_string(),
            Message::PromptRole => "Enter role".to_string(),
            Message::PromptContactNumber => "Enter contact number".to_string(),
            Message::PromptReportingTo => "Reporting manager ID (blank or 0 if none)".to_string(),
            Message::PromptEmployeeId => "Enter your employee ID".to_string(),
            Message::PromptCheckInTime => "Check-in date and time (YYYY-MM-DD HH:MM, blank for now)".to_string(),
            Message::PromptCheckOutTime => "Check-out date and time (YYYY-MM-DD HH:MM, blank for now)".to_string(),
            Message::PromptReportDate => "Report date (YYYY-MM-DD or 'today')".to_string(),
            Message::PromptExportFormat => "Export format".to_string(),
            Message::PromptOrganizationName => "Organization name (optional)".to_string(),
            Message::PromptExportDir => "Export directory (optional)".to_string(),
            Message::PromptMenuAction => "What would you like to do?".to_string(),

            // === GENERAL MESSAGES ===
            Message::Goodbye => "Exiting, thank you!".to_string(),
        };

        write!(f, "{}", text)
    }
}
