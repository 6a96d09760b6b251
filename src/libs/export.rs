//! Daily report export.
//!
//! Writes the formatted report rows to CSV or JSON. Rows arrive
//! pre-formatted from the report view, so both writers emit exactly what
//! the terminal table shows.

use super::formatter::FormattedAttendance;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter for `date`. The file lands in `output_dir`
    /// (current directory when `None`) as `rollcall_report_<date>.<ext>`.
    pub fn new(format: ExportFormat, output_dir: Option<PathBuf>, date: NaiveDate) -> Self {
        let file_name = format!("rollcall_report_{}.{}", date.format("%Y-%m-%d"), format.extension());
        let output_path = output_dir.unwrap_or_default().join(file_name);

        Self { format, output_path }
    }

    /// Writes `rows` and returns the path of the created file.
    pub fn export(&self, rows: &[FormattedAttendance]) -> Result<PathBuf> {
        if rows.is_empty() {
            msg_bail_anyhow!(Message::NothingToExport);
        }
        match self.format {
            ExportFormat::Csv => self.write_csv(rows)?,
            ExportFormat::Json => self.write_json(rows)?,
        }
        Ok(self.output_path.clone())
    }

    fn write_csv(&self, rows: &[FormattedAttendance]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["#", "ID", "Employee", "Check in", "Check out", "Working hours"])?;
        for row in rows {
            wtr.write_record([
                row.row.to_string(),
                row.employee_id.clone(),
                row.employee.clone(),
                row.check_in.clone(),
                row.check_out.clone(),
                row.working_hours.clone(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_json(&self, rows: &[FormattedAttendance]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
