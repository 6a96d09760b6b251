//! Export the daily report to a file.

use crate::commands::{report, AppContext};
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::formatter::format_report;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

pub fn cmd(ctx: &AppContext) -> Result<()> {
    let date = report::prompt_report_date()?;
    let pairs = ctx.ledger.daily_report(date, &ctx.directory);
    if pairs.is_empty() {
        msg_warning!(Message::NoAttendanceForDate(date.to_string()));
        return Ok(());
    }

    let formats = ["CSV", "JSON"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptExportFormat.to_string())
        .items(&formats)
        .default(0)
        .interact()?;
    let format = if selection == 1 { ExportFormat::Json } else { ExportFormat::Csv };

    let exporter = Exporter::new(format, ctx.config.export_dir.clone(), date);
    let path = exporter.export(&format_report(&pairs))?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
