//! Daily attendance report command.

use crate::commands::AppContext;
use crate::libs::formatter::format_report;
use crate::libs::messages::Message;
use crate::libs::timestamp;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input};

pub fn cmd(ctx: &AppContext) -> Result<()> {
    let date = prompt_report_date()?;
    let pairs = ctx.ledger.daily_report(date, &ctx.directory);
    if pairs.is_empty() {
        msg_info!(Message::NoAttendanceForDate(date.to_string()));
        return Ok(());
    }

    let date_text = date.format("%B %-d, %Y").to_string();
    let header = match &ctx.config.organization {
        Some(organization) => Message::ReportHeaderFor(organization.clone(), date_text),
        None => Message::ReportHeader(date_text),
    };
    msg_print!(header, true);
    View::report(&format_report(&pairs))?;
    Ok(())
}

/// Re-prompts until the answer parses as a report date. Defaults to
/// today.
pub(crate) fn prompt_report_date() -> Result<NaiveDate> {
    loop {
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptReportDate.to_string())
            .default("today".to_string())
            .interact_text()?;
        match timestamp::parse_date(&raw, Local::now().date_naive()) {
            Ok(date) => return Ok(date),
            Err(err) => msg_error!(err),
        }
    }
}
