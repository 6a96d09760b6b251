//! Check-in command.
//!
//! The employee id and timestamp are validated here, before they reach
//! the ledger; the ledger itself only enforces the one-record-per-day
//! rule.

use crate::commands::{prompt_employee_id, prompt_timestamp, AppContext};
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;

pub fn cmd(ctx: &mut AppContext) -> Result<()> {
    if ctx.directory.is_empty() {
        msg_info!(Message::NoEmployeesFound);
        return Ok(());
    }

    let employee_id = prompt_employee_id(&ctx.directory)?;
    let timestamp = prompt_timestamp(Message::PromptCheckInTime)?;

    match ctx.ledger.check_in(employee_id, timestamp) {
        Ok(()) => msg_success!(Message::CheckInRecorded(
            timestamp.format("%H:%M").to_string(),
            timestamp.date().to_string(),
        )),
        Err(err) => msg_error!(err),
    }
    Ok(())
}
