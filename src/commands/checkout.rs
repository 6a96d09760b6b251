//! Check-out command.
//!
//! Closing a day's record derives its working hours; the success
//! message echoes them back.

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
    let timestamp = prompt_timestamp(Message::PromptCheckOutTime)?;

    match ctx.ledger.check_out(employee_id, timestamp) {
        Ok(record) => {
            let hours = record.working_hours().unwrap_or("--:--").to_string();
            msg_success!(Message::CheckOutRecorded(timestamp.format("%H:%M").to_string(), hours));
        }
        Err(err) => msg_error!(err),
    }
    Ok(())
}
