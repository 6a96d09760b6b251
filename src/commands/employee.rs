//! Employee directory commands: add and list.

use crate::commands::AppContext;
use crate::libs::directory::{Employee, EmployeeId};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

/// Prompts for a new employee and stores it.
///
/// An id is only issued once every field, including the reporting
/// manager, has passed validation; a rejected manager reference leaves
/// the directory untouched.
pub fn add(ctx: &mut AppContext) -> Result<()> {
    let first_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptFirstName.to_string())
        .interact_text()?;
    let last_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptLastName.to_string())
        .interact_text()?;
    let role: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptRole.to_string())
        .interact_text()?;

    let contact_number = loop {
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptContactNumber.to_string())
            .interact_text()?;
        match raw.trim().parse::<u64>() {
            Ok(number) => break number,
            Err(_) => msg_error!(Message::InvalidContactNumber),
        }
    };

    let reporting_to = loop {
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptReportingTo.to_string())
            .allow_empty(true)
            .interact_text()?;
        let raw = raw.trim();
        if raw.is_empty() || raw == "0" {
            break None;
        }
        let id = match raw.parse::<EmployeeId>() {
            Ok(id) => id,
            Err(err) => {
                msg_error!(err);
                continue;
            }
        };
        match ctx.directory.check_manager(Some(id)) {
            Ok(()) => break Some(id),
            Err(err) => msg_error!(err),
        }
    };

    let id = ctx.directory.next_id();
    ctx.directory.add(Employee {
        id,
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        role: role.trim().to_string(),
        contact_number,
        reporting_to,
    });

    msg_success!(Message::EmployeeAdded(id.to_string()));
    Ok(())
}

pub fn list(ctx: &AppContext) -> Result<()> {
    let employees = ctx.directory.list();
    if employees.is_empty() {
        msg_info!(Message::NoEmployeesFound);
        return Ok(());
    }

    msg_print!(Message::EmployeeListHeader, true);
    View::employees(&employees)?;
    Ok(())
}
