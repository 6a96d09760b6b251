pub mod checkin;
pub mod checkout;
pub mod employee;
pub mod export;
pub mod init;
pub mod report;

use crate::libs::config::Config;
use crate::libs::directory::{EmployeeDirectory, EmployeeId};
use crate::libs::ledger::AttendanceLedger;
use crate::libs::messages::Message;
use crate::libs::timestamp;
use crate::{msg_debug, msg_error, msg_print};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Shared state for one interactive session.
///
/// The directory and the ledger are owned here and handed to command
/// handlers explicitly; nothing is global. Domain state lives exactly as
/// long as the session and is discarded on exit.
pub struct AppContext {
    pub directory: EmployeeDirectory,
    pub ledger: AttendanceLedger,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            directory: EmployeeDirectory::new(),
            ledger: AttendanceLedger::new(),
            config,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the interactive attendance session")]
    Menu,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

const MENU_ITEMS: &[&str] = &[
    "Add employee",
    "List employees",
    "Check in",
    "Check out",
    "Daily report",
    "Export daily report",
    "Exit",
];

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Menu) | None => run_session(),
        }
    }
}

/// Menu loop for a single in-memory session.
fn run_session() -> Result<()> {
    let config = Config::read().unwrap_or_default();
    let mut ctx = AppContext::new(config);

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuAction.to_string())
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        msg_debug!(format!("menu selection: {}", MENU_ITEMS[selection]));
        match selection {
            0 => employee::add(&mut ctx)?,
            1 => employee::list(&ctx)?,
            2 => checkin::cmd(&mut ctx)?,
            3 => checkout::cmd(&mut ctx)?,
            4 => report::cmd(&ctx)?,
            5 => export::cmd(&ctx)?,
            _ => {
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        }
    }
}

/// Re-prompts until the answer resolves to a stored employee.
pub(crate) fn prompt_employee_id(directory: &EmployeeDirectory) -> Result<EmployeeId> {
    loop {
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmployeeId.to_string())
            .interact_text()?;
        let id = match raw.parse::<EmployeeId>() {
            Ok(id) => id,
            Err(err) => {
                msg_error!(err);
                continue;
            }
        };
        match directory.resolve(id) {
            Ok(_) => return Ok(id),
            Err(err) => msg_error!(err),
        }
    }
}

/// Re-prompts until the answer passes timestamp validation. A blank
/// answer means the current time.
pub(crate) fn prompt_timestamp(prompt: Message) -> Result<NaiveDateTime> {
    loop {
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .allow_empty(true)
            .interact_text()?;
        match timestamp::parse_timestamp(&raw, Local::now().naive_local()) {
            Ok(ts) => return Ok(ts),
            Err(err) => msg_error!(err),
        }
    }
}
