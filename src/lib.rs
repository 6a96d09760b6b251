//! # Rollcall - Employee Directory and Attendance Tracking
//!
//! An interactive command-line tool for keeping an organization's
//! employee register and recording daily check-in/check-out attendance.
//!
//! ## Features
//!
//! - **Employee Directory**: Identity assignment and reporting-hierarchy validation
//! - **Attendance Ledger**: One check-in/check-out record per employee per day
//! - **Working Hours**: Elapsed time derived at check-out
//! - **Daily Reports**: Attendance tables sorted by first name
//! - **Data Export**: CSV and JSON report files
//!
//! Directory and ledger state is held in memory for the lifetime of the
//! interactive session; nothing is persisted between runs. Both
//! components are single-threaded and synchronous. Embedders that share
//! them across threads must serialize mutation externally; one exclusive
//! lock per component is sufficient.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
