pub mod check;
mod command_result;
pub mod export;
pub mod helper;
pub mod init;
pub mod status;

pub use command_result::{
    CommandResult, CommandSummary, ExportSummary, InitSummary, StatusSummary,
};
