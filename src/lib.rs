//! Form intake service: validates contact and audit-request submissions and
//! appends each one as a row to a Google Sheets spreadsheet.

pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod responses;
pub mod sheets;
pub mod site;
