//! CLI command implementations.
//!
//! - **parse**: Parse an STTM difference report and print a summary
//! - **init**: Write the default configuration file

pub mod init;
pub mod parse;

pub use init::init_config;
pub use parse::{handle_parse, ParseConfig};
