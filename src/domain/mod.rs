//! UUID generation exposed over the MCP protocol

pub mod tools;
pub mod utils;
