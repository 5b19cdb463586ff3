//! Transport layer for the Model Context Protocol
//!
//! Moves JSON-RPC frames between the process's standard streams and the MCP engine.

pub mod stdio;
