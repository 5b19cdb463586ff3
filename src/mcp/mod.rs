//! Model Context Protocol (MCP) message handling
//!
//! JSON-RPC decoding, initialize negotiation, method routing and response shaping.

pub mod rpc;
pub mod server;
