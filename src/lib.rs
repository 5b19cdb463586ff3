use std::sync::Arc;

use serde_json::Value;

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod mcp;
pub mod transport;
pub mod uuid_source;

use uuid_source::{RandomUuidSource, UuidSource};

#[derive(Clone)]
pub struct AppState {
    pub tools: Arc<[Value]>,
    pub uuid_source: Arc<dyn UuidSource>,
}

impl AppState {
    pub fn new(uuid_source: Arc<dyn UuidSource>) -> Self {
        Self {
            tools: Arc::from(domain::tools::build_tools_list()),
            uuid_source,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(RandomUuidSource::new()))
    }
}
