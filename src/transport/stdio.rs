//! Newline-delimited JSON-RPC over a reader/writer pair
//!
//! One message per line in, one response per line out. Requests are handled to
//! completion before the next line is read.

use std::future::Future;
use std::io;

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, warn};

use crate::mcp::rpc::{json_rpc_error, INVALID_REQUEST, PARSE_ERROR};
use crate::mcp::server::handle_json_rpc_value;
use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    InputClosed,
    Interrupted,
}

/// Serves requests from `reader` until it reaches EOF or `shutdown` resolves.
pub async fn serve<R, W, S>(
    state: &AppState,
    mut reader: R,
    mut writer: W,
    shutdown: S,
) -> io::Result<StopReason>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Future<Output = ()>,
{
    let mut buffer = Vec::new();
    tokio::pin!(shutdown);

    loop {
        buffer.clear();
        let read = tokio::select! {
            _ = &mut shutdown => {
                writer.flush().await?;
                return Ok(StopReason::Interrupted);
            }
            read = reader.read_until(b'\n', &mut buffer) => read?,
        };

        if read == 0 {
            writer.flush().await?;
            return Ok(StopReason::InputClosed);
        }

        // Invalid UTF-8 is replaced, so such a line is answered with a parse error.
        let line = String::from_utf8_lossy(&buffer);
        if let Some(response) = handle_line(state, &line) {
            let mut frame = serde_json::to_vec(&response)?;
            frame.push(b'\n');
            writer.write_all(&frame).await?;
            writer.flush().await?;
        }
    }
}

/// Shutdown hook for `serve`: resolves once `signal` fires. If the signal
/// cannot be registered the hook never resolves and serving ends with stdin.
pub async fn interrupt_on<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(err) = signal.await {
        error!(error = %err, "failed to listen for interrupt signal, serving until stdin closes");
        std::future::pending::<()>().await;
    }
}

/// Returns the frame to write back, if any. Blank lines and notifications
/// produce nothing.
pub fn handle_line(state: &AppState, line: &str) -> Option<Value> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let payload: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "discarding unparseable message");
            return Some(json_rpc_error(None, PARSE_ERROR, "Parse error"));
        }
    };

    if let Some(batch) = payload.as_array() {
        if batch.is_empty() {
            return Some(json_rpc_error(None, INVALID_REQUEST, "Invalid Request"));
        }

        debug!(size = batch.len(), "handling batch");
        let responses = batch
            .iter()
            .filter_map(|item| handle_json_rpc_value(state, item.clone()))
            .collect::<Vec<_>>();

        if responses.is_empty() {
            return None;
        }

        return Some(Value::Array(responses));
    }

    handle_json_rpc_value(state, payload)
}
