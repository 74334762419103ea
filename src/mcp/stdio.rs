//! Newline-delimited JSON-RPC over stdin/stdout.
//!
//! Every request runs in its own task; responses are written in completion
//! order, one JSON document per line.

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::service::McpService;

/// Serves the process's stdin/stdout until stdin is closed.
pub async fn serve_stdio(service: McpService) -> std::io::Result<()> {
    info!("MCP server listening on stdio");
    serve_lines(service, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Serves JSON-RPC lines from `reader`, writing responses to `writer`.
///
/// Returns after the reader hits EOF and every in-flight request has answered.
pub async fn serve_lines<R, W>(service: McpService, mut reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<OutboundResponse>();

    let read_loop = async move {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }

            let line = buf.trim_ascii();
            if line.is_empty() {
                continue;
            }

            // Bad UTF-8 and bad JSON both surface here as a parse error.
            let request: RpcRequest = match serde_json::from_slice(line) {
                Ok(request) => request,
                Err(err) => {
                    warn!("Rejected malformed MCP message: {}", err);
                    let _ = tx.send(OutboundResponse::parse_error(err.to_string()));
                    continue;
                }
            };

            debug!("Received MCP request: {}", request.method);
            let service = service.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = service.handle_request(request).await {
                    let _ = tx.send(response);
                }
            });
        }
        info!("stdin closed, draining in-flight requests");
        Ok::<(), std::io::Error>(())
    };

    let write_loop = async {
        while let Some(response) = rx.recv().await {
            let mut line = serde_json::to_vec(&response)?;
            line.push(b'\n');
            writer.write_all(&line).await?;
            writer.flush().await?;
        }
        Ok::<(), std::io::Error>(())
    };

    let (read_result, write_result) = tokio::join!(read_loop, write_loop);
    read_result?;
    write_result
}
