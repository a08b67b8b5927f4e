//! Native-messaging frames: a `u32` byte length in the platform's native byte
//! order, followed by that many bytes of UTF-8 JSON.

use anyhow::{anyhow, Result};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{trace, warn};

/// Largest frame accepted in either direction (1 MiB).
///
/// Browsers refuse host replies above this size, and a settings or clip
/// message never comes close to it inbound.
pub const MAX_HOST_FRAME_BYTES: usize = 1024 * 1024;

const LEN_PREFIX_BYTES: usize = 4;

/// Write one frame and flush it.
pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    if payload.len() > MAX_HOST_FRAME_BYTES {
        return Err(anyhow!(
            "reply exceeds max: {} > {}",
            payload.len(),
            MAX_HOST_FRAME_BYTES
        ));
    }
    let len = payload.len() as u32;

    trace!(len, "writing host frame");
    writer.write_all(&len.to_ne_bytes()).await?;
    writer.write_all(payload).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one frame, enforcing [`MAX_HOST_FRAME_BYTES`].
///
/// Returns `Ok(None)` when the browser closes the pipe before a new length
/// prefix. EOF anywhere inside a frame is an error.
pub async fn read_frame<R>(reader: &mut R) -> Result<Option<Vec<u8>>>
where
    R: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; LEN_PREFIX_BYTES];

    let n = reader.read(&mut len_buf).await?;
    if n == 0 {
        return Ok(None);
    }
    if n < LEN_PREFIX_BYTES {
        if let Err(e) = reader.read_exact(&mut len_buf[n..]).await {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                warn!(read = n, "pipe closed inside a length prefix");
            }
            return Err(e.into());
        }
    }

    let len = u32::from_ne_bytes(len_buf) as usize;
    if len > MAX_HOST_FRAME_BYTES {
        return Err(anyhow!("frame exceeds max: {} > {}", len, MAX_HOST_FRAME_BYTES));
    }

    let mut buf = vec![0u8; len];
    trace!(len, "reading host frame");
    if let Err(e) = reader.read_exact(&mut buf).await {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            warn!(expected = len, "pipe closed inside a frame");
        }
        return Err(e.into());
    }
    Ok(Some(buf))
}
