use async_trait::async_trait;
use futures::channel::mpsc;
use futures::SinkExt;

use crate::error::{Error, Result};

/// Push-based output channel with backpressure.
///
/// `push` resolving is the readiness signal: a call that stays pending is the
/// sink applying backpressure, and the writer suspends on it. `Err` means the
/// downstream consumer is gone; the serialization aborts and is not retried.
#[async_trait]
pub trait ChunkSink: Send {
    async fn push(&mut self, chunk: String) -> Result<()>;
}

/// Sink accumulating everything in memory. Never applies backpressure.
#[derive(Debug, Default)]
pub struct StringSink {
    out: String,
}

impl StringSink {
    pub fn new() -> Self {
        StringSink { out: String::new() }
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

#[async_trait]
impl ChunkSink for StringSink {
    async fn push(&mut self, chunk: String) -> Result<()> {
        self.out.push_str(&chunk);
        Ok(())
    }
}

/// Sink over a bounded channel. The channel capacity is the backpressure
/// window: once it fills, `push` stays pending until the consumer drains.
pub struct ChannelSink {
    tx: mpsc::Sender<Result<String>>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<Result<String>>) -> Self {
        ChannelSink { tx }
    }
}

#[async_trait]
impl ChunkSink for ChannelSink {
    async fn push(&mut self, chunk: String) -> Result<()> {
        self.tx.send(Ok(chunk)).await.map_err(|_| Error::SinkClosed)
    }
}
