use futures::channel::mpsc;
use futures::stream::{self, Stream, StreamExt};
use futures::SinkExt;
use tracing::trace;

use crate::error::Result;
use crate::ser::serialize;
use crate::sink::ChannelSink;
use crate::value::Value;

/// Chunks buffered between the serializer and a slow consumer.
const CHANNEL_CAPACITY: usize = 16;

/// Expose the serialization of `value` as a readable stream of JSON chunks.
///
/// The concatenation of the `Ok` chunks is one well-formed document. The
/// driving future is fused into the returned stream, so polling the stream is
/// what advances serialization: a consumer that stops polling suspends the
/// writer at its next push, and dropping the stream cancels everything. A
/// failure is delivered as the final `Err` item; the chunks before it are a
/// valid prefix and nothing more.
pub fn to_stream(value: Value) -> impl Stream<Item = Result<String>> + Send {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let mut error_tx = tx.clone();
    let driver = async move {
        let mut sink = ChannelSink::new(tx);
        if let Err(err) = serialize(value, &mut sink).await {
            trace!(%err, "serialization failed mid-stream");
            let _ = error_tx.send(Err(err)).await;
        }
    };
    stream::select(
        rx,
        stream::once(driver).filter_map(|()| async { None::<Result<String>> }),
    )
}
