use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, trace};

use crate::encode;
use crate::error::Result;
use crate::iter::{ContainerKind, Event, Slot, Traversal};
use crate::sink::{ChunkSink, StringSink};
use crate::source::{EmissionSource, ItemSource, TextSource};
use crate::value::Value;

/// Serialize `value` as JSON into `sink`.
///
/// This is the emission coroutine: one logical task whose await points are
/// exactly the three suspension conditions: sink backpressure (`push`),
/// an unresolved deferred, and an undrained source. Between awaits the
/// traversal and token emission are synchronous. On error the output already
/// pushed stays as a valid document prefix; nothing is rolled back.
pub async fn serialize<S>(value: Value, sink: &mut S) -> Result<()>
where
    S: ChunkSink + ?Sized,
{
    debug!("serialization started");
    drive(value, sink).await?;
    debug!("serialization finished");
    Ok(())
}

/// Serialize to a single in-memory string.
///
/// Reference (non-streaming) output: for any value this produces the same
/// bytes as draining [`crate::to_stream`].
pub async fn to_string(value: Value) -> Result<String> {
    let mut sink = StringSink::new();
    serialize(value, &mut sink).await?;
    Ok(sink.into_string())
}

// Boxed so item-source elements can recurse into the same sink.
fn drive<'a, S>(value: Value, sink: &'a mut S) -> BoxFuture<'a, Result<()>>
where
    S: ChunkSink + ?Sized,
{
    async move {
        let mut traversal = Traversal::new(value);
        while let Some(event) = traversal.next_event() {
            match event {
                Event::Open { kind, slot } => {
                    emit_slot(slot, sink).await?;
                    let token = match kind {
                        ContainerKind::Object => "{",
                        ContainerKind::Array => "[",
                    };
                    sink.push(token.to_owned()).await?;
                }
                Event::Close { kind } => {
                    let token = match kind {
                        ContainerKind::Object => "}",
                        ContainerKind::Array => "]",
                    };
                    sink.push(token.to_owned()).await?;
                }
                Event::Item { slot, value } => {
                    emit_slot(slot, sink).await?;
                    match value {
                        Value::Null => sink.push("null".to_owned()).await?,
                        Value::Bool(b) => {
                            let token = if b { "true" } else { "false" };
                            sink.push(token.to_owned()).await?;
                        }
                        Value::Number(n) => sink.push(encode::encode_number(&n)).await?,
                        Value::String(s) => {
                            let mut out = String::new();
                            encode::escape_str(&s, &mut out);
                            sink.push(out).await?;
                        }
                        Value::Deferred(deferred) => {
                            trace!("suspending on deferred value");
                            let replacement = deferred.resolve().await?;
                            traversal.splice(replacement);
                        }
                        Value::Source(EmissionSource::Text(source)) => {
                            splice_text(source, sink).await?;
                        }
                        Value::Source(EmissionSource::Items(source)) => {
                            splice_items(source, sink).await?;
                        }
                        Value::Array(_) | Value::Object(_) => {
                            unreachable!("containers are announced by Open events")
                        }
                    }
                }
            }
        }
        Ok(())
    }
    .boxed()
}

async fn emit_slot<S>(slot: Slot, sink: &mut S) -> Result<()>
where
    S: ChunkSink + ?Sized,
{
    if slot.separator {
        sink.push(",".to_owned()).await?;
    }
    if let Some(key) = slot.key {
        let mut out = String::new();
        encode::escape_str(&key, &mut out);
        out.push(':');
        sink.push(out).await?;
    }
    Ok(())
}

/// Splice a scalar-source: one quote pair, each chunk escaped independently
/// as a fragment of the same literal. The next event is not reached until the
/// source signals completion.
async fn splice_text<S>(mut source: TextSource, sink: &mut S) -> Result<()>
where
    S: ChunkSink + ?Sized,
{
    sink.push("\"".to_owned()).await?;
    while let Some(chunk) = source.next_chunk().await {
        let chunk = chunk?;
        trace!(len = chunk.len(), "splicing text chunk");
        let mut out = String::new();
        encode::escape_fragment(&chunk, &mut out);
        sink.push(out).await?;
    }
    sink.push("\"".to_owned()).await?;
    Ok(())
}

/// Splice an item-source as an inline array: elements are serialized strictly
/// one at a time into the same sink, never buffered.
async fn splice_items<S>(mut source: ItemSource, sink: &mut S) -> Result<()>
where
    S: ChunkSink + ?Sized,
{
    sink.push("[".to_owned()).await?;
    let mut first = true;
    while let Some(item) = source.next_item().await {
        let item = item?;
        if !first {
            sink.push(",".to_owned()).await?;
        }
        first = false;
        trace!("splicing item-source element");
        drive(item, sink).await?;
    }
    sink.push("]".to_owned()).await?;
    Ok(())
}
