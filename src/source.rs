use core::fmt;
use core::future::Future;

use futures::future::{BoxFuture, FutureExt};
use futures::stream::{BoxStream, Stream, StreamExt};

use crate::error::Result;
use crate::value::Value;

/// A value that becomes available exactly once, asynchronously.
///
/// The replacement it resolves to may be any shape, containers and further
/// deferreds included; it is spliced into the traversal at the deferred's
/// position. Rejection aborts the whole serialization.
pub struct Deferred(BoxFuture<'static, Result<Value>>);

impl Deferred {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<Value>> + Send + 'static,
    {
        Deferred(future.boxed())
    }

    pub(crate) async fn resolve(self) -> Result<Value> {
        self.0.await
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("Deferred(..)")
    }
}

/// An external producer of output, drained exactly once during serialization.
///
/// Explicit wrapper types at the API boundary: whether a leaf is a stream is a
/// property of its type, not something probed at runtime.
#[derive(Debug)]
pub enum EmissionSource {
    /// Chunks of one string literal, emitted inside a single quote pair.
    Text(TextSource),
    /// Discrete sub-values, emitted as elements of a JSON array.
    Items(ItemSource),
}

/// Scalar-source: raw text chunks whose concatenation is the content of one
/// JSON string.
pub struct TextSource(BoxStream<'static, Result<String>>);

impl TextSource {
    pub fn new<S>(chunks: S) -> Self
    where
        S: Stream<Item = Result<String>> + Send + 'static,
    {
        TextSource(chunks.boxed())
    }

    /// `None` is the end signal.
    pub(crate) async fn next_chunk(&mut self) -> Option<Result<String>> {
        self.0.next().await
    }
}

impl fmt::Debug for TextSource {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("TextSource(..)")
    }
}

/// Item-source: a stream of sub-values, each serialized independently.
pub struct ItemSource(BoxStream<'static, Result<Value>>);

impl ItemSource {
    pub fn new<S>(items: S) -> Self
    where
        S: Stream<Item = Result<Value>> + Send + 'static,
    {
        ItemSource(items.boxed())
    }

    pub(crate) async fn next_item(&mut self) -> Option<Result<Value>> {
        self.0.next().await
    }
}

impl fmt::Debug for ItemSource {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("ItemSource(..)")
    }
}
