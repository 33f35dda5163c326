use core::fmt::{self, Display};
use core::future::Future;

use futures::stream::{self, Stream, StreamExt};

use crate::error::Result;
use crate::source::{Deferred, EmissionSource, ItemSource, TextSource};

/// A JSON number represented by some Rust primitive.
#[derive(Clone, Debug)]
pub enum Number {
    U64(u64),
    I64(i64),
    F64(f64),
}

impl Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::U64(n) => formatter.write_str(&n.to_string()),
            Number::I64(i) => formatter.write_str(&i.to_string()),
            Number::F64(f) => formatter.write_str(&f.to_string()),
        }
    }
}

/// An in-memory JSON value whose leaves may still be pending.
///
/// `Object` keeps entries in insertion order; that order is the emission
/// order. `Deferred` and `Source` leaves are resolved/drained during
/// serialization, never before.
#[derive(Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
    Deferred(Deferred),
    Source(EmissionSource),
}

impl Value {
    /// Wrap a future as a deferred leaf, resolved during serialization.
    pub fn deferred<F>(future: F) -> Value
    where
        F: Future<Output = Result<Value>> + Send + 'static,
    {
        Value::Deferred(Deferred::new(future))
    }

    /// Wrap a chunk stream as a scalar-source leaf: the chunks concatenate
    /// into the content of one JSON string literal.
    pub fn text_source<S>(chunks: S) -> Value
    where
        S: Stream<Item = Result<String>> + Send + 'static,
    {
        Value::Source(EmissionSource::Text(TextSource::new(chunks)))
    }

    /// Wrap an item stream as an item-source leaf, emitted as a JSON array.
    pub fn item_source<S>(items: S) -> Value
    where
        S: Stream<Item = Result<Value>> + Send + 'static,
    {
        Value::Source(EmissionSource::Items(ItemSource::new(items)))
    }

    /// Scalar-source over an in-memory chunk list.
    pub fn text_chunks<I>(chunks: I) -> Value
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let chunks: Vec<String> = chunks.into_iter().map(Into::into).collect();
        Value::text_source(stream::iter(chunks).map(Ok))
    }

    /// Item-source over an in-memory item list.
    pub fn items<I>(items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        let items: Vec<Value> = items.into_iter().collect();
        Value::item_source(stream::iter(items).map(Ok))
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Value {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Value {
        Value::Number(Number::U64(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Value {
        Value::Number(Number::U64(n.into()))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Number(Number::I64(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Number(Number::I64(i.into()))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Number(Number::F64(f))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::Array(items)
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(entries: Vec<(String, Value)>) -> Value {
        Value::Object(entries)
    }
}
