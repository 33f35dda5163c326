//! Streaming JSON serializer: turns a nested [`Value`] whose leaves may be
//! deferred futures or live chunk/item streams into an incrementally-consumed
//! JSON output stream, without buffering the whole document.

pub mod encode;
pub mod iter;
pub mod ser;
pub mod sink;
pub mod source;
pub mod stream;
pub mod value;

mod error;

pub use crate::error::{Error, Result};
pub use crate::ser::{serialize, to_string};
pub use crate::sink::{ChannelSink, ChunkSink, StringSink};
pub use crate::source::{Deferred, EmissionSource, ItemSource, TextSource};
pub use crate::stream::to_stream;
pub use crate::value::{Number, Value};
