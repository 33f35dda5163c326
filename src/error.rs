use thiserror::Error;

/// Result type returned by serialization functions.
pub type Result<T> = core::result::Result<T, Error>;

/// Anything that goes wrong mid-stream is fatal: the output already pushed is
/// a valid prefix of the document and nothing more. No error is retried.
#[derive(Clone, Debug, Error)]
pub enum Error {
    /// A deferred value failed instead of resolving.
    #[error("deferred value failed: {0}")]
    DeferredRejection(String),

    /// An emission source reported an error mid-production.
    #[error("emission source failed: {0}")]
    SourceFailure(String),

    /// The downstream consumer rejected a push or went away.
    #[error("output sink closed")]
    SinkClosed,
}
