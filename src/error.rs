use thiserror::Error;

/// Errors returned by the collections and the validation helpers of this crate.
///
/// A failing operation never leaves a collection in a partially modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument violates a precondition, e.g. a range whose start sorts after its end.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The operation is not supported by the collection, e.g. inserting at an explicit index
    /// into a sorted collection.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    /// A requested element does not exist.
    #[error("no such element: {0}")]
    NoSuchElement(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
