use std::collections::TryReserveError;

/// An error returned by the fallible-allocation methods of a [`Set`](crate::Set).
///
/// A method that returns an error leaves the set exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The node arena could not grow to hold more items.
    #[error("failed to reserve storage for {additional} more items")]
    Reserve {
        /// The number of items that could not be reserved.
        additional: usize,
        /// The allocator's error.
        #[source]
        source: TryReserveError,
    },
}

/// A specialized `Result` for fallible set operations.
pub type Result<T> = std::result::Result<T, Error>;
