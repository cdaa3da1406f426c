use thiserror::Error;

/// Error types for `GrowVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Tail operation attempted on a vector with no elements
    #[error("Operation on empty vector")]
    EmptyVector,
    /// Requested capacity cannot be represented as an allocation layout
    #[error("Capacity overflow: {requested} elements exceed the maximum allocation size")]
    CapacityOverflow {
        /// Number of element slots requested
        requested: usize,
    },
    /// The global allocator could not satisfy the request
    #[error("Allocation failed: could not allocate {bytes} bytes for {requested} elements")]
    AllocationFailed {
        /// Number of element slots requested
        requested: usize,
        /// Size of the rejected allocation in bytes
        bytes: usize,
    },
}
