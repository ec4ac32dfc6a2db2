use std::fmt::Display;

/// This is error type for fallible methods of [`IndexedMinHeap`].
/// Queue is never modified when an operation fails.
///
/// [`IndexedMinHeap`]: struct.IndexedMinHeap.html
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum HeapError {
    /// [`insert`] got an element which is already in queue.
    ///
    /// [`insert`]: struct.IndexedMinHeap.html#method.insert
    DuplicateElement,
    /// Queue has no elements to peek or extract.
    EmptyQueue,
    /// [`update_priority`] got an element which is not in queue.
    /// It was either never inserted or already extracted.
    ///
    /// [`update_priority`]: struct.IndexedMinHeap.html#method.update_priority
    NotFound,
    /// Priority is not comparable even with itself, e.g. `f64::NAN`.
    UnorderedPriority,
}

impl Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            HeapError::DuplicateElement => write!(f, "Element is already in IndexedMinHeap"),
            HeapError::EmptyQueue => write!(f, "IndexedMinHeap is empty"),
            HeapError::NotFound => write!(f, "Element not found in IndexedMinHeap"),
            HeapError::UnorderedPriority => {
                write!(f, "Priority can't be ordered in IndexedMinHeap")
            }
        }
    }
}

impl std::error::Error for HeapError {}
