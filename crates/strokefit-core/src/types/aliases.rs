//! Type aliases for shared, lock-guarded state.
//!
//! The segment store is the only mutable state shared between strokes, and
//! every access to it is a critical section. These aliases give that
//! pattern one name across crates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strokefit_core::types::*;
//!
//! // Instead of: Arc<Mutex<Vec<CurveSegment>>>
//! let segments: ThreadSafeVec<CurveSegment> = thread_safe_vec();
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe vector for cross-thread collection management.
///
/// Uses `parking_lot::Mutex`, which never poisons.
pub type ThreadSafeVec<T> = Arc<Mutex<Vec<T>>>;

/// Create a new empty `ThreadSafeVec<T>`.
#[inline]
pub fn thread_safe_vec<T>() -> ThreadSafeVec<T> {
    Arc::new(Mutex::new(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_safe_vec_shared_between_clones() {
        let vec: ThreadSafeVec<i32> = thread_safe_vec();
        let other = Arc::clone(&vec);
        other.lock().push(1);
        vec.lock().push(2);
        assert_eq!(*vec.lock(), vec![1, 2]);
    }
}
