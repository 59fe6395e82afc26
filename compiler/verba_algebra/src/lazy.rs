//! Shared, memoized thunks.
//!
//! Subtrees of the binary and trie interpretations are built on first
//! demand and never again: a `Lazy` is an `Rc` around a [`LazyCell`], so
//! every clone sees the same single evaluation.

use std::cell::LazyCell;
use std::fmt;
use std::rc::Rc;

use verba_stack::ensure_sufficient_stack;

type Thunk<T> = Box<dyn FnOnce() -> T>;

/// A value computed at most once, on first [`force`](Lazy::force).
pub struct Lazy<T>(Rc<LazyCell<T, Thunk<T>>>);

impl<T: 'static> Lazy<T> {
    /// Defer `f` until the value is first needed.
    ///
    /// Forcing one thunk commonly forces the thunks it was built from, so the
    /// body runs with stack growth enabled.
    pub fn new(f: impl FnOnce() -> T + 'static) -> Self {
        let thunk: Thunk<T> = Box::new(move || ensure_sufficient_stack(f));
        Lazy(Rc::new(LazyCell::new(thunk)))
    }

    /// An already evaluated value.
    pub fn ready(value: T) -> Self {
        let thunk: Thunk<T> = Box::new(move || value);
        Lazy(Rc::new(LazyCell::new(thunk)))
    }
}

impl<T> Lazy<T> {
    /// Evaluate if needed and borrow the value.
    #[inline]
    pub fn force(&self) -> &T {
        LazyCell::force(&self.0)
    }
}

impl<T> Clone for Lazy<T> {
    fn clone(&self) -> Self {
        Lazy(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Lazy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Lazy(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_not_evaluated_until_forced() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let lazy = Lazy::new(move || {
            counter.set(counter.get() + 1);
            42
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(*lazy.force(), 42);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_clones_share_one_evaluation() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let lazy = Lazy::new(move || {
            counter.set(counter.get() + 1);
            "subtree".to_string()
        });
        let other = lazy.clone();
        assert_eq!(other.force(), "subtree");
        assert_eq!(lazy.force(), "subtree");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_ready() {
        assert_eq!(*Lazy::ready(7u8).force(), 7);
    }

    #[test]
    fn test_deep_chain() {
        let mut lazy = Lazy::ready(0u64);
        for _ in 0..20_000 {
            let inner = lazy.clone();
            lazy = Lazy::new(move || inner.force() + 1);
        }
        assert_eq!(*lazy.force(), 20_000);
    }
}
