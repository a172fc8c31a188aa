use std::sync::atomic::{AtomicUsize, Ordering};

/// One machine word shared between threads.
///
/// The only read-modify-write operation offered is [`compare_and_swap`],
/// which maps to a single hardware CAS instruction.
///
/// [`compare_and_swap`]: AtomicCell::compare_and_swap
#[derive(Debug, Default)]
pub struct AtomicCell {
    word: AtomicUsize,
}

impl AtomicCell {
    /// Create a cell holding `value`.
    pub const fn new(value: usize) -> Self {
        AtomicCell {
            word: AtomicUsize::new(value),
        }
    }

    /// Atomically replace the value with `new` if it currently equals `expected`.
    ///
    /// Returns `true` if the swap happened. On failure the cell is untouched.
    /// A successful swap has acquire-release ordering, so it both observes
    /// the writes published by the previous `store` and publishes its own.
    #[inline]
    pub fn compare_and_swap(&self, expected: usize, new: usize) -> bool {
        self.word
            .compare_exchange(expected, new, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    }

    /// Read the current value.
    #[inline]
    pub fn load(&self) -> usize {
        self.word.load(Ordering::Acquire)
    }

    /// Overwrite the value unconditionally, with release ordering.
    #[inline]
    pub fn store(&self, value: usize) {
        self.word.store(value, Ordering::Release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_cas_success_and_failure() {
        let cell = AtomicCell::new(0);
        assert!(cell.compare_and_swap(0, 1));
        assert_eq!(cell.load(), 1);

        assert!(!cell.compare_and_swap(0, 7));
        assert_eq!(cell.load(), 1, "failed CAS must not modify the cell");
    }

    #[test]
    fn test_store() {
        let cell = AtomicCell::new(1);
        cell.store(0);
        assert_eq!(cell.load(), 0);
    }

    #[test]
    fn test_only_one_thread_wins_cas() {
        let cell = Arc::new(AtomicCell::new(0));
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cell = Arc::clone(&cell);
                thread::spawn(move || cell.compare_and_swap(0, 1))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();
        assert_eq!(winners, 1);
    }
}
