use std::hint::spin_loop;

use crate::cell::AtomicCell;

const UNLOCKED: usize = 0;
const LOCKED: usize = 1;

/// A bare spinlock with explicit `acquire` and `release`.
///
/// The state is a single [`AtomicCell`] holding `0` (unlocked) or `1`
/// (locked). Acquiring is a CAS from `0` to `1` retried in a tight loop;
/// releasing is a plain store of `0`.
///
/// # Limitations
/// - Not fair. Under contention one thread may win repeatedly while others
///   starve.
/// - Not reentrant. Acquiring twice from the same thread spins forever.
/// - No timeout. If a holder never releases, every other caller spins
///   forever.
/// - Waiters burn CPU the whole time they wait.
#[derive(Debug, Default)]
pub struct RawSpinMutex {
    state: AtomicCell,
}

impl RawSpinMutex {
    /// Create an unlocked mutex.
    pub const fn new() -> Self {
        RawSpinMutex {
            state: AtomicCell::new(UNLOCKED),
        }
    }

    /// Spin until the state moves from unlocked to locked under this caller.
    ///
    /// Never yields to the OS scheduler. `spin_loop` only emits a CPU pause
    /// hint between attempts.
    #[inline]
    pub fn acquire(&self) {
        while !self.state.compare_and_swap(UNLOCKED, LOCKED) {
            spin_loop();
        }
    }

    /// Make a single attempt to take the lock.
    #[inline]
    pub fn try_acquire(&self) -> bool {
        self.state.compare_and_swap(UNLOCKED, LOCKED)
    }

    /// Mark the mutex unlocked.
    ///
    /// # Safety
    /// The caller must currently hold the lock, obtained through
    /// [`acquire`](Self::acquire) or a successful
    /// [`try_acquire`](Self::try_acquire). No ownership check is made;
    /// releasing someone else's lock lets two threads into the critical
    /// section at once.
    #[inline]
    pub unsafe fn release(&self) {
        self.state.store(UNLOCKED);
    }

    /// Whether the lock is held right now. Only a snapshot.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.state.load() == LOCKED
    }
}
