use std::cell::UnsafeCell;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::raw::RawSpinMutex;

/// A [`RawSpinMutex`] together with the value it protects.
///
/// [`lock`](SpinMutex::lock) spins until the lock is free and hands back a
/// [`SpinGuard`]; dropping the guard releases the lock. The fairness and
/// starvation caveats of [`RawSpinMutex`] apply unchanged.
pub struct SpinMutex<T> {
    raw: RawSpinMutex,
    data: UnsafeCell<T>,
}

/// Exclusive access to the data of a [`SpinMutex`]. Releases on drop.
///
/// The guard hands out `&T` through `Deref`, so sharing it between threads
/// requires `T: Sync`:
///
/// ```compile_fail
/// use std::cell::Cell;
/// use mm_sync::SpinMutex;
///
/// fn assert_sync<T: Sync>(_: &T) {}
///
/// let m = SpinMutex::new(Cell::new(0u64));
/// let guard = m.lock();
/// assert_sync(&guard);
/// ```
pub struct SpinGuard<'a, T> {
    mutex: &'a SpinMutex<T>,
    // Sync only if T: Sync, Send only if T: Send.
    _marker: PhantomData<&'a mut T>,
}

// Safety: access to `data` only happens through a guard, and a guard only
// exists while `raw` is held.
unsafe impl<T: Send> Send for SpinMutex<T> {}
unsafe impl<T: Send> Sync for SpinMutex<T> {}

impl<T> SpinMutex<T> {
    /// Wrap `data` in a new unlocked mutex.
    pub const fn new(data: T) -> Self {
        SpinMutex {
            raw: RawSpinMutex::new(),
            data: UnsafeCell::new(data),
        }
    }

    /// Acquire the lock, spinning until it is available.
    #[inline]
    pub fn lock(&self) -> SpinGuard<'_, T> {
        self.raw.acquire();
        SpinGuard {
            mutex: self,
            _marker: PhantomData,
        }
    }

    /// Acquire the lock only if it is free right now.
    #[inline]
    pub fn try_lock(&self) -> Option<SpinGuard<'_, T>> {
        if self.raw.try_acquire() {
            Some(SpinGuard {
                mutex: self,
                _marker: PhantomData,
            })
        } else {
            None
        }
    }

    /// Run `f` with exclusive access to the data.
    #[inline]
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    pub fn is_locked(&self) -> bool {
        self.raw.is_locked()
    }

    /// Borrow the data mutably. No locking is needed since `&mut self`
    /// already proves exclusivity.
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }

    /// Consume the mutex and return the data.
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }
}

impl<T: Default> Default for SpinMutex<T> {
    fn default() -> Self {
        SpinMutex::new(T::default())
    }
}

impl<T> Drop for SpinGuard<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // Safety: the guard exists only while this thread holds the lock.
        unsafe { self.mutex.raw.release() }
    }
}

impl<T> Deref for SpinGuard<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        unsafe { &*self.mutex.data.get() }
    }
}

impl<T> DerefMut for SpinGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        unsafe { &mut *self.mutex.data.get() }
    }
}
