use log::debug;

/// Page-wide scroll toggle owned by the host document.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Holds the page scroll lock for as long as it lives.
///
/// The lock is released exactly once, either by [`ScrollLockGuard::release`]
/// or when the guard is dropped, whichever comes first.
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: Option<L>,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        debug!("scroll lock acquired");
        Self { lock: Some(lock) }
    }

    pub fn is_held(&self) -> bool {
        self.lock.is_some()
    }

    pub fn release(&mut self) {
        if let Some(lock) = self.lock.take() {
            lock.unlock();
            debug!("scroll lock released");
        }
    }
}

/// Makes sure `slot` holds a live guard. An existing live guard is kept as
/// is, so the lock is never taken twice or released while still wanted.
pub fn ensure_held<L: ScrollLock>(slot: &mut Option<ScrollLockGuard<L>>, lock: L) {
    if slot.as_ref().is_some_and(ScrollLockGuard::is_held) {
        return;
    }
    // a released guard must go before the new lock is taken
    slot.take();
    *slot = Some(ScrollLockGuard::acquire(lock));
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.release();
    }
}
