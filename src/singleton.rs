// Singleton: exactly one instance, created lazily, shared by every caller.
//
// `Singleton<T>` is a double-checked-lock guard. The slot is a `OnceLock`, so
// reading it never blocks and a published value is always fully built. The
// mutex only wraps the construction section.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use log::{debug, info, warn};

/// Which branch of the guard served a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Acquisition {
    /// Slot already populated; the lock was never touched.
    FastPath,
    /// Slot was empty on the first read but filled by the time the lock was held.
    LockedHit,
    /// This call built the instance.
    Constructed,
}

impl fmt::Display for Acquisition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Acquisition::FastPath => "fast path",
            Acquisition::LockedHit => "locked hit",
            Acquisition::Constructed => "constructed",
        };
        f.write_str(label)
    }
}

pub struct Singleton<T> {
    slot: OnceLock<T>,
    lock: Mutex<()>,
}

impl<T> Singleton<T> {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
            lock: Mutex::new(()),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.acquire(init).0
    }

    /// Return the instance, building it with `init` if nobody has yet.
    pub fn acquire(&self, init: impl FnOnce() -> T) -> (&T, Acquisition) {
        match self.try_acquire(|| Ok::<T, std::convert::Infallible>(init())) {
            Ok(acquired) => acquired,
            Err(never) => match never {},
        }
    }

    /// Like [`Singleton::acquire`], but `init` may fail.
    ///
    /// A failed `init` leaves the slot empty, so a later call tries again.
    pub fn try_acquire<E>(
        &self,
        init: impl FnOnce() -> Result<T, E>,
    ) -> Result<(&T, Acquisition), E> {
        if let Some(value) = self.slot.get() {
            debug!("[Singleton] [1] returning already created instance");
            return Ok((value, Acquisition::FastPath));
        }

        // Held until this function returns, including on error and on panic.
        let _guard = self.lock_construction();

        if let Some(value) = self.slot.get() {
            debug!("[Singleton] [2] returning already created instance");
            return Ok((value, Acquisition::LockedHit));
        }

        let created = match init() {
            Ok(created) => created,
            Err(err) => {
                warn!("[Singleton] initializer failed, slot left empty");
                return Err(err);
            }
        };
        info!("[Singleton] created instance");
        // Every writer holds `lock`, so the slot is still empty here.
        let value = self.slot.get_or_init(|| created);
        Ok((value, Acquisition::Constructed))
    }

    // A panicking initializer poisons the mutex; the slot is still empty
    // then, so the next caller can safely retry.
    fn lock_construction(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton").field("slot", &self.slot.get()).finish()
    }
}

// ============================================================================
// The guarded type
// ============================================================================

static DB_HANDLER: Singleton<DatabaseHandler> = Singleton::new();
static DB_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// A stand-in for an expensive, process-wide resource.
#[derive(Debug)]
pub struct DatabaseHandler {
    _private: (),
}

impl DatabaseHandler {
    fn new() -> Self {
        DB_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        Self { _private: () }
    }

    pub fn instance() -> &'static DatabaseHandler {
        Self::acquire().0
    }

    pub fn acquire() -> (&'static DatabaseHandler, Acquisition) {
        DB_HANDLER.acquire(DatabaseHandler::new)
    }

    /// How many handlers have ever been built in this process.
    pub fn constructions() -> usize {
        DB_CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    pub fn query(&self, sql: &str) -> String {
        info!("[DatabaseHandler] query: {}", sql);
        format!("[DatabaseHandler/query] {}", sql)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::Barrier;
    use std::thread;
    use std::time::Duration;

    use crossbeam::channel::bounded;

    #[derive(Debug)]
    struct Counted(usize);

    #[test]
    fn test_first_call_constructs_then_fast_path() {
        let guard: Singleton<Counted> = Singleton::new();
        assert!(!guard.is_initialized());
        assert!(guard.get().is_none());

        let (first, how) = guard.acquire(|| Counted(7));
        assert_eq!(how, Acquisition::Constructed);
        assert_eq!(first.0, 7);

        let (second, how) = guard.acquire(|| Counted(99));
        assert_eq!(how, Acquisition::FastPath);
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.0, 7);
        assert!(guard.is_initialized());
    }

    #[test]
    fn test_concurrent_callers_share_one_instance() {
        const CALLERS: usize = 30;
        let guard: Singleton<Counted> = Singleton::new();
        let built = AtomicUsize::new(0);
        let start = Barrier::new(CALLERS);

        let results: Vec<(usize, Acquisition)> = thread::scope(|s| {
            let mut handles = Vec::with_capacity(CALLERS);
            for _ in 0..CALLERS {
                handles.push(s.spawn(|| {
                    start.wait();
                    let (value, how) = guard.acquire(|| {
                        built.fetch_add(1, Ordering::SeqCst);
                        Counted(1)
                    });
                    (value as *const Counted as usize, how)
                }));
            }
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert_eq!(results.len(), CALLERS);

        let first_addr = results[0].0;
        assert!(results.iter().all(|(addr, _)| *addr == first_addr));

        let mut paths: HashMap<Acquisition, usize> = HashMap::new();
        for (_, how) in &results {
            *paths.entry(*how).or_default() += 1;
        }
        assert_eq!(paths.get(&Acquisition::Constructed), Some(&1));
    }

    #[test]
    fn test_waiting_caller_takes_locked_path() {
        let guard: Singleton<Counted> = Singleton::new();
        let built = AtomicUsize::new(0);
        let (entered_tx, entered_rx) = bounded::<()>(0);
        let (release_tx, release_rx) = bounded::<()>(0);

        let (first, second) = thread::scope(|s| {
            let guard = &guard;
            let built = &built;

            let a = s.spawn(move || {
                let (value, how) = guard.acquire(|| {
                    built.fetch_add(1, Ordering::SeqCst);
                    entered_tx.send(()).unwrap();
                    release_rx.recv().unwrap();
                    Counted(5)
                });
                (value as *const Counted as usize, how)
            });

            // A now holds the construction lock with the slot still empty.
            entered_rx.recv().unwrap();
            let b = s.spawn(move || {
                let (value, how) = guard.acquire(|| {
                    built.fetch_add(1, Ordering::SeqCst);
                    Counted(6)
                });
                (value as *const Counted as usize, how)
            });

            thread::sleep(Duration::from_millis(100));
            release_tx.send(()).unwrap();
            (a.join().unwrap(), b.join().unwrap())
        });

        assert_eq!(first.1, Acquisition::Constructed);
        assert_eq!(second.1, Acquisition::LockedHit);
        assert_eq!(first.0, second.0);
        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert_eq!(guard.get().map(|c| c.0), Some(5));
    }

    #[test]
    fn test_failed_init_leaves_slot_empty() {
        let guard: Singleton<Counted> = Singleton::new();

        let err = guard.try_acquire(|| Err::<Counted, _>("connection refused")).unwrap_err();
        assert_eq!(err, "connection refused");
        assert!(!guard.is_initialized());

        let (value, how) = guard.try_acquire(|| Ok::<_, &str>(Counted(2))).unwrap();
        assert_eq!(how, Acquisition::Constructed);
        assert_eq!(value.0, 2);
    }

    #[test]
    fn test_panicking_init_releases_lock() {
        let guard: Singleton<Counted> = Singleton::new();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            guard.acquire(|| panic!("init blew up"));
        }));
        assert!(outcome.is_err());
        assert!(!guard.is_initialized());

        let (value, how) = guard.acquire(|| Counted(3));
        assert_eq!(how, Acquisition::Constructed);
        assert_eq!(value.0, 3);
    }

    #[test]
    fn test_database_handler_is_process_wide() {
        let start = Barrier::new(30);
        let handlers: Vec<usize> = thread::scope(|s| {
            let mut handles = Vec::with_capacity(30);
            for _ in 0..30 {
                handles.push(s.spawn(|| {
                    start.wait();
                    DatabaseHandler::instance() as *const DatabaseHandler as usize
                }));
            }
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(handlers.iter().all(|addr| *addr == handlers[0]));
        assert_eq!(DatabaseHandler::constructions(), 1);

        let (again, how) = DatabaseHandler::acquire();
        assert_eq!(how, Acquisition::FastPath);
        assert_eq!(again as *const DatabaseHandler as usize, handlers[0]);
    }

    #[test]
    fn test_query_echoes_statement() {
        let db = DatabaseHandler::instance();
        assert_eq!(
            db.query("SELECT 1"),
            "[DatabaseHandler/query] SELECT 1"
        );
    }
}
