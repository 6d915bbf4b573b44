use rust_decimal::Decimal;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A saturating counter that knows how many contributions it is waiting for.
///
/// `increment` reports the completion transition itself: it returns `true`
/// for exactly one caller, the one whose increment moves the counter to its
/// target. Dependent actions keyed off that return value therefore run
/// exactly once, with no outer lock around the increment-and-check.
#[derive(Debug)]
pub struct ProgressCounter {
    current: AtomicUsize,
    target: usize,
}

impl ProgressCounter {
    pub fn new(target: usize) -> Self {
        Self {
            current: AtomicUsize::new(0),
            target,
        }
    }

    /// Adds one contribution. Increments past the target are silent no-ops.
    ///
    /// Returns `true` iff this call completed the counter.
    pub fn increment(&self) -> bool {
        self.current
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (current < self.target).then_some(current + 1)
            })
            .map(|previous| previous + 1 == self.target)
            .unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.target
    }

    pub fn target(&self) -> usize {
        self.target
    }
}

/// A thread-safe running sum.
#[derive(Debug, Default)]
pub struct RunningTotal {
    value: Mutex<Decimal>,
}

impl RunningTotal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, delta: Decimal) {
        let mut value = self.value.lock().expect("running total lock poisoned");
        *value += delta;
    }

    pub fn read(&self) -> Decimal {
        *self.value.lock().expect("running total lock poisoned")
    }
}

/// A thread-safe running minimum over (key, score) pairs.
///
/// An offer replaces the recorded pair only when it is the first offer or its
/// score is strictly lower, so an exact tie keeps the first key observed. The
/// compare and the write happen under one lock.
#[derive(Debug)]
pub struct RunningMin<K> {
    best: Mutex<Option<(K, Decimal)>>,
}

impl<K> RunningMin<K> {
    pub fn new() -> Self {
        Self {
            best: Mutex::new(None),
        }
    }

    pub fn offer(&self, key: K, score: Decimal) {
        let mut best = self.best.lock().expect("running min lock poisoned");
        match best.as_ref() {
            Some((_, lowest)) if *lowest <= score => {}
            _ => *best = Some((key, score)),
        }
    }

    /// Returns the lowest-scored pair seen so far, `None` before any offer.
    pub fn peek(&self) -> Option<(K, Decimal)>
    where
        K: Clone,
    {
        self.best.lock().expect("running min lock poisoned").clone()
    }
}

impl<K> Default for RunningMin<K> {
    fn default() -> Self {
        Self::new()
    }
}
