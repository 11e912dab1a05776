use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Process-wide monotonically increasing id source.
///
/// Starts at the value given to [`InstanceCounter::starting_at`]; the only
/// mutation is a single atomic increment per handed-out id.
#[derive(Debug)]
pub struct InstanceCounter {
    next: AtomicU64,
}

impl InstanceCounter {
    pub const fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// 取得下一個 id
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The id the next call to [`InstanceCounter::next`] will return.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

/// Ids for every `ScopedResource` construction, duplicates included.
pub static RESOURCE_IDS: InstanceCounter = InstanceCounter::starting_at(1);

static LIVE_RESOURCES: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn resource_acquired() {
    LIVE_RESOURCES.fetch_add(1, Ordering::AcqRel);
}

pub(crate) fn resource_released() {
    LIVE_RESOURCES.fetch_sub(1, Ordering::AcqRel);
}

/// Number of `ScopedResource`s currently holding storage.
pub fn live_resources() -> usize {
    LIVE_RESOURCES.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_counter_starts_at_given_value() {
        let counter = InstanceCounter::starting_at(1);
        assert_eq!(counter.peek(), 1);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
        assert_eq!(counter.peek(), 3);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let counter = Arc::new(InstanceCounter::starting_at(0));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        counter.next();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.peek(), 4000);
    }
}
