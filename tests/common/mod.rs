#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use expense_tracker::{session::Clock, ExpenseTracker, KeyValueStore, MemoryStore, TrackerBuilder};

/// Clock that only moves when a test advances it.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl ManualClock {
    pub fn at(year: i32, month: u32, day: u32) -> Self {
        let offset = FixedOffset::east_opt(0).expect("utc offset");
        let start = offset
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid start date");
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock lock");
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock().expect("clock lock")
    }
}

pub fn builder_with(store: Arc<dyn KeyValueStore>, clock: &ManualClock) -> TrackerBuilder {
    ExpenseTracker::builder(store).clock(Box::new(clock.clone()))
}

/// Fresh session over an empty in-memory store with a fixed clock.
pub async fn empty_tracker() -> (ExpenseTracker, Arc<MemoryStore>, ManualClock) {
    let store = Arc::new(MemoryStore::new());
    let clock = ManualClock::at(2024, 3, 14);
    let tracker = builder_with(store.clone(), &clock).initialize().await;
    (tracker, store, clock)
}
