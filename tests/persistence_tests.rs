mod common;

use std::sync::Arc;

use chrono::Duration;
use common::{builder_with, ManualClock};
use expense_tracker::{
    domain::Identifiable,
    storage::StoreFaults,
    EntryDraft, EntryKind, ExpenseCategory, JsonFileStore, KeyValueStore, MemoryStore,
};
use tempfile::tempdir;

#[tokio::test]
async fn entries_reload_in_a_new_session() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("entries.json");
    let clock = ManualClock::at(2024, 1, 10);

    let added_id = {
        let store = Arc::new(JsonFileStore::new(&path));
        let mut tracker = builder_with(store, &clock).initialize().await;
        let coffee = tracker
            .add_entry(&EntryDraft::expense("Coffee", "4.50", ExpenseCategory::Food))
            .await;
        clock.advance(Duration::minutes(1));
        tracker.add_entry(&EntryDraft::income("Paycheck", "2000")).await;
        clock.advance(Duration::minutes(1));
        tracker
            .add_entry(&EntryDraft::expense("Bus", "2.75", ExpenseCategory::Transport))
            .await;
        coffee.id().expect("added").to_string()
    };

    let store = Arc::new(JsonFileStore::new(&path));
    let reloaded = builder_with(store, &clock).initialize().await;

    assert_eq!(reloaded.expenses().len(), 2);
    assert_eq!(reloaded.income().len(), 1);
    assert_eq!(reloaded.expenses()[0].base.description, "Bus");
    assert_eq!(reloaded.expenses()[1].id(), added_id);
    assert_eq!(reloaded.expenses()[1].base.amount, 4.50);
    assert_eq!(reloaded.expenses()[1].base.date, "1/10/2024");
    assert_eq!(reloaded.summary().balance, 2000.0 - 4.50 - 2.75);
}

#[tokio::test]
async fn missing_store_file_starts_empty() {
    let dir = tempdir().expect("tempdir");
    let tracker = expense_tracker::open_at(&dir.path().join("never-written.json")).await;

    assert!(tracker.expenses().is_empty());
    assert!(tracker.income().is_empty());
    assert!(!tracker.ledger().has_transactions());
}

#[tokio::test]
async fn deletes_persist_across_sessions() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("entries.json");
    let clock = ManualClock::at(2024, 2, 1);

    {
        let store = Arc::new(JsonFileStore::new(&path));
        let mut tracker = builder_with(store, &clock).initialize().await;
        let gym = tracker
            .add_entry(&EntryDraft::expense("Gym", "30", ExpenseCategory::Health))
            .await;
        tracker
            .remove_entry(EntryKind::Expense, gym.id().expect("added"))
            .await;
    }

    let store = Arc::new(JsonFileStore::new(&path));
    assert!(store.list("expense:").await.expect("store exists").is_empty());
}

#[tokio::test]
async fn failed_delete_lets_entry_reappear_next_session() {
    let store = Arc::new(MemoryStore::new());
    let clock = ManualClock::at(2024, 4, 2);

    let mut first = builder_with(store.clone(), &clock).initialize().await;
    let outcome = first
        .add_entry(&EntryDraft::expense("Movie", "12", ExpenseCategory::Entertainment))
        .await;
    store.set_faults(StoreFaults::read_only()).await;
    first
        .remove_entry(EntryKind::Expense, outcome.id().expect("added"))
        .await;
    assert!(first.expenses().is_empty());

    store.set_faults(StoreFaults::none()).await;
    let second = builder_with(store.clone(), &clock).initialize().await;
    assert_eq!(second.expenses().len(), 1);
    assert_eq!(second.expenses()[0].id(), outcome.id().expect("added"));
}

#[tokio::test]
async fn unavailable_store_initializes_empty_and_keeps_working() {
    let store = Arc::new(MemoryStore::with_faults(StoreFaults::all()));
    store
        .seed(
            "income:1",
            r#"{"id":"1","description":"Old","amount":5,"timestamp":1,"date":"1/1/2020"}"#,
        )
        .await;
    let clock = ManualClock::at(2024, 4, 2);

    let mut tracker = builder_with(store.clone(), &clock).initialize().await;
    assert!(tracker.income().is_empty());

    let outcome = tracker.add_entry(&EntryDraft::income("New", "5")).await;
    assert_eq!(tracker.income().len(), 1);
    assert!(matches!(
        outcome,
        expense_tracker::AddOutcome::Added { sync: expense_tracker::SyncStatus::Diverged { .. }, .. }
    ));
    // Only the seeded record; the new entry never reached the store.
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn loads_records_written_by_the_browser_widget() {
    let store = Arc::new(MemoryStore::new());
    store
        .seed(
            "expense:1700000000000",
            r#"{"id":"1700000000000","description":"Lunch","amount":12.5,"category":"Food","timestamp":1700000000000,"date":"11/14/2023"}"#,
        )
        .await;
    store
        .seed(
            "expense:1700000100000",
            r#"{"id":"1700000100000","description":"Taxi","amount":20,"category":"Transport","timestamp":1700000100000,"date":"11/14/2023"}"#,
        )
        .await;
    store
        .seed(
            "income:1690000000000",
            r#"{"id":"1690000000000","description":"Salary","amount":3000,"category":"Food","timestamp":1690000000000,"date":"7/22/2023"}"#,
        )
        .await;
    store.seed("expense:corrupt", "{\"id\":").await;
    let clock = ManualClock::at(2024, 1, 1);

    let mut tracker = builder_with(store.clone(), &clock).initialize().await;

    assert_eq!(tracker.expenses().len(), 2);
    assert_eq!(tracker.expenses()[0].base.description, "Taxi");
    assert_eq!(tracker.income()[0].base.amount, 3000.0);
    let summary = tracker.summary();
    assert_eq!(summary.total_expenses, 32.5);
    assert_eq!(summary.category_totals[0].category, ExpenseCategory::Transport);

    let added = tracker.add_entry(&EntryDraft::income("Bonus", "1")).await;
    let id: i64 = added.id().expect("added").parse().expect("numeric id");
    assert!(id > 1_700_000_100_000);
}

#[tokio::test]
async fn stored_value_round_trips_the_entry() {
    let store = Arc::new(MemoryStore::new());
    let clock = ManualClock::at(2024, 6, 30);
    let mut tracker = builder_with(store.clone(), &clock).initialize().await;

    let outcome = tracker
        .add_entry(&EntryDraft::expense("Shoes", "79.99", ExpenseCategory::Shopping))
        .await;
    let key = format!("expense:{}", outcome.id().expect("added"));
    let raw = store.get(&key).await.expect("read").expect("present");
    let stored: expense_tracker::ExpenseEntry = serde_json::from_str(&raw).expect("parse");

    assert_eq!(&stored, &tracker.expenses()[0]);
}

#[tokio::test]
async fn stored_zero_and_offsetting_amounts_load_without_shares() {
    let store = Arc::new(MemoryStore::new());
    store
        .seed(
            "expense:1",
            r#"{"id":"1","description":"Free sample","amount":0,"category":"Food","timestamp":1,"date":"1/1/2024"}"#,
        )
        .await;
    let clock = ManualClock::at(2024, 1, 2);
    let tracker = builder_with(store.clone(), &clock).initialize().await;

    let summary = tracker.summary();
    assert_eq!(tracker.expenses().len(), 1);
    assert_eq!(summary.category_percentage(ExpenseCategory::Food), None);
    assert!(summary.breakdown().is_empty());

    store
        .seed(
            "expense:2",
            r#"{"id":"2","description":"Refund","amount":-3,"category":"Shopping","timestamp":2,"date":"1/1/2024"}"#,
        )
        .await;
    store
        .seed(
            "expense:3",
            r#"{"id":"3","description":"Socks","amount":3,"category":"Shopping","timestamp":3,"date":"1/1/2024"}"#,
        )
        .await;
    let tracker = builder_with(store, &clock).initialize().await;

    let summary = tracker.summary();
    assert_eq!(tracker.expenses().len(), 3);
    assert_eq!(summary.total_expenses, 0.0);
    assert!(summary.breakdown().is_empty());
}
