pub mod clock;
pub mod form;
pub mod tracker;

pub use clock::{Clock, EntryStamper, SystemClock, DEFAULT_DATE_FORMAT};
pub use form::EntryForm;
pub use tracker::{AddOutcome, ExpenseTracker, RemoveOutcome, TrackerBuilder};
