//! Shared traits implemented by both entry variants.

/// Exposes the stable identifier an entry is stored and rendered under.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Exposes the creation instant used for newest-first ordering.
pub trait Timestamped {
    fn timestamp(&self) -> i64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}
