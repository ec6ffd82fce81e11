//! Shared traits for stored records.

use uuid::Uuid;

/// Exposes a stable identifier for records kept in the store.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Returns the position of the record carrying `id`, if any.
pub fn position_of<T: Identifiable>(records: &[T], id: Uuid) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}
