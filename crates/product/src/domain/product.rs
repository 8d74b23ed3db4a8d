use serde::{Serialize, Serializer};

/// Soft-delete state of a product.
///
/// The column is tri-state (`NULL`, `0`, `1`); `NULL` and `0` both read as
/// [`DeletedState::Active`]. On the wire the state is a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletedState {
    #[default]
    Active,
    Deleted,
}

impl DeletedState {
    pub fn is_deleted(self) -> bool {
        matches!(self, DeletedState::Deleted)
    }
}

impl From<Option<i64>> for DeletedState {
    fn from(flag: Option<i64>) -> Self {
        match flag {
            None | Some(0) => DeletedState::Active,
            Some(_) => DeletedState::Deleted,
        }
    }
}

impl Serialize for DeletedState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_deleted())
    }
}
