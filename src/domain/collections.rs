//! Small helpers for pulling items out of, and moving items within,
//! ordered collections used to build menus and toolbars.

use serde_json::{Map, Value};

/// Errors raised by [`reorder`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// An index pointed past the end of the collection.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Collection length.
        len: usize,
    },
}

/// Removes `key` from `map` and returns its value.
pub fn detach(map: &mut Map<String, Value>, key: &str) -> Option<Value> {
    map.remove(key)
}

/// Removes the first element equal to `value` and returns it.
pub fn detach_value<T: PartialEq>(items: &mut Vec<T>, value: &T) -> Option<T> {
    let index = items.iter().position(|item| item == value)?;
    Some(items.remove(index))
}

/// Moves the element at `old_index` so it ends up at `new_index`.
///
/// # Errors
///
/// Returns [`CollectionError::IndexOutOfRange`] when either index is not a
/// valid position.
pub fn reorder<T>(
    mut items: Vec<T>,
    old_index: usize,
    new_index: usize,
) -> Result<Vec<T>, CollectionError> {
    let len = items.len();
    for index in [old_index, new_index] {
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
    }
    let item = items.remove(old_index);
    items.insert(new_index, item);
    Ok(items)
}
