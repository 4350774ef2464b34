use crate::item::{key_of, keys_equal, Item, ItemKey, Items};

/// First item whose `key_by` field equals `id`.
pub fn find<'a>(items: &'a [Item], key_by: &str, id: &ItemKey) -> Option<&'a Item> {
    items
        .iter()
        .find(|item| key_of(item, key_by).is_some_and(|key| keys_equal(key, id)))
}

/// Index of the first item whose `key_by` field equals `id`.
pub fn position(items: &[Item], key_by: &str, id: &ItemKey) -> Option<usize> {
    items
        .iter()
        .position(|item| key_of(item, key_by).is_some_and(|key| keys_equal(key, id)))
}

/// A new snapshot with `item` at the end.
pub fn appended(items: &[Item], item: Item) -> Items {
    items.iter().cloned().chain(std::iter::once(item)).collect()
}

/// A new snapshot with `patch` merged over the item keyed `id`.
///
/// The key field always keeps its original value. Returns `None` when no
/// item matches.
pub fn updated(items: &[Item], key_by: &str, id: &ItemKey, patch: Item) -> Option<Items> {
    let index = position(items, key_by, id)?;
    let original = &items[index];

    let mut merged = original.clone();
    merged.extend(patch);
    if let Some(key) = key_of(original, key_by) {
        merged.insert(key_by.to_owned(), key.clone());
    }

    Some(
        items
            .iter()
            .enumerate()
            .map(|(i, item)| if i == index { merged.clone() } else { item.clone() })
            .collect(),
    )
}

/// A new snapshot without the items whose key is in `ids`.
pub fn without(items: &[Item], key_by: &str, ids: &[ItemKey]) -> Items {
    items
        .iter()
        .filter(|item| {
            !key_of(item, key_by).is_some_and(|key| ids.iter().any(|id| keys_equal(key, id)))
        })
        .cloned()
        .collect()
}
