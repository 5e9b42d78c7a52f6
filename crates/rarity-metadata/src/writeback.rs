//! Rank write-back into raw item JSON

use rarity_domain::ReservedTraitTypes;
use serde_json::{json, Value};

const ATTRIBUTES_KEY: &str = "item_attributes";

/// Store `rank` in an item's attributes
///
/// Drops every rank-typed attribute, then overwrites the first rarity-typed
/// attribute or appends one labelled with `reserved.rarity`. Running it again
/// with the same rank leaves the item unchanged. Returns `false` if the item
/// is not an object or its attributes are not an array.
pub fn apply_rank(item: &mut Value, rank: usize, reserved: &ReservedTraitTypes) -> bool {
    let Some(obj) = item.as_object_mut() else {
        return false;
    };
    let Some(attributes) = obj
        .entry(ATTRIBUTES_KEY)
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
    else {
        return false;
    };

    attributes.retain(|attr| !trait_type_of(attr).is_some_and(|t| reserved.is_rank(t)));

    let existing = attributes
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .find(|attr| {
            attr.get("trait_type")
                .and_then(Value::as_str)
                .is_some_and(|t| reserved.is_rarity(t))
        });

    match existing {
        Some(attr) => {
            attr.insert("value".to_string(), json!(rank));
        }
        None => attributes.push(json!({
            "trait_type": reserved.rarity,
            "value": rank,
        })),
    }

    true
}

fn trait_type_of(attr: &Value) -> Option<&str> {
    attr.get("trait_type").and_then(Value::as_str)
}
