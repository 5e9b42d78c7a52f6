//! JSON to domain item conversion

use rarity_domain::{Attribute, Item, ItemId, TraitValue};
use serde_json::Value;

/// Convert a raw item object into a domain [`Item`]
///
/// Non-object values yield an empty item. Non-scalar trait values are
/// treated as missing.
pub fn item_from_value(value: &Value) -> Item {
    let Some(obj) = value.as_object() else {
        return Item::default();
    };

    // `ethscription_id` wins whenever the key is present, even if null
    let id = match obj.get("ethscription_id").or_else(|| obj.get("id")) {
        Some(v) => item_id_from_json(v),
        None => ItemId::Missing,
    };

    let attributes = obj
        .get("item_attributes")
        .and_then(Value::as_array)
        .map(|attrs| attrs.iter().map(attribute_from_value).collect())
        .unwrap_or_default();

    Item {
        id,
        name: obj.get("name").and_then(scalar_to_string),
        attributes,
    }
}

fn attribute_from_value(value: &Value) -> Attribute {
    Attribute {
        trait_type: value
            .get("trait_type")
            .and_then(Value::as_str)
            .map(str::to_string),
        value: value.get("value").and_then(trait_value_from_json),
    }
}

fn trait_value_from_json(value: &Value) -> Option<TraitValue> {
    match value {
        Value::String(s) => Some(TraitValue::Text(s.clone())),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(TraitValue::Integer(i)),
            None => n.as_f64().map(TraitValue::Float),
        },
        Value::Bool(b) => Some(TraitValue::Bool(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn item_id_from_json(value: &Value) -> ItemId {
    match value {
        Value::Null => ItemId::Null,
        Value::String(s) => ItemId::Value(s.clone()),
        other => ItemId::Value(other.to_string()),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    trait_value_from_json(value).map(|v| v.to_string())
}
