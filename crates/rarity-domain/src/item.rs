//! Item module - collection records and their trait attributes

use crate::config::TraitConfig;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Scalar value of a trait attribute
///
/// Metadata files mix strings, numbers and booleans as trait values. Numbers
/// and booleans are compared by numeric value, so `1`, `1.0` and `true` are
/// the same trait value. Text never equals a number.
#[derive(Debug, Clone)]
pub enum TraitValue {
    /// Text value (`"Blue"`)
    Text(String),
    /// Integral number (`7`)
    Integer(i64),
    /// Non-integral or out-of-range number (`2.5`)
    Float(f64),
    /// Boolean flag
    Bool(bool),
}

/// Canonical numeric identity shared by integers, floats and booleans
#[derive(PartialEq, Eq, Hash)]
enum NumericKey {
    Int(i64),
    Bits(u64),
}

// 2^63, the first float past i64::MAX
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

impl TraitValue {
    /// Whether the value counts as absent for scoring purposes
    ///
    /// Empty text, zero and `false` are treated like a missing value.
    pub fn is_empty(&self) -> bool {
        match self {
            TraitValue::Text(s) => s.is_empty(),
            TraitValue::Integer(n) => *n == 0,
            TraitValue::Float(f) => *f == 0.0,
            TraitValue::Bool(b) => !*b,
        }
    }

    fn numeric_key(&self) -> Option<NumericKey> {
        match self {
            TraitValue::Text(_) => None,
            TraitValue::Integer(n) => Some(NumericKey::Int(*n)),
            TraitValue::Bool(b) => Some(NumericKey::Int(i64::from(*b))),
            TraitValue::Float(x) if x.fract() == 0.0 && *x >= -I64_LIMIT && *x < I64_LIMIT => {
                Some(NumericKey::Int(*x as i64))
            }
            TraitValue::Float(x) => Some(NumericKey::Bits(x.to_bits())),
        }
    }
}

impl PartialEq for TraitValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TraitValue::Text(a), TraitValue::Text(b)) => a == b,
            (TraitValue::Text(_), _) | (_, TraitValue::Text(_)) => false,
            _ => self.numeric_key() == other.numeric_key(),
        }
    }
}

impl Eq for TraitValue {}

impl Hash for TraitValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match (self, self.numeric_key()) {
            (TraitValue::Text(s), _) => {
                0u8.hash(state);
                s.hash(state);
            }
            (_, key) => {
                1u8.hash(state);
                key.hash(state);
            }
        }
    }
}

impl fmt::Display for TraitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraitValue::Text(s) => f.write_str(s),
            TraitValue::Integer(n) => write!(f, "{}", n),
            TraitValue::Float(x) => fmt_float(*x, f),
            TraitValue::Bool(true) => f.write_str("True"),
            TraitValue::Bool(false) => f.write_str("False"),
        }
    }
}

/// Shortest round-trip float text, switching to `1e-05` / `1e+16` notation
/// outside `1e-4 <= |x| < 1e16`. Whole numbers keep a trailing `.0`.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
    }

    let scientific = format!("{:e}", x);
    let exponent = scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));

    match exponent {
        Some((mantissa, exp)) if x != 0.0 && !(-4..16).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exp.abs())
        }
        _ if x.fract() == 0.0 => write!(f, "{:.1}", x),
        _ => write!(f, "{}", x),
    }
}

impl From<&str> for TraitValue {
    fn from(s: &str) -> Self {
        TraitValue::Text(s.to_string())
    }
}

impl From<String> for TraitValue {
    fn from(s: String) -> Self {
        TraitValue::Text(s)
    }
}

impl From<i64> for TraitValue {
    fn from(n: i64) -> Self {
        TraitValue::Integer(n)
    }
}

/// Render an optional value, printing `None` when absent
pub fn display_value(value: Option<&TraitValue>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "None".to_string(),
    }
}

/// A `(trait_type, value)` pair attached to an item
///
/// Both halves are optional because source metadata is not schema-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Trait type, e.g. `Background`
    pub trait_type: Option<String>,
    /// Trait value, e.g. `Blue`
    pub value: Option<TraitValue>,
}

impl Attribute {
    /// Create a fully populated attribute
    pub fn new(trait_type: impl Into<String>, value: impl Into<TraitValue>) -> Self {
        Self {
            trait_type: Some(trait_type.into()),
            value: Some(value.into()),
        }
    }

    /// The pair this attribute contributes to frequency counting and scoring
    ///
    /// Returns `None` when the type or value is missing or empty, or when the
    /// type is excluded by `config`.
    pub fn scorable_pair(&self, config: &TraitConfig) -> Option<(&str, &TraitValue)> {
        let trait_type = self.trait_type.as_deref().filter(|t| !t.is_empty())?;
        let value = self.value.as_ref().filter(|v| !v.is_empty())?;
        if config.is_excluded(trait_type) {
            return None;
        }
        Some((trait_type, value))
    }
}

/// Item identifier as it appeared in the source record
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ItemId {
    /// Neither identifier key was present
    #[default]
    Missing,
    /// The identifier key was present with a null value
    Null,
    /// A concrete identifier
    Value(String),
}

impl ItemId {
    /// Key the item is ranked under
    ///
    /// A missing identifier ranks under `""`, a null one under `None`.
    pub fn rank_key(&self) -> Option<&str> {
        match self {
            ItemId::Missing => Some(""),
            ItemId::Null => None,
            ItemId::Value(id) => Some(id),
        }
    }

    /// Key used to look the rank up again for write-back
    ///
    /// Missing and null identifiers both look up `None`.
    pub fn lookup_key(&self) -> Option<&str> {
        match self {
            ItemId::Missing | ItemId::Null => None,
            ItemId::Value(id) => Some(id),
        }
    }

    /// The concrete identifier, if there is one
    pub fn as_deref(&self) -> Option<&str> {
        self.lookup_key()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Missing => Ok(()),
            ItemId::Null => f.write_str("None"),
            ItemId::Value(id) => f.write_str(id),
        }
    }
}

/// A single collection record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// Identifier (`ethscription_id`, falling back to `id`)
    pub id: ItemId,
    /// Display name, possibly ending in `#<number>`
    pub name: Option<String>,
    /// Attributes in source order
    pub attributes: Vec<Attribute>,
}

impl Item {
    /// Create an item with the given identifier and name and no attributes
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::Value(id.into()),
            name: Some(name.into()),
            attributes: Vec::new(),
        }
    }

    /// Builder-style attribute append
    pub fn with_attribute(mut self, trait_type: impl Into<String>, value: impl Into<TraitValue>) -> Self {
        self.attributes.push(Attribute::new(trait_type, value));
        self
    }

    /// First attribute carrying the featured trait type, if any
    pub fn featured_attribute(&self, config: &TraitConfig) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.trait_type.as_deref() == Some(config.reserved.featured.as_str()))
    }

    /// Whether this item is featured (bypasses scoring, pinned to rank 1)
    pub fn is_featured(&self, config: &TraitConfig) -> bool {
        self.featured_attribute(config).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(TraitValue::from("Blue").to_string(), "Blue");
        assert_eq!(TraitValue::Integer(42).to_string(), "42");
        assert_eq!(TraitValue::Float(1.0).to_string(), "1.0");
        assert_eq!(TraitValue::Float(2.5).to_string(), "2.5");
        assert_eq!(TraitValue::Bool(true).to_string(), "True");
        assert_eq!(display_value(None), "None");
    }

    #[test]
    fn test_value_identity_is_kind_sensitive() {
        assert_ne!(TraitValue::from("1"), TraitValue::Integer(1));
        assert_ne!(TraitValue::from("True"), TraitValue::Bool(true));
        assert_eq!(TraitValue::Float(0.5), TraitValue::Float(0.5));
    }

    fn hash_of(value: &TraitValue) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_numeric_values_share_identity() {
        let one = TraitValue::Integer(1);
        for same in [TraitValue::Float(1.0), TraitValue::Bool(true)] {
            assert_eq!(one, same);
            assert_eq!(hash_of(&one), hash_of(&same));
        }
        assert_eq!(TraitValue::Integer(0), TraitValue::Float(-0.0));
        assert_eq!(hash_of(&TraitValue::Bool(false)), hash_of(&TraitValue::Float(0.0)));
        assert_ne!(TraitValue::Integer(1), TraitValue::Float(1.5));
        assert_ne!(TraitValue::Integer(2), TraitValue::Bool(true));
    }

    #[test]
    fn test_float_exponent_display() {
        assert_eq!(TraitValue::Float(1e-5).to_string(), "1e-05");
        assert_eq!(TraitValue::Float(1.5e-7).to_string(), "1.5e-07");
        assert_eq!(TraitValue::Float(0.0001).to_string(), "0.0001");
        assert_eq!(TraitValue::Float(1e16).to_string(), "1e+16");
        assert_eq!(TraitValue::Float(1.2345e20).to_string(), "1.2345e+20");
        assert_eq!(TraitValue::Float(-2.5e-100).to_string(), "-2.5e-100");
        assert_eq!(TraitValue::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(TraitValue::Float(-0.0).to_string(), "-0.0");
    }

    #[test]
    fn test_item_id_keys() {
        assert_eq!(ItemId::Missing.rank_key(), Some(""));
        assert_eq!(ItemId::Missing.lookup_key(), None);
        assert_eq!(ItemId::Null.rank_key(), None);
        assert_eq!(ItemId::Null.lookup_key(), None);
        assert_eq!(ItemId::Value("0x1".into()).rank_key(), Some("0x1"));
        assert_eq!(ItemId::Null.to_string(), "None");
        assert_eq!(ItemId::Missing.to_string(), "");
    }

    #[test]
    fn test_empty_values() {
        assert!(TraitValue::from("").is_empty());
        assert!(TraitValue::Integer(0).is_empty());
        assert!(TraitValue::Bool(false).is_empty());
        assert!(!TraitValue::from("x").is_empty());
    }

    #[test]
    fn test_scorable_pair_filters() {
        let config = TraitConfig::default();
        assert!(Attribute::new("Color", "Red").scorable_pair(&config).is_some());
        assert!(Attribute::new("Wisdom/Magic", "9").scorable_pair(&config).is_none());
        assert!(Attribute::new("RARITY", 3i64).scorable_pair(&config).is_none());
        assert!(Attribute::new("Featured Artist", "Someone").scorable_pair(&config).is_none());
        assert!(Attribute::new("", "Red").scorable_pair(&config).is_none());
        assert!(Attribute::new("Color", "").scorable_pair(&config).is_none());

        let missing = Attribute {
            trait_type: Some("Color".to_string()),
            value: None,
        };
        assert!(missing.scorable_pair(&config).is_none());
    }

    #[test]
    fn test_featured_detection_is_exact() {
        let config = TraitConfig::default();
        let featured = Item::new("1", "A").with_attribute("Featured Artist", "Someone");
        let lowercase = Item::new("2", "B").with_attribute("featured artist", "Someone");
        assert!(featured.is_featured(&config));
        assert!(!lowercase.is_featured(&config));
    }
}
