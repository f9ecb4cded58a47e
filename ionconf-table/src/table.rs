use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::{Function, Value};

/// String-keyed settings table.
///
/// Typed getters return `None` both when the key is absent and when the
/// stored value has a different type, so callers can treat every field as
/// optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    entries: BTreeMap<String, Value>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integral numbers only. A float with no fractional part counts as an
    /// integer since script numbers carry no int/float distinction.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Int(i) => Some(*i),
            Value::Float(f) if f.fract() == 0.0 && f.is_finite() => {
                let min = i64::MIN as f64;
                let max = i64::MAX as f64;
                (*f >= min && *f < max).then_some(*f as i64)
            }
            _ => None,
        }
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    pub fn get_fn(&self, key: &str) -> Option<Function> {
        match self.get(key)? {
            Value::Function(f) => Some(f.clone()),
            _ => None,
        }
    }

    pub fn get_table(&self, key: &str) -> Option<&Table> {
        self.get(key)?.as_table()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Table {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let mut tab = Table::new();
        tab.set("flag", true);
        tab.set("count", 3);
        tab.set("ratio", 0.25);
        tab.set("name", "sloppy");

        assert_eq!(tab.get_bool("flag"), Some(true));
        assert_eq!(tab.get_int("count"), Some(3));
        assert_eq!(tab.get_float("ratio"), Some(0.25));
        assert_eq!(tab.get_str("name"), Some("sloppy"));
        assert_eq!(tab.len(), 4);
    }

    #[test]
    fn test_type_mismatch_returns_none() {
        let mut tab = Table::new();
        tab.set("flag", "yes");
        tab.set("count", "3");
        tab.set("name", 5);

        assert_eq!(tab.get_bool("flag"), None);
        assert_eq!(tab.get_int("count"), None);
        assert_eq!(tab.get_float("count"), None);
        assert_eq!(tab.get_str("name"), None);
        assert!(tab.get_fn("name").is_none());
        assert!(tab.get_table("name").is_none());
    }

    #[test]
    fn test_absent_key_returns_none() {
        let tab = Table::new();
        assert!(tab.is_empty());
        assert_eq!(tab.get_bool("missing"), None);
        assert_eq!(tab.get_int("missing"), None);
    }

    #[test]
    fn test_int_float_coercion() {
        let mut tab = Table::new();
        tab.set("whole", 40.0);
        tab.set("fraction", 40.5);
        tab.set("int", 7);

        assert_eq!(tab.get_int("whole"), Some(40));
        assert_eq!(tab.get_int("fraction"), None);
        assert_eq!(tab.get_float("int"), Some(7.0));
    }

    #[test]
    fn test_int_rejects_out_of_range_float() {
        let mut tab = Table::new();
        tab.set("huge", 1e300);
        tab.set("nan", f64::NAN);
        assert_eq!(tab.get_int("huge"), None);
        assert_eq!(tab.get_int("nan"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut tab = Table::new();
        tab.set("warp", true);
        tab.set("warp", false);
        assert_eq!(tab.get_bool("warp"), Some(false));
        assert_eq!(tab.len(), 1);
    }

    #[test]
    fn test_get_fn_clones_reference() {
        let f = Function::new(|_| Ok(vec![]));
        let mut tab = Table::new();
        tab.set("_cb", f.clone());

        let got = tab.get_fn("_cb").unwrap();
        assert!(got.ptr_eq(&f));
        assert_eq!(f.ref_count(), 3);
    }
}
