//! Build option sets - ordered GN key/value mappings.
//!
//! GN argument files are order-sensitive for flag lists (e.g. the last
//! `-rtlib` wins under clang), so the mapping preserves insertion order
//! and list values preserve append order.

use std::fmt;

use anyhow::{bail, Result};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A single typed GN value.
#[derive(Debug, Clone, PartialEq)]
pub enum GnValue {
    Str(String),
    Bool(bool),
    Int(i64),
    /// An ordered list of string flags.
    List(Vec<String>),
}

impl GnValue {
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            GnValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for GnValue {
    fn from(s: &str) -> Self {
        GnValue::Str(s.to_string())
    }
}

impl From<String> for GnValue {
    fn from(s: String) -> Self {
        GnValue::Str(s)
    }
}

impl From<bool> for GnValue {
    fn from(b: bool) -> Self {
        GnValue::Bool(b)
    }
}

impl From<i64> for GnValue {
    fn from(n: i64) -> Self {
        GnValue::Int(n)
    }
}

impl Serialize for GnValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GnValue::Str(s) => serializer.serialize_str(s),
            GnValue::Bool(b) => serializer.serialize_bool(*b),
            GnValue::Int(n) => serializer.serialize_i64(*n),
            GnValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// An insertion-ordered mapping of GN option name to value.
///
/// Each target resolution builds a fresh set from the base defaults; list
/// values are owned, so two resolutions never share storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSet {
    entries: Vec<(String, GnValue)>,
}

impl OptionSet {
    pub fn new() -> Self {
        OptionSet::default()
    }

    /// Set an option. An existing key keeps its position in the output;
    /// a new key is appended at the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<GnValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Append elements to an existing list-valued option.
    ///
    /// The key must already exist and hold a list; per-platform resolvers
    /// extend the base flag lists, they never replace them wholesale.
    pub fn extend_list<I, S>(&mut self, key: &str, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, GnValue::List(list))) => {
                list.extend(items.into_iter().map(|s| s.into()));
                Ok(())
            }
            Some(_) => bail!("option `{}` is not a list", key),
            None => bail!("option `{}` is not defined", key),
        }
    }

    pub fn get(&self, key: &str) -> Option<&GnValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GnValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for OptionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::gn::format::format_option_set(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_position_on_overwrite() {
        let mut opts = OptionSet::new();
        opts.set("a", true);
        opts.set("b", "one");
        opts.set("a", false);

        let keys: Vec<_> = opts.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(opts.get("a"), Some(&GnValue::Bool(false)));
    }

    #[test]
    fn test_new_keys_append_at_end() {
        let mut opts = OptionSet::new();
        opts.set("first", 1i64);
        opts.set("second", 2i64);
        opts.set("third", 3i64);

        let keys: Vec<_> = opts.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_extend_list_appends_in_order() {
        let mut opts = OptionSet::new();
        opts.set("flags", GnValue::List(vec!["-a".to_string()]));
        opts.extend_list("flags", ["-b", "-c"]).unwrap();

        assert_eq!(
            opts.get("flags").unwrap().as_list().unwrap(),
            &["-a", "-b", "-c"]
        );
    }

    #[test]
    fn test_extend_list_rejects_non_list() {
        let mut opts = OptionSet::new();
        opts.set("name", "value");
        assert!(opts.extend_list("name", ["-x"]).is_err());
        assert!(opts.extend_list("missing", ["-x"]).is_err());
    }

    #[test]
    fn test_serialize_preserves_order() {
        let mut opts = OptionSet::new();
        opts.set("z_last_wins", false);
        opts.set("a_option", "v");
        opts.set("flags", GnValue::List(vec!["-x".to_string()]));

        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(
            json,
            r#"{"z_last_wins":false,"a_option":"v","flags":["-x"]}"#
        );
    }
}
