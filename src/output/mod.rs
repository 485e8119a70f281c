pub mod author;
pub mod json;

use serde::{Deserialize, Serialize};

/// A value that can appear in projected output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputValue {
    Int(i64),
    Bytes(Vec<u8>),
    Str(String),
    Dict(OutputDict),
    Null,
}

impl From<u8> for OutputValue {
    fn from(v: u8) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for OutputValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<Vec<u8>> for OutputValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for OutputValue {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<String> for OutputValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for OutputValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<OutputDict> for OutputValue {
    fn from(v: OutputDict) -> Self {
        Self::Dict(v)
    }
}

impl<T: Into<OutputValue>> From<Option<T>> for OutputValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// String-keyed map that keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDict {
    entries: Vec<(String, OutputValue)>,
}

impl OutputDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a value. Re-inserting an existing key replaces the value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OutputValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`OutputDict::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OutputValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&OutputValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OutputValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<OutputValue>> FromIterator<(K, V)> for OutputDict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (k, v) in iter {
            dict.insert(k, v);
        }
        dict
    }
}

/// How byte sequences are written to JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteEncoding {
    /// Array of integers, one per byte.
    #[default]
    Array,
    /// Lower-case hex string.
    Hex,
    /// Standard base64 with padding.
    Base64,
}

impl ByteEncoding {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "array" | "list" => Some(Self::Array),
            "hex" => Some(Self::Hex),
            "base64" | "b64" => Some(Self::Base64),
            _ => None,
        }
    }
}

/// Rendering options for [`json::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Pretty-print with indentation.
    #[serde(default)]
    pub pretty: bool,
    /// Byte-sequence encoding.
    #[serde(default)]
    pub bytes: ByteEncoding,
}

/// Capability to project a domain value into output form.
pub trait Output {
    type Projected: Into<OutputValue>;

    fn output(&self) -> Self::Projected;
}
