//! Identity value types consumed by the output projectors.
//!
//! An [`Author`] is built and validated here once; everything downstream
//! treats it as an immutable, already-checked value.

pub mod author_info;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{OutputError, Result};

pub use author_info::{AuthorInfo, Status};

/// Current author format version.
pub const FORMAT_VERSION: u8 = 1;

/// Maximum length of an author's name, in UTF-8 bytes.
pub const MAX_AUTHOR_NAME_LENGTH: usize = 50;

/// Maximum length of an author's public key, in bytes.
pub const MAX_PUBLIC_KEY_LENGTH: usize = 32;

/// Fixed-length opaque identifier of an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AuthorId([u8; AuthorId::LENGTH]);

impl AuthorId {
    pub const LENGTH: usize = 32;

    pub fn new(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; Self::LENGTH] =
            bytes.try_into().map_err(|_| OutputError::InvalidAuthor {
                field: "id",
                message: format!("expected {} bytes, got {}", Self::LENGTH, bytes.len()),
            })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }
}

impl FromStr for AuthorId {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim())?;
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// A pseudonymous identity: format version, id, display name and public key.
///
/// Serializes as its projection (see `output::author::project`) and only
/// deserializes through [`Author::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    format_version: u8,
    id: AuthorId,
    name: String,
    public_key: Vec<u8>,
}

impl Author {
    /// Build an author, checking the format version and field lengths.
    pub fn new(
        format_version: u8,
        id: AuthorId,
        name: impl Into<String>,
        public_key: impl Into<Vec<u8>>,
    ) -> Result<Self> {
        let name = name.into();
        let public_key = public_key.into();

        if format_version != FORMAT_VERSION {
            return Err(OutputError::InvalidAuthor {
                field: "formatVersion",
                message: format!("unsupported version {}", format_version),
            });
        }
        if name.is_empty() || name.len() > MAX_AUTHOR_NAME_LENGTH {
            return Err(OutputError::InvalidAuthor {
                field: "name",
                message: format!(
                    "length {} outside 1..={} bytes",
                    name.len(),
                    MAX_AUTHOR_NAME_LENGTH
                ),
            });
        }
        if public_key.is_empty() || public_key.len() > MAX_PUBLIC_KEY_LENGTH {
            return Err(OutputError::InvalidAuthor {
                field: "publicKey",
                message: format!(
                    "length {} outside 1..={} bytes",
                    public_key.len(),
                    MAX_PUBLIC_KEY_LENGTH
                ),
            });
        }

        Ok(Self::from_parts(format_version, id, name, public_key))
    }

    /// Build an author from fields that were validated elsewhere.
    pub fn from_parts(format_version: u8, id: AuthorId, name: String, public_key: Vec<u8>) -> Self {
        Self {
            format_version,
            id,
            name,
            public_key,
        }
    }

    pub fn format_version(&self) -> u8 {
        self.format_version
    }

    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }
}

/// Wire form of an author, keyed like its projection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorRecord {
    format_version: u8,
    id: Vec<u8>,
    name: String,
    public_key: Vec<u8>,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = OutputError;

    fn try_from(record: AuthorRecord) -> Result<Self> {
        let id = AuthorId::from_slice(&record.id)?;
        Author::new(record.format_version, id, record.name, record.public_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> Vec<u8> {
        vec![0xAA; MAX_PUBLIC_KEY_LENGTH]
    }

    #[test]
    fn new_accepts_valid_author() {
        let author = Author::new(FORMAT_VERSION, AuthorId::new([7; 32]), "Alice", key()).unwrap();
        assert_eq!(author.format_version(), 1);
        assert_eq!(author.id().as_bytes(), &[7u8; 32]);
        assert_eq!(author.name(), "Alice");
        assert_eq!(author.public_key(), key().as_slice());
    }

    #[test]
    fn new_rejects_unsupported_version() {
        let err = Author::new(2, AuthorId::new([0; 32]), "Alice", key()).unwrap_err();
        assert!(matches!(err, OutputError::InvalidAuthor { field: "formatVersion", .. }));
    }

    #[test]
    fn new_rejects_empty_and_long_names() {
        let id = AuthorId::new([0; 32]);
        assert!(Author::new(FORMAT_VERSION, id, "", key()).is_err());
        let long = "x".repeat(MAX_AUTHOR_NAME_LENGTH + 1);
        assert!(Author::new(FORMAT_VERSION, id, long, key()).is_err());
        let max = "x".repeat(MAX_AUTHOR_NAME_LENGTH);
        assert!(Author::new(FORMAT_VERSION, id, max, key()).is_ok());
    }

    #[test]
    fn name_length_counts_utf8_bytes() {
        // 17 three-byte characters = 51 bytes
        let name = "\u{20AC}".repeat(17);
        let err = Author::new(FORMAT_VERSION, AuthorId::new([0; 32]), name, key()).unwrap_err();
        assert!(matches!(err, OutputError::InvalidAuthor { field: "name", .. }));
    }

    #[test]
    fn new_rejects_bad_public_keys() {
        let id = AuthorId::new([0; 32]);
        assert!(Author::new(FORMAT_VERSION, id, "Alice", Vec::<u8>::new()).is_err());
        assert!(Author::new(FORMAT_VERSION, id, "Alice", vec![0u8; 33]).is_err());
    }

    #[test]
    fn deserialize_checks_fields() {
        let json = format!(
            r#"{{"formatVersion":1,"id":{:?},"name":"Alice","publicKey":[170,187]}}"#,
            vec![3u8; 32]
        );
        let author: Author = serde_json::from_str(&json).unwrap();
        assert_eq!(author.name(), "Alice");
        assert_eq!(author.id().as_bytes(), &[3u8; 32]);

        let bad = format!(
            r#"{{"formatVersion":9,"id":{:?},"name":"","publicKey":[]}}"#,
            vec![0u8; 32]
        );
        assert!(serde_json::from_str::<Author>(&bad).is_err());
    }

    #[test]
    fn deserialize_rejects_short_id() {
        let json = r#"{"formatVersion":1,"id":[1,2],"name":"Alice","publicKey":[170,187]}"#;
        assert!(serde_json::from_str::<Author>(json).is_err());
    }

    #[test]
    fn derived_field_names_are_not_accepted() {
        let json = format!(
            r#"{{"format_version":1,"id":{:?},"name":"Alice","public_key":[170]}}"#,
            vec![0u8; 32]
        );
        assert!(serde_json::from_str::<Author>(&json).is_err());
    }

    #[test]
    fn author_id_parses_hex() {
        let hex_id = "01".repeat(32);
        let id: AuthorId = hex_id.parse().unwrap();
        assert_eq!(id.as_bytes(), &[1u8; 32]);
        assert_eq!(id.to_string(), hex_id);
    }

    #[test]
    fn author_id_rejects_wrong_length() {
        assert!(matches!(
            "0102".parse::<AuthorId>(),
            Err(OutputError::InvalidAuthor { field: "id", .. })
        ));
        assert!(matches!("zz".parse::<AuthorId>(), Err(OutputError::Hex(_))));
    }
}
