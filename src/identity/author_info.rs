use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OutputError, Result};

/// Trust state of an author relative to the local user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    None,
    Anonymous,
    Unknown,
    Unverified,
    Verified,
    Ourselves,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Status; 6] = [
        Self::None,
        Self::Anonymous,
        Self::Unknown,
        Self::Unverified,
        Self::Verified,
        Self::Ourselves,
    ];

    /// Canonical symbolic name.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Anonymous => "ANONYMOUS",
            Self::Unknown => "UNKNOWN",
            Self::Unverified => "UNVERIFIED",
            Self::Verified => "VERIFIED",
            Self::Ourselves => "OURSELVES",
        }
    }

    pub fn from_str_lenient(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(s))
    }

    /// Like [`Status::from_str_lenient`], but an unknown name is an error.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str_lenient(s).ok_or_else(|| OutputError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What the local user knows about an author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub status: Status,
    /// Local nickname, if the user assigned one.
    #[serde(default)]
    pub alias: Option<String>,
}

impl AuthorInfo {
    pub fn new(status: Status, alias: Option<String>) -> Self {
        Self { status, alias }
    }
}

impl From<Status> for AuthorInfo {
    fn from(status: Status) -> Self {
        Self::new(status, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parse_ignores_case() {
        assert_eq!(Status::from_str_lenient("verified"), Some(Status::Verified));
        assert_eq!(Status::from_str_lenient("Unknown"), Some(Status::Unknown));
        assert_eq!(Status::from_str_lenient(" OURSELVES "), Some(Status::Ourselves));
        assert_eq!(Status::from_str_lenient("active"), None);
    }

    #[test]
    fn parse_reports_unknown_names() {
        assert_eq!(Status::parse("Verified").unwrap(), Status::Verified);
        let err = Status::parse("active").unwrap_err();
        assert!(matches!(&err, OutputError::UnknownStatus(name) if name == "active"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn names_are_upper_case_and_unique() {
        let mut names: Vec<&str> = Status::ALL.iter().map(|s| s.name()).collect();
        assert!(names.iter().all(|n| n.chars().all(|c| c.is_ascii_uppercase())));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Status::ALL.len());
    }

    #[test]
    fn alias_defaults_to_none() {
        let info: AuthorInfo = serde_json::from_str(r#"{"status":"verified"}"#).unwrap();
        assert_eq!(info, AuthorInfo::from(Status::Verified));
    }
}
