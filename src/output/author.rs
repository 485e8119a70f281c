//! Projection of identity values into output dictionaries.
//!
//! All functions here are total and pure: they read the input and build a
//! fresh [`OutputDict`] or `String`, nothing else.

use serde::{Serialize, Serializer};

use crate::identity::{Author, AuthorInfo, Status};

use super::{Output, OutputDict};

/// Project an author into `formatVersion`, `id`, `name`, `publicKey`.
pub fn project(author: &Author) -> OutputDict {
    let mut dict = OutputDict::with_capacity(4);
    dict.insert("formatVersion", author.format_version());
    dict.insert("id", author.id().as_bytes().as_slice());
    dict.insert("name", author.name());
    dict.insert("publicKey", author.public_key());
    dict
}

/// Lower-cased canonical name of a status.
pub fn project_status(status: Status) -> String {
    status.name().to_ascii_lowercase()
}

/// Project author info into `status` and `alias` (null when unset).
pub fn project_info(info: &AuthorInfo) -> OutputDict {
    OutputDict::with_capacity(2)
        .with("status", project_status(info.status))
        .with("alias", info.alias.as_deref())
}

/// [`project`] followed by an `authorInfo` entry.
pub fn project_with_info(author: &Author, info: &AuthorInfo) -> OutputDict {
    let mut dict = project(author);
    dict.insert("authorInfo", project_info(info));
    tracing::debug!(status = %info.status, "projected author with info");
    dict
}

impl Output for Author {
    type Projected = OutputDict;

    fn output(&self) -> OutputDict {
        project(self)
    }
}

impl Serialize for Author {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        project(self).serialize(serializer)
    }
}

impl Output for AuthorInfo {
    type Projected = OutputDict;

    fn output(&self) -> OutputDict {
        project_info(self)
    }
}

impl Output for Status {
    type Projected = String;

    fn output(&self) -> String {
        project_status(*self)
    }
}
