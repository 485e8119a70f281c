//! identity-output — JSON projection of messenger identities.
//!
//! Turns an [`Author`](identity::Author) into an ordered dictionary with the
//! keys `formatVersion`, `id`, `name` and `publicKey`, and an author
//! [`Status`](identity::Status) into its lower-case name.
//!
//! # Quick Start
//!
//! ```
//! use identity_output::identity::{Author, AuthorId, Status, FORMAT_VERSION};
//! use identity_output::output::author::{project, project_status};
//!
//! let author = Author::new(FORMAT_VERSION, AuthorId::new([1; 32]), "Alice", vec![0xAAu8, 0xBB]).unwrap();
//! let dict = project(&author);
//! assert_eq!(dict.keys().collect::<Vec<_>>(), ["formatVersion", "id", "name", "publicKey"]);
//! assert_eq!(project_status(Status::Verified), "verified");
//! ```

pub mod config;
pub mod error;
pub mod identity;
pub mod output;

use error::Result;
use identity::{Author, AuthorInfo};
use output::RenderOptions;

/// Project an author, optionally with its info, and render it as JSON.
pub fn render_author(
    author: &Author,
    info: Option<&AuthorInfo>,
    options: &RenderOptions,
) -> Result<String> {
    let dict = match info {
        Some(info) => output::author::project_with_info(author, info),
        None => output::author::project(author),
    };
    output::json::render_dict(&dict, options)
}
