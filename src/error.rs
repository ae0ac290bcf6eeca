//! Error types of the crate.
//!
//! Only construction of a graph and name resolution can fail. Queries that find no
//! structure (no chain, no clique, no connector) return empty results instead.

use thiserror::Error;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A supplied name does not belong to any person in the graph
    #[error("no person named `{name}` in the graph")]
    NotFound { name: String },

    /// A person with this name was already added
    #[error("person `{name}` was added twice")]
    DuplicatePerson { name: String },

    #[error("person names must not be empty")]
    EmptyName,

    /// Names and schools are stored exactly as given and must not start or end with whitespace
    #[error("`{text}` has leading or trailing whitespace")]
    Untrimmed { text: String },

    /// A person cannot be friends with themselves
    #[error("`{name}` cannot be friends with themselves")]
    SelfFriendship { name: String },

    /// Reading or writing a graph description failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn not_found<S: Into<String>>(name: S) -> Self {
        Self::NotFound { name: name.into() }
    }
}
