use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// A link token did not split into exactly two non-empty parts.
    #[error("malformed link token {token:?}: expected direction=destination")]
    MalformedLink { token: String },

    /// The direction part of a link token is not one of the four cardinal
    /// symbols.
    #[error("unrecognized cardinal direction {token:?}")]
    UnknownDirection { token: String },

    /// An operation requiring at least one city ran against an empty map.
    /// A programming-invariant violation — guarded, never expected.
    #[error("the map contains no cities")]
    EmptyMap,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
