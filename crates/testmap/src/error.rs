pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A link endpoint or child reference names an id that is not in the
    /// node universe. Raised at load time; nothing is constructed.
    #[error("Unresolved reference `{reference}` in {context}")]
    MalformedGraph { reference: String, context: String },

    /// An interaction named an id the model does not know. The operation
    /// that raised this has not mutated anything.
    #[error("Unknown node id: {id}")]
    NodeNotFound { id: String },

    #[error("Invalid map data: {message}")]
    InvalidData { message: String },
}

impl Error {
    pub(crate) fn malformed(reference: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MalformedGraph {
            reference: reference.into(),
            context: context.into(),
        }
    }

    pub(crate) fn not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }
}
