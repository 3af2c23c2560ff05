use std::fmt::{Display, Formatter};

/// Failure modes of a single documentation query.
///
/// Rendering problems never surface here; the declaration renderer degrades
/// to the symbol's canonical string form instead of failing the query.
#[derive(Debug)]
pub enum QueryError {
    /// The offset does not fall inside any file known to the loader.
    OutOfRange {
        file: String,
        offset: usize,
        len: usize,
    },
    /// No binding exists for the identifier and it is not predeclared.
    UnresolvedIdentifier(String),
    /// The symbol resolved, but neither a declaration node nor the builtin
    /// catalog produced any text.
    NoDocumentationFound(String),
    /// The position argument is not of the form `file.go:#123`.
    BadPosition(String),
    FileNotFound(String),
    InvalidArchive(String),
    LoadFailed {
        file: String,
        reason: String,
    },
}

impl Display for QueryError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                file,
                offset,
                len,
            } => {
                write!(f, "offset {offset} is beyond end of file {file} ({len})")
            },
            Self::UnresolvedIdentifier(name) => {
                write!(f, "cannot resolve identifier {name}")
            },
            Self::NoDocumentationFound(name) => {
                write!(f, "no documentation found for {name}")
            },
            Self::BadPosition(arg) => write!(f, "invalid position {arg}: expected file.go:#123"),
            Self::FileNotFound(file) => write!(f, "cannot read {file}"),
            Self::InvalidArchive(reason) => write!(f, "invalid archive: {reason}"),
            Self::LoadFailed {
                file,
                reason,
            } => {
                write!(f, "cannot load package containing {file}: {reason}")
            },
        }
    }
}

impl std::error::Error for QueryError {}
