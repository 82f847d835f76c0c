use std::error::Error;
use std::fmt::{self, Display};



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * LIBRARY-SPECIFIC INSTANCE OF RESULT                                              *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



pub type GraphResult<OkType> = Result<OkType, GraphError>;



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ERRORS                                                                           *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Error surface of this crate
///
/// ## Description
/// Every fallible operation in this crate returns one of these three kinds. There is no
/// retry, no fallback, and no logging performed internally: a caller that wants any of
/// that wraps these errors at a higher level.
#[derive(Debug)]
pub enum GraphError {
    /// A vertex id fell outside `[0, |V|)`, or an output buffer (e.g. Dijkstra's distance
    /// array) was shorter than `|V|`.
    OutOfRange { function_path: &'static str, message: String },
    /// A CSR loading invariant was violated, or `load_edges` was called on a non-empty
    /// graph. The graph is left empty.
    LoadError { function_path: &'static str, message: String },
    /// The dynamic container's loader saw a `source_id`/`target_id` exceeding a pinned
    /// vertex count. The graph may be partially populated.
    BadEdge { function_path: &'static str, message: String },
}

// GraphError::GraphError
impl GraphError {
    pub(crate) fn out_of_range<StringType: Into<String>>(function_path: &'static str, message: StringType) -> Self {
        GraphError::OutOfRange { function_path, message: message.into() }
    }

    pub(crate) fn load_error<StringType: Into<String>>(function_path: &'static str, message: StringType) -> Self {
        GraphError::LoadError { function_path, message: message.into() }
    }

    pub(crate) fn bad_edge<StringType: Into<String>>(function_path: &'static str, message: StringType) -> Self {
        GraphError::BadEdge { function_path, message: message.into() }
    }
}

// Implementation of Display
impl Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::OutOfRange { function_path, message } => write!(f, "{}: out of range. {}", function_path, message),
            GraphError::LoadError { function_path, message } => write!(f, "{}: load error. {}", function_path, message),
            GraphError::BadEdge { function_path, message } => write!(f, "{}: bad edge. {}", function_path, message),
        }
    }
}

// Implementation of Error
impl Error for GraphError {}
