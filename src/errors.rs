use std::{
    error::Error,
    fmt::{self, Display},
    io,
    num::ParseIntError,
};

#[derive(Debug)]
pub enum RequestLoadError {
    /// A required field line never appeared in the request.
    MissingField(&'static str),
    InvalidInteger {
        field: &'static str,
        line: usize,
        value: String,
        source: ParseIntError,
    },
    /// Field has a value count that is neither N nor (where allowed) 1.
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
        broadcastable: bool,
    },
    Io(io::Error),
}

impl Display for RequestLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestLoadError::MissingField(field) => {
                write!(f, "Request is missing the required field '{}'", field)
            }
            RequestLoadError::InvalidInteger {
                field, line, value, ..
            } => write!(
                f,
                "Line {}: field '{}' expects integers, got '{}'",
                line, field, value
            ),
            RequestLoadError::LengthMismatch {
                field,
                expected,
                found,
                broadcastable,
            } => {
                if *broadcastable {
                    write!(
                        f,
                        "Field '{}' has {} values, expected 1 or {}",
                        field, found, expected
                    )
                } else {
                    write!(
                        f,
                        "Field '{}' has {} values, expected exactly {}",
                        field, found, expected
                    )
                }
            }
            RequestLoadError::Io(err) => write!(f, "Could not read request: {}", err),
        }
    }
}

impl Error for RequestLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RequestLoadError::InvalidInteger { source, .. } => Some(source),
            RequestLoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RequestLoadError {
    fn from(error: io::Error) -> Self {
        RequestLoadError::Io(error)
    }
}

#[derive(Debug)]
pub enum DocumentError {
    Template(tera::Error),
    Io(io::Error),
}

impl Error for DocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DocumentError::Template(err) => Some(err),
            DocumentError::Io(err) => Some(err),
        }
    }
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DocumentError::Template(err) => write!(f, "TikZ template error: {}", err),
            DocumentError::Io(err) => write!(f, "Could not write document: {}", err),
        }
    }
}

impl From<tera::Error> for DocumentError {
    fn from(error: tera::Error) -> Self {
        DocumentError::Template(error)
    }
}

impl From<io::Error> for DocumentError {
    fn from(error: io::Error) -> Self {
        DocumentError::Io(error)
    }
}
