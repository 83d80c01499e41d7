use std::error::Error;
use std::fmt;
use std::io;

use crate::sections::StructureError;

/// Common result type for Sectionize operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Sectionize operations
#[derive(Debug)]
pub enum SectionizeError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Front matter parsing error
    FrontMatter(String),
    /// Heading structure could not be nested
    Structure(StructureError),
    /// Input could not be read or written
    Input(String),
}

impl fmt::Display for SectionizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionizeError::Io(err) => write!(f, "IO error: {}", err),
            SectionizeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SectionizeError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            SectionizeError::Structure(err) => write!(f, "Structure error: {}", err),
            SectionizeError::Input(msg) => write!(f, "Input error: {}", msg),
        }
    }
}

impl Error for SectionizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SectionizeError::Io(err) => Some(err),
            SectionizeError::Structure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SectionizeError {
    fn from(err: io::Error) -> Self {
        SectionizeError::Io(err)
    }
}

impl From<StructureError> for SectionizeError {
    fn from(err: StructureError) -> Self {
        SectionizeError::Structure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = SectionizeError::Config("bad threshold".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad threshold");

        let err = SectionizeError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "IO error: gone");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_structure_error_is_source() {
        let err = SectionizeError::from(StructureError::LevelSkip { from: 2, to: 4 });
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Structure error:"));
    }
}
