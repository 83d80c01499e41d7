use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::utils::error::{BoxResult, SectionizeError};

/// Marker accepted in place of a path to mean stdin or stdout
pub const STDIO_MARKER: &str = "-";

fn is_stdio(path: Option<&Path>) -> bool {
    match path {
        None => true,
        Some(p) => p.as_os_str() == STDIO_MARKER,
    }
}

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref()).map_err(SectionizeError::Io)?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let path = path.as_ref();
    let mut file = fs::File::open(path).map_err(|e| {
        SectionizeError::Input(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(SectionizeError::Io)?;
    Ok(contents)
}

/// Read from the given file, or from stdin when no path (or `-`) is given
pub fn read_input(path: Option<&Path>) -> BoxResult<String> {
    match path {
        Some(p) if !is_stdio(Some(p)) => read_file(p),
        _ => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents).map_err(SectionizeError::Io)?;
            Ok(contents)
        }
    }
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref()).map_err(SectionizeError::Io)?;
    file.write_all(contents.as_bytes()).map_err(SectionizeError::Io)?;
    Ok(())
}

/// Write to the given file, or to stdout when no path (or `-`) is given
pub fn write_output(path: Option<&Path>, contents: &str) -> BoxResult<()> {
    match path {
        Some(p) if !is_stdio(Some(p)) => write_file(p, contents),
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(contents.as_bytes()).map_err(SectionizeError::Io)?;
            handle.flush().map_err(SectionizeError::Io)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_write_then_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.html");

        write_file(&path, "<h1>A</h1>").unwrap();
        assert_eq!(read_file(&path).unwrap(), "<h1>A</h1>");
        assert_eq!(read_input(Some(&path)).unwrap(), "<h1>A</h1>");
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let err = read_file("/definitely/not/here.html").unwrap_err();
        assert!(err.to_string().starts_with("Input error:"));
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("IO error:"));
        assert!(err.downcast_ref::<SectionizeError>().is_some());
    }

    #[test]
    fn test_write_over_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_file(dir.path(), "x").unwrap_err();
        assert!(matches!(err.downcast_ref::<SectionizeError>(), Some(SectionizeError::Io(_))));
    }

    #[test]
    fn test_stdio_marker() {
        assert!(is_stdio(None));
        assert!(is_stdio(Some(&PathBuf::from("-"))));
        assert!(!is_stdio(Some(&PathBuf::from("page.html"))));
    }
}
