use crate::domain::ports::ContentSource;
use crate::utils::error::{Result, ToolError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads files straight from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSource;

impl LocalFileSource {
    pub fn new() -> Self {
        Self
    }
}

impl ContentSource for LocalFileSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = {
            let mut file = File::open(path).map_err(|e| ToolError::io(path, e))?;
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)
                .map_err(|e| ToolError::io(path, e))?;
            bytes
        };

        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

        // marker is ASCII, lossy decoding cannot hide or invent it
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_reads_whole_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"name: foo\nvalue: 12345\n").unwrap();

        let text = LocalFileSource::new().read_text(temp_file.path()).unwrap();
        assert_eq!(text, "name: foo\nvalue: 12345\n");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"\xff\xfe<REPLACE_ME>\n").unwrap();

        let text = LocalFileSource::new().read_text(temp_file.path()).unwrap();
        assert!(text.contains("<REPLACE_ME"));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does-not-exist.yaml");

        let err = LocalFileSource::new().read_text(&path).unwrap_err();
        match err {
            ToolError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = LocalFileSource::new().read_text(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ToolError::Io { .. }));
    }
}
