use super::PreviewId;
use bytes::Bytes;
use std::path::PathBuf;

/// Raw image as read from disk, before anything is derived from it.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub source: Option<PathBuf>,
    pub bytes: Bytes,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            source: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_source(mut self, path: PathBuf) -> Self {
        self.source = Some(path);
        self
    }

    /// Full source path when known, otherwise just the file name.
    pub fn display_path(&self) -> String {
        self.source
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| self.file_name.clone())
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub file: ImageFile,
    pub preview: PreviewId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_prefers_the_source() {
        let file = ImageFile::new("photo.jpg", &b"jpeg"[..]);
        assert_eq!(file.display_path(), "photo.jpg");

        let file = file.with_source(PathBuf::from("/tmp/photo.jpg"));
        assert_eq!(file.display_path(), "/tmp/photo.jpg");
        assert_eq!(file.size_bytes(), 4);
    }
}
