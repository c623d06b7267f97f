use crate::model::ImageFile;
use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"];

/// Hover highlighting for the drop zone. Purely presentational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    hovering: bool,
}

impl DragState {
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn enter(&mut self) {
        self.hovering = true;
    }

    pub fn leave(&mut self) {
        self.hovering = false;
    }
}

pub async fn pick_image() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Choose an image to analyze")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

pub async fn load_image_file(path: PathBuf) -> Result<ImageFile, String> {
    log::info!("Reading image file: {}", path.display());
    let bytes = tokio::fs::read(&path).await.map_err(|err| {
        let message = format!("{}: failed to read file ({err})", path.display());
        log::error!("{message}");
        message
    })?;

    Ok(ImageFile::new(display_name(&path), bytes).with_source(path))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_state_toggles() {
        let mut drag = DragState::default();
        assert!(!drag.is_hovering());
        drag.enter();
        assert!(drag.is_hovering());
        drag.leave();
        assert!(!drag.is_hovering());
    }

    #[test]
    fn display_name_uses_last_component() {
        assert_eq!(display_name(Path::new("/tmp/shots/photo.jpg")), "photo.jpg");
        assert_eq!(display_name(Path::new("/")), "image");
    }

    #[tokio::test]
    async fn loads_bytes_and_name_from_disk() {
        let path = std::env::temp_dir().join(format!("authentiscan-{}.png", std::process::id()));
        tokio::fs::write(&path, b"\x89PNG fake").await.unwrap();

        let file = load_image_file(path.clone()).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(&file.bytes[..], b"\x89PNG fake");
        assert_eq!(file.source.as_deref(), Some(path.as_path()));
        assert!(file.file_name.starts_with("authentiscan-"));
    }

    #[tokio::test]
    async fn empty_file_is_passed_through() {
        let path =
            std::env::temp_dir().join(format!("authentiscan-empty-{}.jpg", std::process::id()));
        tokio::fs::write(&path, b"").await.unwrap();

        let file = load_image_file(path.clone()).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(file.size_bytes(), 0);
        assert_eq!(file.source.as_deref(), Some(path.as_path()));
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let err = load_image_file(PathBuf::from("/definitely/not/here.jpg"))
            .await
            .unwrap_err();
        assert!(err.contains("failed to read file"));
    }
}
