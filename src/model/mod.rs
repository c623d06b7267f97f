pub mod classification;
pub mod preview;
pub mod selected_image;

pub use classification::{ClassificationResult, Confidence};
pub use preview::{PreviewId, PreviewRegistry};
pub use selected_image::{ImageFile, SelectedImage};
