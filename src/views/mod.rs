pub mod image_viewer;
pub mod result_panel;
pub mod status_panel;
pub mod upload_panel;

pub use image_viewer::image_panel;
pub use result_panel::result_panel;
pub use status_panel::{failed_panel, pending_panel};
pub use upload_panel::upload_panel;
