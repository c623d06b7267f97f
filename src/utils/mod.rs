pub mod formatting;

pub use formatting::{format_byte_size, truncate_label};
