pub mod drop_zone;

pub use drop_zone::{card, drop_zone};
