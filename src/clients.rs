pub mod analyze;
pub mod base;

pub use analyze::{VERIFY_TOKEN_HEADER, post_analyze};
pub use base::ensure_images_exist;
