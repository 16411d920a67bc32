pub mod helpers;
pub mod logger;
#[macro_use]
pub mod macros;

pub use helpers::{expand_home, get_content_type, read_image_base64};
pub use logger::init_tracing;
