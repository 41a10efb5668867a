mod image;
mod overlay;

pub use image::open_image;
pub use image::resize_image;

pub use overlay::ClassFilter;
pub use overlay::OverlayStyle;
pub use overlay::class_color;
pub use overlay::render_fitted;
pub use overlay::render_overlay;
