pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod params;
pub mod resize;

pub use decode::{decode_image, read_metadata, ImageMetadata};
pub use dimensions::calculate_width_fit;
pub use encode::encode_image;
pub use params::TransformParams;
pub use resize::resize_image;
