pub mod codec;
pub mod constants;
pub mod errors;
pub mod storage;
pub mod transform;
pub mod validation;

// 公開API
pub use codec::ImageCodec;
pub use constants::{
    DEFAULT_CONTENT_TYPE, DEFAULT_DESTINATION_PREFIX, DEFAULT_PROCESSED_MARKER, DEFAULT_QUALITY,
    DEFAULT_SOURCE_PREFIX, DEFAULT_TARGET_WIDTH, MAX_DIMENSION, MAX_INPUT_SIZE, MAX_PIXELS,
};
pub use errors::{KeyError, MediaError, StorageError, TransformError};
#[cfg(any(test, feature = "test-utils"))]
pub use storage::MemoryObjectStore;
pub use storage::{ObjectStore, StoredObject};
pub use transform::{
    calculate_width_fit, decode_image, encode_image, read_metadata, resize_image, ImageMetadata,
    TransformParams,
};
pub use validation::{decode_event_key, validate_params, KeyLayout};
