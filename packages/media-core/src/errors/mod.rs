mod types;

pub use types::{KeyError, MediaError, StorageError, TransformError};
