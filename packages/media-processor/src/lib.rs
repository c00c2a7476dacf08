pub mod config;
pub mod event;
pub mod handler;
pub mod response;
pub mod storage;
pub mod transform;

pub use config::{ConfigError, ResizeConfig};
pub use event::S3Event;
pub use handler::ResizeHandler;
pub use response::{HandlerResponse, ResizeOutcome};
pub use storage::S3ObjectStore;
pub use transform::RasterCodec;
