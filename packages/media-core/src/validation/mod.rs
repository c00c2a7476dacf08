pub mod key;
pub mod params;

pub use key::{decode_event_key, KeyLayout};
pub use params::validate_params;
