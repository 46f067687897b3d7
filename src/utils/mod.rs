//! Helpers for loading definition files

mod decode;

pub use self::decode::decode_text;
