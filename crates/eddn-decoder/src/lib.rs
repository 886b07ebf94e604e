#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod envelope;
pub mod error;
pub mod journal;
pub mod router;

mod decompression;

pub use config::DecoderConfig;
pub use decoder::EddnDecoder;
pub use envelope::{Envelope, parse_envelope};
pub use error::{DecodeError, ErrorKind};
pub use router::Route;
