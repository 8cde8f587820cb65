//! CLI commands for the subword tokenizer.

pub mod decode;
pub mod encode;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
