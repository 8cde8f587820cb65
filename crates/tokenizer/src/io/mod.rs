//! Loading and saving of trained tokenizers.

pub mod format;
pub mod load;
pub mod save;

pub use format::{PriorityRecord, SerializedTokenizer};
pub use load::TokenizerLoader;
pub use save::TokenizerSaver;
