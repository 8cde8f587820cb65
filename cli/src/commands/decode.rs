//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to an ordered token-list file
    #[arg(short, long)]
    pub vocab: String,

    /// Token IDs to decode (comma-separated)
    #[arg(short, long)]
    pub ids: String,

    /// IDs to drop from the output (comma-separated), e.g. padding
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Replacement string for out-of-range IDs
    #[arg(short, long)]
    pub unk_replacement: Option<String>,
}

use ahash::AHashSet;
use anyhow::Result as AnyhowResult;
use std::path::Path;
use subword_tokenizer::{TokenizerLoader, Vocabulary};

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokens = TokenizerLoader::load_token_list(Path::new(&cmd.vocab))?;
    let vocab = Vocabulary::new(tokens);

    let ids = parse_ids(&cmd.ids)?;
    let filter_ids: AHashSet<i64> = match &cmd.filter {
        Some(filter) => parse_ids(filter)?.into_iter().collect(),
        None => AHashSet::new(),
    };

    let words = vocab.lookup_words_1d(&ids, &filter_ids, cmd.unk_replacement.as_deref())?;
    println!("{}", words.join(" "));

    Ok(())
}

fn parse_ids(raw: &str) -> AnyhowResult<Vec<i64>> {
    raw.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| -> AnyhowResult<i64> { Ok(s.trim().parse()?) })
        .collect()
}
