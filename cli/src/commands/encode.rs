//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the plain-text priority file
    #[arg(short, long)]
    pub priorities: String,

    /// Path to an ordered token-list file; when given, output is token
    /// IDs instead of subword strings
    #[arg(short, long)]
    pub vocab: Option<String>,

    /// End-of-word marker matching the priority file
    #[arg(short, long, default_value = "_EOW")]
    pub eow: String,

    /// Pre-tokenized words to encode ("-" reads whitespace-split words
    /// from stdin)
    pub words: Vec<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use anyhow::Result as AnyhowResult;
use std::path::Path;
use subword_tokenizer::{BpeEncoder, TokenizerLoader, Vocabulary};

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let table = TokenizerLoader::load_priorities(Path::new(&cmd.priorities))?;
    let encoder = BpeEncoder::with_eow(table, cmd.eow.as_str());

    // Read words (from stdin if the sole word is "-")
    let words = if cmd.words == ["-"] {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer.split_whitespace().map(str::to_string).collect()
    } else {
        cmd.words
    };

    let subwords = encoder.tokenize(&words);

    let output = match &cmd.vocab {
        Some(vocab_path) => {
            let tokens = TokenizerLoader::load_token_list(Path::new(vocab_path))?;
            let vocab = Vocabulary::new(tokens);
            let ids = vocab.lookup_indices_1d(&subwords);
            let ids_str: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
            ids_str.join(" ")
        }
        None => subwords.join(" "),
    };

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            println!("Encoded {} subwords to {}", subwords.len(), path);
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
