//! Extract keywords from a text file.
//!
//! Reads plain article text from a file (or stdin with `-`) and prints the
//! ranked keywords. Set `RUST_LOG=keyweight=debug` to see pipeline events.
//!
//! ```bash
//! cargo run --example extract_file -- article.txt 30
//! cat article.txt | cargo run --example extract_file -- -
//! ```

use std::io::Read;

use keyweight::{ExtractorConfig, KeywordExtractor, DEFAULT_TOP_K, MIN_ARTICLE_WORDS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("keyweight=info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: extract_file <path|-> [top_k]")?;
    let top_k = match args.next() {
        Some(k) => k.parse()?,
        None => DEFAULT_TOP_K,
    };

    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&path)?
    };

    let config = ExtractorConfig::default()
        .with_top_k(top_k)?
        .with_min_input_words(MIN_ARTICLE_WORDS);
    let extractor = KeywordExtractor::new(config)?;

    let keywords = extractor.extract(&text)?;
    if keywords.is_empty() {
        println!("No extractable keywords.");
        return Ok(());
    }

    for (rank, keyword) in keywords.iter().enumerate() {
        println!("{:>3}. {}", rank + 1, keyword);
    }

    Ok(())
}
