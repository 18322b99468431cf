//! Basic Keyword Extraction
//!
//! The minimal example: weighted keywords for a short article.
//!
//! ```bash
//! cargo run --example 01_basic_extraction
//! ```

use keyweight::extract_keywords;

fn main() {
    let article = "The rocket cleared the launch tower shortly after dawn. \
        Engineers watched the rocket climb as the booster engines burned.\n\n\
        Far below, a survey ship crossed the ocean, mapping the ocean floor \
        and sampling ocean water along the shelf.\n\n\
        Mission control confirmed orbit insertion, and the survey team \
        logged the launch as a success.";

    let keywords = extract_keywords(article, 10).expect("article has text");

    println!("Article: {} bytes", article.len());
    println!("Keywords: {}\n", keywords.len());

    for keyword in &keywords {
        let bar = "#".repeat((keyword.weight * 20.0).round() as usize);
        println!("{:>12} {:.4} {}", keyword.term, keyword.weight, bar);
    }

    // Terms concentrated in one paragraph ("rocket", "ocean") outrank
    // terms spread across several ("launch", "survey").
}
