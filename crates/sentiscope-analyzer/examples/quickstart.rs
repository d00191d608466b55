//! Analyze a piece of text and print the resulting profile.
//!
//! Run with: cargo run -p sentiscope-analyzer --example quickstart

use sentiscope_analyzer::SentimentAnalyzer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = SentimentAnalyzer::with_default_engine()?;

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "I absolutely love this amazing product, but shipping was slow.".into());

    let profile = analyzer.analyze(&text)?;

    println!(
        "{} {} (polarity {:.3}, confidence {:.1}%)",
        profile.emoji,
        profile.label.label(),
        profile.polarity,
        profile.confidence
    );
    println!(
        "primary emotion: {} ({:.1})",
        profile.emotions.primary_emotion, profile.emotions.confidence
    );
    for word in &profile.word_sentiments {
        println!("  {:<16} polarity {:+.3}", word.word, word.polarity);
    }

    Ok(())
}
