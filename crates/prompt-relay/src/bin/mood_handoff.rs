//! Mood analyzer demo: classifies the user's mood and, for the moods
//! that warrant it, hands the label off to an activity suggester.

use std::error::Error;

use owo_colors::OwoColorize;
use prompt_relay::console;
use prompt_relay_core::Relay;
use prompt_relay_core::pipeline::{MoodOutcome, MoodPipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let provider = prompt_relay::provider_from_env()?;
    let pipeline = MoodPipeline::new(Relay::new(provider));

    println!(
        "{}",
        "AI Mood Analyzer: Hello! I am a mood analyzer bot. How may I help you?"
            .bright_cyan()
    );
    console::prompt("Prompt: ");
    let Some(line) = console::read_line().await else {
        return Ok(());
    };

    let spinner = console::thinking_spinner();
    let outcome = pipeline.run(line.trim()).await;
    spinner.finish_and_clear();

    match outcome? {
        MoodOutcome::Suggestions { mood, activities } => {
            println!(
                "{} {}",
                "Detected Mood:".bright_cyan(),
                mood.bright_white()
            );
            println!(
                "{} {}",
                "Suggested Activities:".bright_cyan(),
                activities.bright_white()
            );
        }
        MoodOutcome::NoSuggestionNeeded { mood } => {
            println!(
                "{} {}",
                "Detected Mood:".bright_cyan(),
                mood.bright_white()
            );
            println!("No suggestions needed. Have a great day!");
        }
    }

    Ok(())
}
