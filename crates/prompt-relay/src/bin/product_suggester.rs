//! Product suggester demo: an unbounded prompt loop that relays each
//! non-blank line to a product-suggestion persona.

use std::error::Error;

use owo_colors::OwoColorize;
use prompt_relay::console;
use prompt_relay_core::Relay;
use prompt_relay_core::pipeline::ProductSuggester;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let provider = prompt_relay::provider_from_env()?;
    let suggester = ProductSuggester::new(Relay::new(provider));

    println!(
        "{}",
        "AI Suggestor:👋 Hello! I am a product suggester bot. \
         Ask me anything!"
            .bright_cyan()
    );

    loop {
        console::prompt("\nPrompt: ");
        let Some(line) = console::read_line().await else {
            break;
        };

        let spinner = console::thinking_spinner();
        let result = suggester.respond(&line).await;
        spinner.finish_and_clear();

        match result {
            Ok(Some(reply)) => {
                println!(
                    "\n{} {}",
                    "AI Suggestor:".bright_cyan(),
                    reply.bright_white()
                );
            }
            // Blank input, read the next prompt without any output.
            Ok(None) => continue,
            // A failed call is reported and the loop keeps going.
            Err(err) => {
                eprintln!("{} {err}", "⚠️ Error:".bright_yellow());
            }
        }
    }

    println!(
        "{}",
        "\nAI Suggestor:👋 Exiting. Thank you for using the bot!"
            .bright_cyan()
    );
    Ok(())
}
