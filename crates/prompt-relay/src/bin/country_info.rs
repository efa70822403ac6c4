//! Country info demo: gathers capital, language and population facts
//! about a country and has an orchestrator persona summarize them.

use std::error::Error;

use owo_colors::OwoColorize;
use prompt_relay::console;
use prompt_relay_core::Relay;
use prompt_relay_core::pipeline::CountryPipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let provider = prompt_relay::provider_from_env()?;
    let pipeline = CountryPipeline::new(Relay::new(provider));

    println!(
        "{}",
        "Orchestrator Agent: Hello! I am an orchestrator bot. \
         How may I help you with any country information?"
            .bright_cyan()
    );
    console::prompt("Enter a country name: ");
    let Some(line) = console::read_line().await else {
        return Ok(());
    };

    let spinner = console::thinking_spinner();
    let summary = pipeline.run(line.trim()).await;
    spinner.finish_and_clear();

    let summary = summary?;
    println!("\n{}", "Country Info:".bright_cyan());
    println!("{}", summary.bright_white());

    Ok(())
}
