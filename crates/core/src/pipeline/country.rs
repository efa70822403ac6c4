use crate::persona::Persona;
use crate::relay::{Relay, RelayError};

const CAPITAL_INSTRUCTIONS: &str = include_str!("prompts/capital_teller.md");
const LANGUAGE_INSTRUCTIONS: &str = include_str!("prompts/language_teller.md");
const POPULATION_INSTRUCTIONS: &str =
    include_str!("prompts/population_teller.md");
const ORCHESTRATOR_INSTRUCTIONS: &str =
    include_str!("prompts/orchestrator.md");

/// Gathers capital, language and population facts about a country with
/// three independent relay calls, then hands the combined block to an
/// orchestrator persona for formatting.
///
/// The fact calls are independent but issued strictly one after another,
/// so the total latency is the sum of the four calls. The first failure
/// aborts the whole pipeline; there is no partial result.
pub struct CountryPipeline {
    relay: Relay,
    capital: Persona,
    language: Persona,
    population: Persona,
    orchestrator: Persona,
}

impl CountryPipeline {
    /// Creates the pipeline on top of the given relay.
    pub fn new(relay: Relay) -> Self {
        Self {
            relay,
            capital: Persona::new("Capital Agent", CAPITAL_INSTRUCTIONS),
            language: Persona::new("Language Agent", LANGUAGE_INSTRUCTIONS),
            population: Persona::new(
                "Population Agent",
                POPULATION_INSTRUCTIONS,
            ),
            orchestrator: Persona::new(
                "Orchestrator Agent",
                ORCHESTRATOR_INSTRUCTIONS,
            ),
        }
    }

    /// Runs the pipeline for one country name and returns the formatted
    /// summary.
    pub async fn run(&self, country: &str) -> Result<String, RelayError> {
        let capital = self.relay.run(&self.capital, country).await?;
        let language = self.relay.run(&self.language, country).await?;
        let population = self.relay.run(&self.population, country).await?;

        // The sub-results are opaque text, interpolated verbatim into
        // the block the orchestrator reformats.
        let combined = format!(
            "Country: {country}\nCapital: {capital}\nLanguage: {language}\nPopulation: {population}"
        );
        self.relay.run(&self.orchestrator, &combined).await
    }
}

#[cfg(test)]
mod tests {
    use prompt_relay_model::{ErrorKind, ModelMessage};
    use prompt_relay_test_model::{PresetReply, TestModelProvider};

    use super::*;

    fn system_of(messages: &[ModelMessage]) -> &str {
        match &messages[0] {
            ModelMessage::System(instructions) => instructions,
            other => panic!("expected a system message, got {other:?}"),
        }
    }

    fn user_of(messages: &[ModelMessage]) -> &str {
        match &messages[1] {
            ModelMessage::User(input) => input,
            other => panic!("expected a user message, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_calls_in_fixed_order_and_verbatim_aggregation() {
        let provider = TestModelProvider::default();
        provider.push_reply(PresetReply::text("Paris"));
        provider.push_reply(PresetReply::text("French"));
        provider.push_reply(PresetReply::text("About 68 million people."));
        provider.push_reply(PresetReply::text("Here is your summary."));

        let pipeline = CountryPipeline::new(Relay::new(provider.clone()));
        let summary = pipeline.run("France").await.unwrap();
        assert_eq!(summary, "Here is your summary.");

        let requests = provider.recorded_requests();
        assert_eq!(requests.len(), 4);
        assert_eq!(system_of(&requests[0].messages), CAPITAL_INSTRUCTIONS);
        assert_eq!(system_of(&requests[1].messages), LANGUAGE_INSTRUCTIONS);
        assert_eq!(system_of(&requests[2].messages), POPULATION_INSTRUCTIONS);
        assert_eq!(
            system_of(&requests[3].messages),
            ORCHESTRATOR_INSTRUCTIONS
        );

        // The three sub-calls all receive the bare country name.
        for req in &requests[..3] {
            assert_eq!(user_of(&req.messages), "France");
        }

        // The orchestrator input carries the sub-results verbatim.
        let combined = user_of(&requests[3].messages);
        assert_eq!(
            combined,
            "Country: France\nCapital: Paris\nLanguage: French\n\
             Population: About 68 million people."
        );
    }

    #[tokio::test]
    async fn test_sub_call_failure_aborts_the_pipeline() {
        let provider = TestModelProvider::default();
        provider.push_reply(PresetReply::text("Paris"));
        provider.push_reply(PresetReply::failure(ErrorKind::RateLimitExceeded));

        let pipeline = CountryPipeline::new(Relay::new(provider.clone()));
        let err = pipeline.run("France").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RateLimitExceeded);

        // The population and orchestrator calls were never issued.
        assert_eq!(provider.recorded_requests().len(), 2);
    }
}
