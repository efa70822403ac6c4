use crate::persona::Persona;
use crate::relay::{Relay, RelayError};

const SUGGESTER_INSTRUCTIONS: &str =
    include_str!("prompts/product_suggester.md");

/// A single-persona relay for product suggestions.
///
/// Unlike the other pipelines this one is made for a read loop: it is
/// called once per prompt, and a blank prompt is discarded without ever
/// reaching the provider.
pub struct ProductSuggester {
    relay: Relay,
    persona: Persona,
}

impl ProductSuggester {
    /// Creates the suggester on top of the given relay.
    pub fn new(relay: Relay) -> Self {
        Self {
            relay,
            persona: Persona::new(
                "Products Suggester Bot",
                SUGGESTER_INSTRUCTIONS,
            ),
        }
    }

    /// Relays one prompt and returns the suggestion text.
    ///
    /// Returns `Ok(None)` for blank input, in which case no relay call
    /// is issued at all.
    pub async fn respond(
        &self,
        prompt: &str,
    ) -> Result<Option<String>, RelayError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Ok(None);
        }
        self.relay.run(&self.persona, prompt).await.map(Some)
    }
}
