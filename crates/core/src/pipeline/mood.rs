use crate::persona::Persona;
use crate::relay::{Relay, RelayError};

const CLASSIFIER_INSTRUCTIONS: &str =
    include_str!("prompts/mood_classifier.md");
const SUGGESTER_INSTRUCTIONS: &str =
    include_str!("prompts/activity_suggester.md");

// Only these labels get a follow-up call. The classifier may also emit
// "happy", "neutral" or "angry"; those deliberately trigger nothing.
const SUGGESTION_MOODS: [&str; 2] = ["sad", "stressed"];

/// The outcome of one mood pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoodOutcome {
    /// The detected mood warranted activity suggestions.
    Suggestions {
        /// The normalized mood label.
        mood: String,
        /// The suggested activities.
        activities: String,
    },
    /// The detected mood needs no follow-up.
    NoSuggestionNeeded {
        /// The normalized mood label.
        mood: String,
    },
}

/// Classifies the user's mood and, for the moods in a fixed allow-set,
/// relays the label to an activity-suggestion persona.
pub struct MoodPipeline {
    relay: Relay,
    classifier: Persona,
    suggester: Persona,
}

impl MoodPipeline {
    /// Creates the pipeline on top of the given relay.
    pub fn new(relay: Relay) -> Self {
        Self {
            relay,
            classifier: Persona::new(
                "Mood Classifier Agent",
                CLASSIFIER_INSTRUCTIONS,
            ),
            suggester: Persona::new(
                "Activity Suggestor Agent",
                SUGGESTER_INSTRUCTIONS,
            ),
        }
    }

    /// Runs the pipeline for one user message.
    pub async fn run(&self, message: &str) -> Result<MoodOutcome, RelayError> {
        let classification = self.relay.run(&self.classifier, message).await?;
        // The classifier is instructed to answer with a bare lowercase
        // label, normalize anyway before the membership check.
        let mood = classification.trim().to_lowercase();
        debug!("classified mood: {mood}");

        if !SUGGESTION_MOODS.contains(&mood.as_str()) {
            return Ok(MoodOutcome::NoSuggestionNeeded { mood });
        }

        // The suggester receives the bare label, not the original
        // message.
        let activities = self.relay.run(&self.suggester, &mood).await?;
        Ok(MoodOutcome::Suggestions { mood, activities })
    }
}

#[cfg(test)]
mod tests {
    use prompt_relay_model::{ErrorKind, ModelMessage};
    use prompt_relay_test_model::{PresetReply, TestModelProvider};

    use super::*;

    fn pipeline_with(provider: &TestModelProvider) -> MoodPipeline {
        MoodPipeline::new(Relay::new(provider.clone()))
    }

    #[tokio::test]
    async fn test_sad_mood_triggers_suggestions() {
        let provider = TestModelProvider::default();
        provider.push_reply(PresetReply::text("sad"));
        provider.push_reply(PresetReply::text("Call a friend."));

        let outcome = pipeline_with(&provider)
            .run("I feel really down today")
            .await
            .unwrap();
        assert_eq!(
            outcome,
            MoodOutcome::Suggestions {
                mood: "sad".to_owned(),
                activities: "Call a friend.".to_owned(),
            }
        );

        let requests = provider.recorded_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[1].messages,
            vec![
                ModelMessage::System(SUGGESTER_INSTRUCTIONS.to_owned()),
                ModelMessage::User("sad".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn test_classification_is_trimmed_and_lowercased() {
        let provider = TestModelProvider::default();
        provider.push_reply(PresetReply::text("  Stressed \n"));
        provider.push_reply(PresetReply::text("Take a short walk."));

        let outcome =
            pipeline_with(&provider).run("deadlines...").await.unwrap();
        assert_eq!(
            outcome,
            MoodOutcome::Suggestions {
                mood: "stressed".to_owned(),
                activities: "Take a short walk.".to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn test_other_moods_trigger_nothing() {
        for label in ["happy", "neutral", "angry", "confused"] {
            let provider = TestModelProvider::default();
            provider.push_reply(PresetReply::text(label));

            let outcome =
                pipeline_with(&provider).run("hello there").await.unwrap();
            assert_eq!(
                outcome,
                MoodOutcome::NoSuggestionNeeded {
                    mood: label.to_owned(),
                }
            );
            // The suggestion relay must never have been invoked.
            assert_eq!(provider.recorded_requests().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_classifier_failure_propagates() {
        let provider = TestModelProvider::default();
        provider.push_reply(PresetReply::failure(ErrorKind::Other));

        let err = pipeline_with(&provider).run("hi").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(provider.recorded_requests().len(), 1);
    }
}
