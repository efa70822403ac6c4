/// A single-turn request to be sent to the model provider.
///
/// The relay never carries history, so a request is exactly the
/// messages for one exchange and nothing else.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelRequest {
    /// The input messages.
    pub messages: Vec<ModelMessage>,
}

/// A complete message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModelMessage {
    /// The system instructions that fix the behavior for this exchange.
    System(String),
    /// A user input text.
    User(String),
}
