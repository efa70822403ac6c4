use prompt_relay_model::ErrorKind;

/// A scripted reply for one request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PresetReply {
    deltas: Vec<String>,
    failure: Option<ErrorKind>,
}

impl PresetReply {
    /// Creates a reply delivered as a single message delta.
    #[inline]
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            deltas: vec![text.into()],
            failure: None,
        }
    }

    /// Creates a reply delivered as the given sequence of deltas.
    #[inline]
    pub fn with_deltas<S: Into<String>>(
        deltas: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            deltas: deltas.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Creates a reply that fails the request with the given error kind.
    #[inline]
    pub fn failure(kind: ErrorKind) -> Self {
        Self {
            deltas: vec![],
            failure: Some(kind),
        }
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (Vec<String>, Option<ErrorKind>) {
        (self.deltas, self.failure)
    }
}
