use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::future::poll_fn;
use std::pin::{Pin, pin};
use std::sync::Arc;

use prompt_relay_model::{
    ErrorKind, ModelMessage, ModelProvider, ModelProviderError, ModelRequest,
    ModelResponse, ModelResponseEvent,
};
use tracing::Instrument;

use crate::persona::Persona;

type RunResult = Result<String, RelayError>;
type BoxedRunFuture = Pin<Box<dyn Future<Output = RunResult> + Send>>;
type HandlerFn = Arc<dyn Fn(ModelRequest) -> BoxedRunFuture + Send + Sync>;

/// A single-turn prompt relay over a model provider.
///
/// The relay is a type-erased wrapper around a [`ModelProvider`]. Each
/// [`run`](Relay::run) issues exactly one outbound request carrying the
/// persona's instructions and the input text, and folds the streamed
/// response into one output string. The relay keeps no state between
/// calls; clones share the underlying provider.
#[derive(Clone)]
pub struct Relay {
    handler_fn: HandlerFn,
}

impl Relay {
    /// Creates a relay backed by the given model provider.
    #[inline]
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `Relay` doesn't have a
        // generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = provider.send_request(&req);
            Box::pin(
                async move {
                    trace!("got a request: {req:?}");
                    let resp_or_err = fut.await;
                    collect_response::<P>(resp_or_err).await
                }
                .instrument(trace_span!("relay call")),
            )
        });
        Self { handler_fn }
    }

    /// Performs one relay call: sends `input` under `persona` and
    /// returns the complete response text.
    pub async fn run(&self, persona: &Persona, input: &str) -> RunResult {
        debug!("dispatching relay call for {:?}", persona.name());
        let req = ModelRequest {
            messages: vec![
                ModelMessage::System(persona.instructions().to_owned()),
                ModelMessage::User(input.to_owned()),
            ],
        };
        (self.handler_fn)(req).await
    }
}

/// The error returned when a relay call fails.
#[derive(Debug)]
pub struct RelayError {
    inner: Box<dyn ModelProviderError>,
}

impl RelayError {
    #[inline]
    fn from_provider<E: ModelProviderError>(err: E) -> Self {
        Self {
            inner: Box::new(err),
        }
    }

    /// Returns the kind of the underlying provider error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.inner.kind()
    }
}

impl Display for RelayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl StdError for RelayError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.inner as &(dyn StdError + 'static))
    }
}

async fn collect_response<P: ModelProvider + 'static>(
    resp_or_err: Result<P::Response, P::Error>,
) -> RunResult {
    let resp = match resp_or_err {
        Ok(resp) => resp,
        Err(err) => {
            error!("provider refused the request: {err}");
            return Err(RelayError::from_provider(err));
        }
    };

    let mut output = String::new();

    trace!("start receiving events");

    let mut pinned_resp = pin!(resp);
    loop {
        let event_or_err =
            poll_fn(|cx| pinned_resp.as_mut().poll_next_event(cx)).await;
        let event = match event_or_err {
            Ok(event) => event,
            Err(err) => {
                error!("response stream failed: {err}");
                return Err(RelayError::from_provider(err));
            }
        };

        let Some(event) = event else {
            break;
        };
        trace!("got an event: {event:?}");

        match event {
            ModelResponseEvent::MessageDelta(delta) => {
                output.push_str(&delta);
            }
            ModelResponseEvent::Completed(reason) => {
                trace!("model finished: {reason:?}");
            }
        }
    }

    trace!("finished a request");

    Ok(output)
}
