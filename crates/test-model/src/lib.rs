//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::future::ready;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll, ready};
use std::time::Duration;

use prompt_relay_model::{
    ErrorKind, ModelFinishReason, ModelProvider, ModelProviderError,
    ModelRequest, ModelResponse, ModelResponseEvent,
};
use tokio::time::{Sleep, sleep};

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.message, self.kind)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Debug)]
pub struct TestModelResponse {
    deltas: VecDeque<String>,
    completed: bool,
    delay: Duration,
    sleep: Option<Pin<Box<Sleep>>>,
}

impl ModelResponse for TestModelResponse {
    type Error = crate::Error;

    fn poll_next_event(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Result<Option<ModelResponseEvent>, Self::Error>> {
        let this = self.get_mut();
        if let Some(sleep) = &mut this.sleep {
            ready!(sleep.as_mut().poll(cx));
            this.sleep = None;

            if let Some(delta) = this.deltas.pop_front() {
                return Poll::Ready(Ok(Some(ModelResponseEvent::MessageDelta(
                    delta,
                ))));
            }
            if !this.completed {
                this.completed = true;
                return Poll::Ready(Ok(Some(ModelResponseEvent::Completed(
                    ModelFinishReason::Stop,
                ))));
            }

            // In case this method is called after completion.
            return Poll::Ready(Ok(None));
        }
        this.sleep = Some(Box::pin(sleep(this.delay)));
        Pin::new(this).poll_next_event(cx)
    }
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to script the replies the model
/// should produce. Replies are consumed in FIFO order, one per request,
/// and the provider records every request it receives, so tests can
/// assert how many calls were made, in which order, and with which
/// payloads. When the script runs dry, requests fail.
///
/// Clones share the script and the request log.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    script: Arc<Mutex<VecDeque<PresetReply>>>,
    requests: Arc<Mutex<Vec<ModelRequest>>>,
    delay: Option<Duration>,
}

impl TestModelProvider {
    /// Appends a scripted reply to the script.
    #[inline]
    pub fn push_reply(&self, reply: PresetReply) {
        self.script
            .lock()
            .expect("script lock poisoned")
            .push_back(reply);
    }

    /// Returns a copy of every request received so far, in order.
    #[inline]
    pub fn recorded_requests(&self) -> Vec<ModelRequest> {
        self.requests
            .lock()
            .expect("request log lock poisoned")
            .clone()
    }

    /// Sets an artificial delay before each response event.
    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }
}

impl ModelProvider for TestModelProvider {
    type Error = crate::Error;
    type Response = TestModelResponse;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send + 'static
    {
        self.requests
            .lock()
            .expect("request log lock poisoned")
            .push(req.clone());

        let reply = self
            .script
            .lock()
            .expect("script lock poisoned")
            .pop_front();
        let result = match reply {
            None => Err(Error {
                message: "no scripted reply left",
                kind: ErrorKind::Other,
            }),
            Some(reply) => match reply.into_parts() {
                (_, Some(kind)) => Err(Error {
                    message: "scripted failure",
                    kind,
                }),
                (deltas, None) => Ok(TestModelResponse {
                    deltas: deltas.into(),
                    completed: false,
                    delay: self.delay.unwrap_or(Duration::from_millis(1)),
                    sleep: None,
                }),
            },
        };
        ready(result)
    }
}
