use tokio_util::sync::CancellationToken;

/// Per-actor rate-limit directive attached to one call.
///
/// `max` and `seconds` are floored to integers on the wire and must be at
/// least 1. The id may not contain a double quote and is 1-128 characters.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorLimits {
    pub actor_id: String,
    pub max: Option<f64>,
    pub seconds: Option<f64>,
}

impl ActorLimits {
    pub fn new(actor_id: impl Into<String>) -> Self {
        Self {
            actor_id: actor_id.into(),
            max: None,
            seconds: None,
        }
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn seconds(mut self, seconds: f64) -> Self {
        self.seconds = Some(seconds);
        self
    }
}

/// Options for a single call.
#[derive(Debug, Clone)]
pub struct CallOptions {
    /// Rate-limit subject; `None` means no directive header and no telemetry.
    pub actor: Option<ActorLimits>,
    /// Shorten over-length strings before validation (default `true`).
    pub allow_truncation: bool,
    /// Cooperative cancellation of the network call.
    pub cancel: Option<CancellationToken>,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            actor: None,
            allow_truncation: true,
            cancel: None,
        }
    }
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actor(mut self, limits: ActorLimits) -> Self {
        self.actor = Some(limits);
        self
    }

    pub fn allow_truncation(mut self, allow: bool) -> Self {
        self.allow_truncation = allow;
        self
    }

    pub fn cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn actor_id(&self) -> Option<&str> {
        self.actor.as_ref().map(|a| a.actor_id.as_str())
    }
}
