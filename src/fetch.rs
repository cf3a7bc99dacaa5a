use serde::Serialize;

/// Lifecycle of one request flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued request: a sequence number plus the key it is
/// scoped to (a month, a game date).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket<K> {
    pub seq: u64,
    pub key: K,
}

/// A [`FetchState`] that only accepts the result of its latest request.
///
/// Older tickets are not cancelled, their results are simply refused by
/// [`FetchSlot::resolve`].
#[derive(Debug, Clone)]
pub struct FetchSlot<K, T> {
    next_seq: u64,
    current: Option<Ticket<K>>,
    state: FetchState<T>,
}

impl<K, T> Default for FetchSlot<K, T> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            current: None,
            state: FetchState::Idle,
        }
    }
}

impl<K: Copy + PartialEq, T> FetchSlot<K, T> {
    pub fn begin(&mut self, key: K) -> Ticket<K> {
        self.next_seq += 1;
        let ticket = Ticket {
            seq: self.next_seq,
            key,
        };
        self.current = Some(ticket);
        self.state = FetchState::Loading;
        ticket
    }

    pub fn is_current(&self, ticket: &Ticket<K>) -> bool {
        self.current.as_ref() == Some(ticket)
    }

    /// Applies `outcome` if `ticket` is the latest request. Returns whether it
    /// was applied.
    pub fn resolve(&mut self, ticket: &Ticket<K>, outcome: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = match outcome {
            Ok(data) => FetchState::Success(data),
            Err(message) => FetchState::Error(message),
        };
        true
    }

    /// Back to `Idle`; results still in flight become stale.
    pub fn reset(&mut self) {
        self.current = None;
        self.state = FetchState::Idle;
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }
}
