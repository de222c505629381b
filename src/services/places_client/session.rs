use uuid::Uuid;

/// Opaque billing session token. A cleared token is never reused; minting
/// always produces a distinct identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    fn mint() -> Self {
        SessionToken(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    NoActiveSession,
}

/// Holds at most one active token per client instance, grouping an
/// autocomplete-typing sequence and its terminal detail fetch under one
/// billable session.
#[derive(Debug, Default)]
pub struct SessionTokenManager {
    current: Option<SessionToken>,
}

impl SessionTokenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuses the held token, or mints one when idle. Called on every
    /// prediction fetch so a whole typing burst shares a session.
    pub fn attach_or_create(&mut self) -> SessionToken {
        self.current.get_or_insert_with(SessionToken::mint).clone()
    }

    /// Always mints a fresh token, discarding any held one.
    pub fn start_new(&mut self) -> SessionToken {
        let token = SessionToken::mint();
        self.current = Some(token.clone());
        token
    }

    pub fn active(&self) -> Option<&SessionToken> {
        self.current.as_ref()
    }

    /// A session is spent the moment its paired detail fetch succeeds.
    pub fn consume(&mut self) -> Option<SessionToken> {
        self.current.take()
    }

    pub fn clear(&mut self) -> ClearOutcome {
        match self.current.take() {
            Some(_) => ClearOutcome::Cleared,
            None => ClearOutcome::NoActiveSession,
        }
    }
}
