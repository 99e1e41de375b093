// web_app/session.rs - Session store
//
// Owns the bearer token and the profile resolved from it. Exactly one
// instance is created at the app root and shared through context; it is
// the only place that touches token storage.

use std::sync::Arc;

use leptos::prelude::*;

use crate::web_app::api::{self, ApiClient, ApiError};
use crate::web_app::model::UserProfile;
use crate::web_app::requests::RequestSequence;
use crate::web_app::storage;

/// Bearer token plus the profile it resolves to.
///
/// The token signal is seeded from storage on creation, so a reload
/// lands back in the same authenticated session without re-prompting.
/// The user stays `None` until resolution succeeds.
#[derive(Clone)]
pub struct Session {
    client: ApiClient,
    token: RwSignal<String>,
    user: RwSignal<Option<UserProfile>>,
    resolutions: Arc<RequestSequence>,
}

impl Session {
    /// Re-hydrate from any previously persisted token.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            token: RwSignal::new(storage::load_token()),
            user: RwSignal::new(None),
            resolutions: Arc::new(RequestSequence::new()),
        }
    }

    /// Create the session, install profile resolution, and share it
    /// with the component tree.
    pub fn provide(client: ApiClient) -> Self {
        let session = Self::new(client);
        session.install_resolver();
        provide_context(session.clone());
        session
    }

    /// Current token value, read outside the reactive graph.
    ///
    /// Imperative callers (the admin submit handler) want the value at
    /// the moment of the click, not a subscription.
    pub fn token(&self) -> String {
        self.token.get_untracked()
    }

    /// Reactive view of the resolved profile
    pub fn user(&self) -> Signal<Option<UserProfile>> {
        self.user.read_only().into()
    }

    /// Whether the resolved profile may see admin-only UI.
    ///
    /// A UX convenience only; the backend stays the authority and its
    /// rejections are surfaced regardless of this value.
    pub fn is_admin(&self) -> Signal<bool> {
        let user = self.user;
        Signal::derive(move || user.get().is_some_and(|profile| profile.is_admin()))
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token is persisted and profile resolution re-runs
    /// for the new value; on failure prior session state is untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let token = api::auth::login(&self.client, email, password).await?;
        self.commit_token(token);
        Ok(())
    }

    /// Drop the session; safe to call repeatedly.
    ///
    /// Clears storage and in-memory state synchronously and invalidates
    /// any resolution still in flight, so a stale profile can never
    /// reappear after logout.
    pub fn logout(&self) {
        storage::clear_token();
        self.resolutions.supersede_all();
        self.token.set(String::new());
        self.user.set(None);
    }

    /// Persist and adopt a freshly issued token.
    pub(crate) fn commit_token(&self, token: String) {
        storage::store_token(&token);
        self.token.set(token);
    }

    /// Re-resolve the profile whenever the token changes.
    ///
    /// Runs for the initial value too. An empty token short-circuits to
    /// unauthenticated without a network call; a superseded resolution
    /// is discarded unseen.
    fn install_resolver(&self) {
        let session = self.clone();
        Effect::new(move || {
            let token = session.token.get();
            let ticket = session.resolutions.issue();

            if !needs_resolution(&token) {
                session.user.set(None);
                return;
            }

            let session = session.clone();
            leptos::task::spawn_local(async move {
                let resolved = match api::auth::fetch_profile(&session.client, &token).await {
                    Ok(profile) => profile,
                    Err(err) => {
                        tracing::error!("profile resolution failed: {err}");
                        None
                    }
                };
                if session.resolutions.is_latest(ticket) {
                    session.user.set(resolved);
                }
            });
        });
    }
}

/// Only a non-empty token is worth a round trip to `/me`.
pub(crate) fn needs_resolution(token: &str) -> bool {
    !token.is_empty()
}

/// Session shared by the app root; panics if called outside it.
#[cfg(feature = "csr")]
pub fn use_session() -> Session {
    expect_context::<Session>()
}
