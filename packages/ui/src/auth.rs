//! Session context.
//!
//! [`AuthProvider`] sits near the top of the tree and owns the signed-in
//! state. On mount it replays the stored token against the backend, so a
//! page reload lands the user back where they were without re-entering
//! credentials. Until that check resolves, `loading` stays true and the
//! router holds off on any redirect.

use api::{ApiClient, AuthResponse, User};
use dioxus::prelude::*;
use store::{KvStore, SessionStore};

use crate::services::{use_api, use_session};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the stored token has been checked against the backend.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn logged_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }
}

pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provides [`AuthState`] as context and kicks off the session restore.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_api();
    let session = use_session();
    let mut auth_state = use_signal(AuthState::default);

    let _restore = use_resource(move || {
        let api = api.clone();
        let session = session.clone();
        async move {
            auth_state.set(restore_session(&api, &session).await);
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Rehydrate the session from the stored token.
///
/// No stored token short-circuits to logged out. A token the backend rejects
/// is wiped along with the cached user, so the next load starts clean.
pub async fn restore_session<S: KvStore>(api: &ApiClient, session: &SessionStore<S>) -> AuthState {
    let Some(token) = session.token() else {
        return AuthState::logged_out();
    };
    api.set_token(Some(token));
    match api.current_user().await {
        Ok(user) => {
            session.cache_user(&user);
            AuthState {
                user: Some(user),
                loading: false,
            }
        }
        Err(err) => {
            tracing::warn!("session restore failed: {err}");
            sign_out(api, session)
        }
    }
}

/// Persist a login or registration response and hand back the signed-in state.
pub fn apply_login<S: KvStore>(
    api: &ApiClient,
    session: &SessionStore<S>,
    resp: AuthResponse,
) -> AuthState {
    session.set_token(&resp.token);
    session.cache_user(&resp.user);
    api.set_token(Some(resp.token));
    AuthState {
        user: Some(resp.user),
        loading: false,
    }
}

/// Drop the session everywhere: stored token, cached user and the client's
/// auth header. Shared by logout and a failed restore.
pub fn sign_out<S: KvStore>(api: &ApiClient, session: &SessionStore<S>) -> AuthState {
    session.clear();
    api.set_token(None);
    AuthState::logged_out()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;
    use store::MemoryStore;

    fn fixture() -> (ApiClient, SessionStore<MemoryStore>) {
        (
            ApiClient::new("http://localhost:8080/api"),
            SessionStore::new(MemoryStore::new()),
        )
    }

    fn some_user() -> User {
        User {
            id: 7,
            username: "vasya".into(),
            full_name: Some("Vasily Petrov".into()),
            role: Role::Foreman,
            is_active: true,
        }
    }

    #[test]
    fn login_fills_token_store_client_and_state() {
        let (api, session) = fixture();
        let state = apply_login(
            &api,
            &session,
            AuthResponse {
                token: "tok-1".into(),
                user: some_user(),
            },
        );

        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert_eq!(api.token().as_deref(), Some("tok-1"));
        assert_eq!(session.cached_user::<User>().unwrap().username, "vasya");
        assert_eq!(state.user.unwrap().id, 7);
        assert!(!state.loading);
    }

    #[test]
    fn rejected_token_leaves_no_trace() {
        let (api, session) = fixture();
        apply_login(
            &api,
            &session,
            AuthResponse {
                token: "stale".into(),
                user: some_user(),
            },
        );

        // Same transition restore_session takes when the backend says 401.
        let state = sign_out(&api, &session);

        assert!(session.token().is_none());
        assert!(session.cached_user::<User>().is_none());
        assert!(api.token().is_none());
        assert!(state.user.is_none());
        assert!(!state.loading);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn restore_without_token_resolves_logged_out() {
        let (api, session) = fixture();
        let state = restore_session(&api, &session).await;
        assert!(state.user.is_none());
        assert!(!state.loading);
        assert!(api.token().is_none());
    }
}
