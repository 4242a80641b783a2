use contracts::system::auth::UserInfo;
use contracts::system::roles::Role;
use leptos::prelude::*;

use super::api;
use super::storage::{self, LocalStorage};
use crate::navigation::registry::resolve_role;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

/// Plain session value; the reactive [`SessionContext`] wraps one of these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    session: Option<Session>,
}

impl SessionState {
    pub fn new(session: Option<Session>) -> Self {
        Self { session }
    }

    pub fn current_user(&self) -> Option<&UserInfo> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Parsed role of the signed-in user, `None` without a session or for an
    /// unrecognised role string.
    pub fn role(&self) -> Option<Role> {
        self.current_user().and_then(UserInfo::role)
    }

    /// Role navigation should use; Student when nothing better is known.
    pub fn current_role(&self) -> Role {
        resolve_role(self.role())
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn login(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn logout(&mut self) {
        self.session = None;
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new(state: SessionState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Session persisted by a previous visit, if any.
    pub fn restore() -> Self {
        let session = storage::load_session(&LocalStorage);
        if let Some(s) = &session {
            leptos::logging::log!("restored session for {} ({})", s.user.username, s.user.role);
        }
        Self::new(SessionState::new(session))
    }

    pub fn login(&self, session: Session) {
        storage::save_session(&LocalStorage, &session);
        self.state.update(|state| state.login(session));
    }

    pub fn logout(&self) {
        storage::clear_session(&LocalStorage);
        self.state.update(SessionState::logout);
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.current_user().cloned())
    }

    pub fn role(&self) -> Option<Role> {
        self.state.with(SessionState::role)
    }

    pub fn current_role(&self) -> Role {
        self.state.with(SessionState::current_role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Bearer token for API calls; read untracked.
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_string))
    }
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}

/// Signs in against the backend and stores the session. Returns the role the
/// caller should route to.
pub async fn do_login(
    session: SessionContext,
    username: String,
    password: String,
) -> Result<Option<Role>, String> {
    let response = api::login(username, password).await?;
    let role = response.user.role();
    if role.is_none() {
        log::warn!("unrecognised role '{}' from login", response.user.role);
    }
    session.login(Session {
        token: response.token,
        user: response.user,
    });
    Ok(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> UserInfo {
        UserInfo {
            id: "1".into(),
            username: "someone".into(),
            name: None,
            email: None,
            role: role.into(),
        }
    }

    #[test]
    fn no_session_defaults_to_student() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.current_user(), None);
        assert_eq!(state.role(), None);
        assert_eq!(state.current_role(), Role::Student);
    }

    #[test]
    fn login_exposes_identity_and_logout_clears_it() {
        let mut state = SessionState::default();
        state.login(Session {
            token: "abc".into(),
            user: user("DepartmentHead"),
        });
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("abc"));
        assert_eq!(state.current_role(), Role::DepartmentHead);

        state.logout();
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn unknown_role_still_authenticated_but_navigates_as_student() {
        let state = SessionState::new(Some(Session {
            token: "t".into(),
            user: user("Visitor"),
        }));
        assert!(state.is_authenticated());
        assert_eq!(state.role(), None);
        assert_eq!(state.current_role(), Role::Student);
    }
}
