use crate::utils::storage::{BrowserSessionStore, MemorySessionStore, SessionStore, StorageError};
use leptos::*;
use serde::{Deserialize, Serialize};
use std::{fmt, rc::Rc, str::FromStr};
use thiserror::Error;

/// Portal roles. Stored and sent over the wire as `STUDENT`, `MENTOR`, `ADMIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Student,
    Mentor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Mentor, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Mentor => "MENTOR",
            Role::Admin => "ADMIN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Mentor => "Mentor",
            Role::Admin => "Admin",
        }
    }

    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Student => "/student/dashboard",
            Role::Mentor => "/mentor/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| UnknownRole(value.to_string()))
    }
}

/// Client-held credentials. No relation between `token` and `role` is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
        }
    }

    /// The token, with an empty string counting as absent.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }
}

#[derive(Clone)]
pub struct SessionContext {
    session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
    store: Rc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        let (session, set_session) = create_signal(store.load());
        Self {
            session,
            set_session,
            store,
        }
    }

    pub fn session(&self) -> ReadSignal<Session> {
        self.session
    }

    pub fn sign_in(&self, token: impl Into<String>, role: Role) -> Result<(), StorageError> {
        let session = Session::new(token, role);
        self.store.save(&session)?;
        log::info!("signed in as {}", role);
        self.set_session.set(session);
        Ok(())
    }

    /// Clears the store and resets the in-memory session even if the store fails.
    pub fn sign_out(&self) -> Result<(), StorageError> {
        let result = self.store.clear();
        if let Err(err) = &result {
            log::warn!("failed to clear stored session: {}", err);
        }
        self.set_session.set(Session::signed_out());
        log::info!("signed out");
        result
    }
}

#[component]
pub fn SessionProvider(
    #[prop(optional)] store: Option<Rc<dyn SessionStore>>,
    children: Children,
) -> impl IntoView {
    let store = store.unwrap_or_else(|| Rc::new(BrowserSessionStore));
    provide_context(SessionContext::new(store));
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(Rc::new(MemorySessionStore::default())))
}
