use crate::{
    api::{ApiClient, ApiError, LoginRequest, LoginResponse},
    state::session::{use_session, Role, SessionContext},
    utils::storage::StorageError,
};
use leptos::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Could not save the session: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<Role, LoginError>>,
}

/// Stores the session from a login response. Nothing is stored when the role is unknown.
pub fn store_login(response: &LoginResponse, ctx: &SessionContext) -> Result<Role, LoginError> {
    let (token, role) = response.credentials()?;
    ctx.sign_in(token, role)?;
    Ok(role)
}

pub async fn login_and_store(
    request: LoginRequest,
    client: &ApiClient,
    ctx: &SessionContext,
) -> Result<Role, LoginError> {
    let response = client.login(request).await?;
    store_login(&response, ctx)
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::new();
    let error = create_rw_signal(None::<String>);
    let ctx = use_session();
    let client = use_context::<ApiClient>().unwrap_or_default();

    let login_action = create_action(move |request: &LoginRequest| {
        let request = request.clone();
        let client = client.clone();
        let ctx = ctx.clone();
        async move { login_and_store(request, &client, &ctx).await }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(role) => {
                    error.set(None);
                    form.password.set(String::new());
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(role.dashboard_path());
                    }
                }
                Err(err) => {
                    log::warn!("login failed: {}", err);
                    error.set(Some(err.to_string()));
                }
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
