use crate::{
    api::{ApiClient, ApiError, RegisterRequest},
    state::session::Role,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<Role>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFormState {
    pub fn new() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            role: create_rw_signal(Role::Student),
        }
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.get_untracked().trim().to_string(),
            email: self.email.get_untracked().trim().to_string(),
            password: self.password.get_untracked(),
            role: self.role.get_untracked(),
        }
    }

    pub fn reset(&self) {
        self.username.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.role.set(Role::Student);
    }
}

#[derive(Clone)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub register_action: Action<RegisterRequest, Result<(), ApiError>>,
}

pub fn use_register_view_model() -> RegisterViewModel {
    let form = RegisterFormState::new();
    let error = create_rw_signal(None::<String>);
    let success = create_rw_signal(None::<String>);
    let client = use_context::<ApiClient>().unwrap_or_default();

    let register_action = create_action(move |request: &RegisterRequest| {
        let request = request.clone();
        let client = client.clone();
        async move { client.register(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.reset();
                    success.set(Some("Registration successful. You can now sign in.".into()));
                }
                Err(err) => {
                    log::warn!("registration failed: {}", err);
                    success.set(None);
                    error.set(Some(err.to_string()));
                }
            }
        }
    });

    RegisterViewModel {
        form,
        error,
        success,
        register_action,
    }
}
