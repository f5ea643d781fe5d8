use crate::{
    api::LoginRequest,
    components::{error::InlineErrorMessage, forms::TextField},
    pages::login::{utils, view_model::use_login_view_model},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;
    let error = vm.error;
    let login_action = vm.login_action;
    let pending = login_action.pending();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let username = form.username.get_untracked();
        let password = form.password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&username, &password) {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        login_action.dispatch(LoginRequest {
            username: username.trim().to_string(),
            password,
        });
    };

    view! {
        <div class="flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                    "Sign in to the Internship Portal"
                </h2>
                <form class="mt-8 space-y-4" on:submit=handle_submit>
                    <TextField
                        id="username"
                        label="Username"
                        autocomplete="username"
                        value=form.username.read_only()
                        on_input=Callback::new(move |v| form.username.set(v))
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        autocomplete="current-password"
                        value=form.password.read_only()
                        on_input=Callback::new(move |v| form.password.set(v))
                    />
                    <InlineErrorMessage error=error />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                    <p class="text-center text-sm text-fg-muted">
                        "No account yet? "
                        <a href="/register" class="font-medium text-action-primary-bg">"Register"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
