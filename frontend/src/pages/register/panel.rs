use crate::{
    components::{
        error::{InlineErrorMessage, SuccessMessage},
        forms::TextField,
    },
    pages::register::{utils, view_model::use_register_view_model},
    state::session::Role,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let form = vm.form;
    let error = vm.error;
    let success = vm.success;
    let register_action = vm.register_action;
    let pending = register_action.pending();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = form.to_request();
        if let Err(msg) =
            utils::validate_registration(&request.username, &request.email, &request.password)
        {
            success.set(None);
            error.set(Some(msg));
            return;
        }
        error.set(None);
        register_action.dispatch(request);
    };

    let on_role_change = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<Role>() {
        Ok(role) => form.role.set(role),
        Err(err) => log::warn!("ignoring role selection: {}", err),
    };

    view! {
        <div class="flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Create an account"</h2>
                <form class="mt-8 space-y-4" on:submit=handle_submit>
                    <TextField
                        id="username"
                        label="Username"
                        autocomplete="username"
                        value=form.username.read_only()
                        on_input=Callback::new(move |v| form.username.set(v))
                    />
                    <TextField
                        id="email"
                        label="Email"
                        input_type="email"
                        autocomplete="email"
                        value=form.email.read_only()
                        on_input=Callback::new(move |v| form.email.set(v))
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        autocomplete="new-password"
                        value=form.password.read_only()
                        on_input=Callback::new(move |v| form.password.set(v))
                    />
                    <div>
                        <label for="role" class="block text-sm font-medium text-fg">"Role"</label>
                        <select
                            id="role"
                            name="role"
                            class="mt-1 block w-full px-3 py-2 border border-form-control-border rounded-md sm:text-sm"
                            on:change=on_role_change
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|role| {
                                    view! {
                                        <option
                                            value=role.as_str()
                                            selected=move || form.role.get() == role
                                        >
                                            {role.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <InlineErrorMessage error=error />
                    <SuccessMessage message=success />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Registering..." } else { "Register" }}
                    </button>
                    <p class="text-center text-sm text-fg-muted">
                        "Already registered? "
                        <a href="/login" class="font-medium text-action-primary-bg">"Sign in"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
