use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some) fallback=|| ()>
            <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded my-2">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_message() {
        let html = render_to_string(move || {
            let (error, _) = create_signal(Some("Invalid username or password".to_string()));
            view! { <InlineErrorMessage error=error /> }
        });
        assert!(html.contains("Invalid username or password"));
    }

    #[test]
    fn messages_hidden_when_empty() {
        let html = render_to_string(move || {
            let (empty, _) = create_signal(None::<String>);
            view! {
                <div>
                    <InlineErrorMessage error=empty />
                    <SuccessMessage message=empty />
                </div>
            }
        });
        assert!(!html.contains("status-error"));
        assert!(!html.contains("status-success"));
    }
}
