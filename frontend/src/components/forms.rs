use leptos::*;

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    value: ReadSignal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                autocomplete=autocomplete
                class="mt-1 appearance-none block w-full px-3 py-2 border border-form-control-border rounded-md text-fg focus:outline-none focus:ring-action-primary-focus sm:text-sm"
                prop:value=value
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}
