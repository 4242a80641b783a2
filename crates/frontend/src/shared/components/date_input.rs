use leptos::prelude::*;

/// Native date picker bound to a `yyyy-mm-dd` string; empty when unset.
#[component]
pub fn DateInput(
    value: RwSignal<String>,
    /// Earliest selectable date, `yyyy-mm-dd`.
    #[prop(optional, into)]
    min: Option<String>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            min=min
            disabled=disabled
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
