use leptos::prelude::*;

/// Text input with label, bound to a value signal
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Enter key callback
    #[prop(optional, into)]
    on_enter: Option<Callback<()>>,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <input
                type=input_type
                class="input-base"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        if let Some(cb) = on_enter {
                            cb.run(());
                        }
                    }
                }
                disabled=disabled
            />
        </div>
    }
}
