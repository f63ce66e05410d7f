use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

fn field_error(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| {
            view! {
                <div class="flex items-center text-sm text-theme-error">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

fn has_error(error: Option<Signal<Option<String>>>) -> bool {
    error.and_then(|e| e.get()).is_some()
}

/// Labelled input
#[component]
pub fn FormField(
    label: &'static str,
    /// Input id, also used for the label's `for`
    id: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = "off")]
    autocomplete: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class="input-base"
                class:border-red-500=move || has_error(error)
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {field_error(error)}
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    label: &'static str,
    id: &'static str,
    #[prop(default = "current-password")]
    autocomplete: &'static str,
    #[prop(default = "Enter your password")]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="space-y-1.5">
            <label for=id class="label">{label}</label>
            <div class="relative">
                <input
                    id=id
                    name=id
                    type=move || if visible.get() { "text" } else { "password" }
                    class="input-base pr-10"
                    class:border-red-500=move || has_error(error)
                    placeholder=placeholder
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    title=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || {
                        if visible.get() {
                            view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5"/> }
                        } else {
                            view! { <Icon name=icons::EYE class="h-5 w-5"/> }
                        }
                    }}
                </button>
            </div>
            {field_error(error)}
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    label: &'static str,
    id: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 3)]
    rows: u32,
    /// Shows a `len/max` counter when set
    #[prop(optional)]
    max_length: Option<usize>,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                id=id
                name=id
                class="input-base resize-none"
                class:border-red-500=move || has_error(error)
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {max_length.map(|max| view! {
                <div class="text-xs text-theme-tertiary text-right">
                    {move || format!("{}/{}", value.get().trim().chars().count(), max)}
                </div>
            })}
            {field_error(error)}
        </div>
    }
}

/// Select field whose options may arrive later
#[component]
pub fn SelectField(
    label: &'static str,
    id: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=id class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <select
                id=id
                name=id
                class="select-base"
                class:border-red-500=move || has_error(error)
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| {
                        let option_value = val.clone();
                        view! {
                            <option value=option_value selected=move || value.get() == val>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
            {field_error(error)}
        </div>
    }
}
