use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let base = format!("btn-base {} {}", variant.class(), size.class());
    if extra.is_empty() {
        base
    } else {
        format!("{} {}", base, extra)
    }
}

/// Click button with variants and sizes
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    on_click: Callback<()>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Icon name to show before the text
    #[prop(optional)]
    icon: Option<&'static str>,
    #[prop(default = String::new())]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_classes(variant, size, &class)
            on:click=move |_| on_click.run(())
            disabled=move || disabled.get()
        >
            {icon.map(|name| view! { <Icon name=name class="icon-btn"/> })}
            {children()}
        </button>
    }
}

/// Form submit button that shows a spinner while `loading` is set
#[component]
pub fn SubmitButton(
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Text shown while loading
    #[prop(default = "Please wait...")]
    loading_text: &'static str,
    #[prop(default = String::from("w-full"))]
    class: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=button_classes(ButtonVariant::Primary, ButtonSize::Medium, &class)
            disabled=move || loading.get() || disabled.get()
        >
            <Show when=move || loading.get() fallback=move || children()>
                <span class="btn-spinner">
                    <Icon name=icons::SPINNER class="icon-spin"/>
                </span>
                {loading_text}
            </Show>
        </button>
    }
}
