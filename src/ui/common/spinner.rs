//! Loading indicators

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn icon_class(self) -> &'static str {
        match self {
            SpinnerSize::Small => "icon-spin spinner-sm",
            SpinnerSize::Medium => "icon-spin spinner-md",
            SpinnerSize::Large => "icon-spin spinner-lg",
        }
    }
}

#[component]
pub fn Spinner(
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Text under the spinner; also read out by screen readers
    #[prop(default = "")]
    label: &'static str,
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let announced = if label.is_empty() { "Loading..." } else { label };

    view! {
        <div
            class="spinner-container text-accent-primary"
            class:spinner-centered=centered
            role="status"
            aria-live="polite"
        >
            <Icon name=icons::SPINNER class=size.icon_class()/>
            <span class="sr-only">{announced}</span>
            {(!label.is_empty()).then(|| view! { <div class="spinner-label">{label}</div> })}
        </div>
    }
}

/// Spinner filling the page body, shown while a route's data is pending
#[component]
pub fn LoadingSpinner(
    #[prop(default = "")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="min-h-[50vh] flex items-center justify-center">
            <Spinner size=SpinnerSize::Large label=message centered=true/>
        </div>
    }
}
