//! Inline error and success notices

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

#[derive(Clone, Copy)]
enum Tone {
    Error,
    Success,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Error => "error-message",
            Tone::Success => "success-message",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Error => icons::ALERT_CIRCLE,
            Tone::Success => icons::CHECK,
        }
    }

    fn role(self) -> &'static str {
        match self {
            Tone::Error => "alert",
            Tone::Success => "status",
        }
    }
}

fn notice(tone: Tone, text: impl IntoView + 'static) -> impl IntoView {
    view! {
        <div class=tone.class() role=tone.role()>
            <Icon name=tone.icon() class="icon-text"/>
            <span>{text}</span>
        </div>
    }
}

fn optional_notice(tone: Tone, text: Signal<Option<String>>) -> impl IntoView {
    move || text.get().map(|text| notice(tone, text))
}

/// Hidden while `error` is `None`
#[component]
pub fn ErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    optional_notice(Tone::Error, error)
}

/// Hidden while `message` is `None`
#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    optional_notice(Tone::Success, message)
}

#[component]
pub fn ErrorMessageStatic(message: String) -> impl IntoView {
    notice(Tone::Error, message)
}
