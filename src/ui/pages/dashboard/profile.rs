//! Seller profile: view and edit

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use super::PageHeader;
use crate::core::Identity;
use crate::core::api::{self, ProfileUpdate};
use crate::ui::common::{
    Button, ButtonVariant, ErrorMessage, FormField, SubmitButton, SuccessMessage,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

#[component]
fn ProfileRow(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    let empty = value.is_empty();
    view! {
        <div class="flex items-center gap-4 py-3 border-b border-theme last:border-0">
            <Icon name=icon class="w-5 h-5 text-theme-tertiary"/>
            <div class="flex-1">
                <div class="text-xs text-theme-tertiary">{label}</div>
                <div class="text-theme-primary" class:text-theme-tertiary=empty>
                    {if empty { "Not set".to_string() } else { value }}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardProfilePage() -> impl IntoView {
    let session = use_session_context();

    let editing = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let start_editing = move |_: ()| {
        let current = session
            .identity
            .with_untracked(|identity| identity.as_ref().map(ProfileUpdate::from_identity))
            .unwrap_or_default();
        name.set(current.name);
        phone_number.set(current.phone_number);
        location.set(current.location);
        error.set(None);
        success.set(None);
        editing.set(true);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let Some(current) = session.identity.get_untracked() else {
            return;
        };
        let Some(token) = session.token() else {
            session.sign_out();
            return;
        };
        let name_val = name.get_untracked().trim().to_string();
        if name_val.is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }
        let update = ProfileUpdate {
            name: name_val,
            phone_number: phone_number.get_untracked().trim().to_string(),
            location: location.get_untracked().trim().to_string(),
            ..ProfileUpdate::from_identity(&current)
        };

        loading.set(true);
        spawn_local(async move {
            let result = api::update_profile(&token, &current, &update).await;
            loading.set(false);
            match result {
                Ok(identity) => match session.refresh_profile(identity) {
                    Ok(()) => {
                        editing.set(false);
                        success.set(Some("Profile updated".to_string()));
                    }
                    Err(e) => {
                        leptos::logging::warn!("Failed to store profile: {}", e);
                        error.set(Some("Could not save your profile in this browser".to_string()));
                    }
                },
                Err(e) => error.set(Some(session.handle_api_error(&e))),
            }
        });
    };

    let details = move || {
        let identity = session.identity.get().unwrap_or_default();
        profile_rows(identity)
    };

    view! {
        <Title text="Profile - Vendoo"/>
        <div class="p-8 max-w-3xl">
            <PageHeader title="Profile" subtitle="Your personal details"/>

            <ErrorMessage error=error/>
            <SuccessMessage message=success/>

            <div class="rounded-xl border border-theme p-6 mt-4">
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <div>{details}</div>
                        <div class="mt-6">
                            <Button variant=ButtonVariant::Secondary icon=icons::USER on_click=Callback::new(start_editing)>
                                "Edit profile"
                            </Button>
                        </div>
                    }
                >
                    <form on:submit=on_submit class="space-y-5">
                        <FormField
                            label="Full name"
                            id="profile-name"
                            required=true
                            autocomplete="name"
                            value=name
                            on_input=Callback::new(move |v| name.set(v))
                        />
                        <FormField
                            label="Phone number"
                            id="profile-phone"
                            input_type="tel"
                            autocomplete="tel"
                            value=phone_number
                            on_input=Callback::new(move |v| phone_number.set(v))
                        />
                        <FormField
                            label="Location"
                            id="profile-location"
                            value=location
                            on_input=Callback::new(move |v| location.set(v))
                        />
                        <div class="flex gap-3">
                            <SubmitButton loading=loading loading_text="Saving..." class="flex-1".to_string()>
                                "Save"
                            </SubmitButton>
                            <Button
                                variant=ButtonVariant::Ghost
                                on_click=Callback::new(move |_| editing.set(false))
                                disabled=loading
                            >
                                "Cancel"
                            </Button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}

/// Icon, label and value for each displayed field
fn profile_fields(identity: Identity) -> [(&'static str, &'static str, String); 5] {
    [
        (icons::USER, "Full name", identity.name.unwrap_or_default()),
        (icons::MAIL, "Email address", identity.email.unwrap_or_default()),
        (icons::PHONE, "Phone number", identity.phone_number),
        (icons::LOCATION, "Location", identity.location),
        (icons::CHECK, "Member since", identity.member_since.unwrap_or_default()),
    ]
}

fn profile_rows(identity: Identity) -> impl IntoView {
    profile_fields(identity)
        .into_iter()
        .map(|(icon, label, value)| view! { <ProfileRow icon=icon label=label value=value/> })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShopStatus;

    #[test]
    fn test_profile_fields_show_missing_values_as_empty() {
        let mut identity = Identity::new("u-1", ShopStatus::HasShop);
        identity.name = Some("Esi Mensah".to_string());
        identity.location = "Accra".to_string();

        let fields = profile_fields(identity);
        let values: Vec<&str> = fields.iter().map(|(_, _, value)| value.as_str()).collect();
        assert_eq!(values, ["Esi Mensah", "", "", "Accra", ""]);
        assert_eq!(fields[1].1, "Email address");
    }
}
