use leptos::{ev, *};

use myparking_boundary::Profile;

use crate::{
    components::*,
    hooks::{use_api, use_profile, ProfileHook, StateSignals},
};

#[component]
pub fn EditProfile() -> impl IntoView {
    let ProfileHook { state, update } = use_profile(use_api());

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());

    let errors = state.errors();
    let disabled = state.loading();

    // Fires only when the fetched profile changes.
    let profile = create_memo(move |_| state.with(|s| s.data.clone()));
    create_effect(move |_| {
        let Profile {
            name: fetched_name,
            email: fetched_email,
        } = profile.get();
        name.set(fetched_name);
        email.set(fetched_email);
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        update.dispatch(Profile {
            name: name.get_untracked(),
            email: email.get_untracked(),
        });
    };

    view! {
      <Card title = "Edit profile">
        <form on:submit=on_submit>
          <StatusNotice status = state.status() />
          <FailureNotice failure = state.failure() />
          <InputField label = "Name" name = "name" value = name errors disabled />
          <InputField label = "Email" name = "email" input_type = "email" value = email errors disabled />
          <button type="submit" class=BUTTON_CLASS prop:disabled = move || disabled.get()>
            "Update profile"
          </button>
        </form>
      </Card>
    }
}
