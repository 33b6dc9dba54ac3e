use leptos::{ev, *};

use myparking_boundary::UpdatePassword;

use crate::{
    components::*,
    hooks::{use_api, use_password, PasswordHook, StateSignals},
};

#[component]
pub fn ChangePassword() -> impl IntoView {
    let PasswordHook { state, update } = use_password(use_api());

    let current_password = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let password_confirmation = create_rw_signal(String::new());

    let errors = state.errors();
    let disabled = state.loading();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        update.dispatch(UpdatePassword {
            current_password: current_password.get_untracked(),
            password: password.get_untracked(),
            password_confirmation: password_confirmation.get_untracked(),
        });
        for field in [current_password, password, password_confirmation] {
            field.set(String::new());
        }
    };

    view! {
      <Card title = "Change password">
        <form on:submit=on_submit>
          <StatusNotice status = state.status() />
          <FailureNotice failure = state.failure() />
          <InputField
            label = "Current password"
            name = "current_password"
            input_type = "password"
            value = current_password
            errors
            disabled
          />
          <InputField label = "New password" name = "password" input_type = "password" value = password errors disabled />
          <InputField
            label = "New password confirmation"
            name = "password_confirmation"
            input_type = "password"
            value = password_confirmation
            errors
            disabled
          />
          <button type="submit" class=BUTTON_CLASS prop:disabled = move || disabled.get()>
            "Change password"
          </button>
        </form>
      </Card>
    }
}
