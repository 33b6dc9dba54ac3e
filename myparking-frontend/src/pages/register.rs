use leptos::{ev, *};

use myparking_boundary::NewUser;

use crate::{
    components::*,
    hooks::{use_auth, use_navigator, use_session, AuthHook, StateSignals},
    Page,
};

#[component]
pub fn Register() -> impl IntoView {
    let AuthHook { state, register, .. } = use_auth(use_session(), use_navigator());

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let password_confirmation = create_rw_signal(String::new());

    let errors = state.errors();
    let disabled = state.loading();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let new_user = NewUser {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            password_confirmation: password_confirmation.get_untracked(),
        };
        register.dispatch(new_user);
        password.set(String::new());
        password_confirmation.set(String::new());
    };

    view! {
      <Card title = "Register">
        <form on:submit=on_submit>
          <FailureNotice failure = state.failure() />
          <InputField label = "Name" name = "name" value = name errors disabled />
          <InputField label = "Email" name = "email" input_type = "email" value = email errors disabled />
          <InputField label = "Password" name = "password" input_type = "password" value = password errors disabled />
          <InputField
            label = "Confirm password"
            name = "password_confirmation"
            input_type = "password"
            value = password_confirmation
            errors
            disabled
          />
          <button type="submit" class=BUTTON_CLASS prop:disabled = move || disabled.get()>
            "Register"
          </button>
        </form>
        <div class="flex items-center justify-between pt-6">
          <p class="mb-0 mr-2 text-gray-600">"You already have an account?"</p>
          <NamedLink page = Page::Login class = SECONDARY_BUTTON_CLASS>"Login"</NamedLink>
        </div>
      </Card>
    }
}
