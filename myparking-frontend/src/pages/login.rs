use leptos::{ev, *};

use myparking_boundary::Credentials;

use crate::{
    components::*,
    hooks::{use_auth, use_navigator, use_session, AuthHook, StateSignals},
    Page,
};

#[component]
pub fn Login() -> impl IntoView {
    let AuthHook { state, login, .. } = use_auth(use_session(), use_navigator());

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let remember = create_rw_signal(false);

    let errors = state.errors();
    let disabled = state.loading();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember: remember.get_untracked(),
        };
        login.dispatch(credentials);
        password.set(String::new());
    };

    view! {
      <Card title = "Login">
        <form on:submit=on_submit>
          <FailureNotice failure = state.failure() />
          <InputField label = "Email" name = "email" input_type = "email" value = email errors disabled />
          <InputField label = "Password" name = "password" input_type = "password" value = password errors disabled />
          <div class="mb-4">
            <label class="text-gray-700">
              <input
                type = "checkbox"
                class = "mr-2"
                prop:checked = move || remember.get()
                on:change = move |ev| remember.set(event_target_checked(&ev))
              />
              "Remember me"
            </label>
          </div>
          <button type="submit" class=BUTTON_CLASS prop:disabled = move || disabled.get()>
            "Log in"
          </button>
        </form>
        <div class="flex items-center justify-between pt-6">
          <p class="mb-0 mr-2 text-gray-600">"Don't have an account?"</p>
          <NamedLink page = Page::Register class = SECONDARY_BUTTON_CLASS>"Register"</NamedLink>
        </div>
      </Card>
    }
}
