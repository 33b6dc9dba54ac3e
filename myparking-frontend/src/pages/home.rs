use leptos::*;

use crate::{components::*, hooks::use_session, Page};

#[component]
pub fn Home() -> impl IntoView {
    let logged_in = use_session().is_logged_in();

    view! {
      <section>
        <div class="container p-6 mx-auto text-center">
          <h2 class="text-3xl font-bold tracking-tight text-gray-900 sm:text-4xl">"myParking"</h2>
          <p class="mt-4 text-gray-600">"Start and stop parking of your vehicles in priced zones."</p>
          <div class="mt-8 space-x-4">
          {
            if logged_in {
                view! {
                  <NamedLink page=Page::OrderParking class=BUTTON_CLASS>"Order parking"</NamedLink>
                }.into_view()
            } else {
                view! {
                  <NamedLink page=Page::Login class=BUTTON_CLASS>"Login"</NamedLink>
                  <NamedLink page=Page::Register class=SECONDARY_BUTTON_CLASS>"Register"</NamedLink>
                }.into_view()
            }
          }
          </div>
        </div>
      </section>
    }
}
