use leptos::*;
use leptos_router::*;

use crate::Page;

const ACTIVE_CLASS: &str = "text-kvm-blue font-bold";

/// Link to a named route that is highlighted while the route is active.
#[component]
pub fn NamedLink(
    page: Page,
    /// Value of the `:id` placeholder.
    #[prop(optional)]
    id: Option<u64>,
    /// Only highlight the link if the location matches exactly.
    #[prop(optional)]
    exact: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let href = match id {
        Some(id) => page.with_id(id),
        None => page.path().to_owned(),
    };
    view! {
      <A href exact class active_class=ACTIVE_CLASS>
        { children() }
      </A>
    }
}
