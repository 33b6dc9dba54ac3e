use leptos::*;

use super::NamedLink;
use crate::Page;

const MENU_ITEM_CLASS: &str = "hover:text-gray-600";

#[component]
pub fn NavBar<F>(logged_in: Signal<bool>, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
      <nav class="relative container mx-auto p-6">
        <div class="flex items-center justify-between">

          // Logo
          <div class="pt-2 font-bold">
            <NamedLink page=Page::Home exact=true>"myParking"</NamedLink>
          </div>

          // Menu items
          <div class="hidden space-x-6 md:flex">
            <Menu logged_in on_logout />
          </div>

          // Hamburger Icon
          <button
            class = {move ||
              if menu_open.get() {
                "open block hamburger md:hidden focus:outline-none"
              } else {
                "block hamburger md:hidden focus:outline-none"
              }
            }
            on:click = move |_| set_menu_open.update(|s|*s = !*s)
          >
            <span class="hamburger-top"></span>
            <span class="hamburger-middle"></span>
            <span class="hamburger-bottom"></span>
          </button>
        </div>

        // Mobile Menu
        <div class="md:hidden">
          <menu
            class = {move ||
              if menu_open.get() {
                "absolute flex flex-col items-center self-end py-8 mt-10 space-y-6 font-bold bg-white sm:w-auto sm:self-center left-6 right-6 drop-shadow-md"
              } else {
                "hidden absolute flex-col items-center self-end py-8 mt-10 space-y-6 font-bold bg-white sm:w-auto sm:self-center left-6 right-6 drop-shadow-md"
              }
            }>
            <Menu logged_in on_logout />
          </menu>
        </div>
      </nav>
    }
}

#[component]
fn Menu<F>(logged_in: Signal<bool>, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    move || {
        if logged_in.get() {
            view! { <UserMenuItems on_logout /> }.into_view()
        } else {
            view! { <PublicMenuItems /> }.into_view()
        }
    }
}

#[component]
fn UserMenuItems<F>(on_logout: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    view! {
      <MenuItem page = Page::Vehicles label = "Vehicles" />
      <MenuItem page = Page::ActiveParkings label = "Parkings" />
      <MenuItem page = Page::ParkingHistory label = "History" />
      <MenuItem page = Page::EditProfile label = "Profile" />
      <MenuItem page = Page::ChangePassword label = "Change password" />
      <a href="#" class=MENU_ITEM_CLASS on:click = move |ev| {
          ev.prevent_default();
          on_logout();
      }>
        "Logout"
      </a>
    }
}

#[component]
fn PublicMenuItems() -> impl IntoView {
    view! {
      <MenuItem page = Page::Login label = "Login" />
      <MenuItem page = Page::Register label = "Register" />
    }
}

#[component]
fn MenuItem(page: Page, label: &'static str) -> impl IntoView {
    view! {
      <NamedLink page exact=true class=MENU_ITEM_CLASS>{ label }</NamedLink>
    }
}
