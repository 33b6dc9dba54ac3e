use anyhow::anyhow;
use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use myparking_frontend_api::Session;

mod components;
mod hooks;
mod pages;
pub mod routes;

use self::{components::*, hooks::use_navigator, pages::*};

pub use self::routes::Page;

const DEFAULT_API_URL: &str = "/api/v1";

/// Base URL of the REST API, configurable at compile time.
const API_URL: &str = match option_env!("MYPARKING_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    log::debug!("Using API at {API_URL}");
    let session = Session::browser(API_URL);
    provide_context(session);

    view! {
      <Router>
        <Shell />
      </Router>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let session = hooks::use_session();

    // -- signals -- //

    let logged_in = create_rw_signal(session.is_logged_in());
    log::debug!("User is logged in: {}", logged_in.get_untracked());

    // -- observers -- //

    let navigate = use_navigator();
    session.on_change(move |is_logged_in| {
        logged_in.set(is_logged_in);
        if !is_logged_in {
            log::info!("Session terminated: redirect to login");
            navigate(Page::Login.path());
        }
    });

    // -- actions -- //

    let logout = hooks::use_logout(session);

    // -- callbacks -- //

    let on_logout = move || {
        logout.dispatch(());
    };

    view! {
      <NavBar logged_in = logged_in.into() on_logout />
      <main>
        <Routes>
          <Route path=Page::Home.path() view=Home />
          <Route path=Page::Register.path() view=Register />
          <Route path=Page::Login.path() view=Login />
          <Route path=Page::EditProfile.path() view=EditProfile />
          <Route path=Page::ChangePassword.path() view=ChangePassword />
          <Route path=Page::Vehicles.path() view=VehiclesList />
          <Route path=Page::CreateVehicle.path() view=EditVehicle />
          <Route path=Page::EditVehicle.path() view=EditVehicle />
          <Route path=Page::ActiveParkings.path() view=ActiveParkings />
          <Route path=Page::OrderParking.path() view=OrderParking />
          <Route path=Page::ParkingHistory.path() view=ParkingHistory />
          <Route path=Page::ParkingDetails.path() view=ParkingDetails />
        </Routes>
      </main>
    }
}

/// Mounts the application into the `#app` element.
pub fn run() -> anyhow::Result<()> {
    let app_container = document()
        .get_element_by_id("app")
        .ok_or_else(|| anyhow!("Missing app container element"))?
        .dyn_into()
        .map_err(|_| anyhow!("App container is not an HTML element"))?;
    mount_to(app_container, || view! { <App /> });
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn entry_point_provides_app_container() {
        let html = include_str!("../index.html");
        assert!(html.contains(r#"<div id="app"></div>"#));
        assert!(html.contains(r#"data-bin="myparking-frontend""#));
    }
}
