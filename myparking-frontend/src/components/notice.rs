use leptos::*;

#[component]
pub fn FailureNotice(failure: Signal<Option<String>>) -> impl IntoView {
    move || {
        failure.get().map(|msg| {
            view! {
              <div class="mb-4 p-3 rounded bg-red-100 text-red-700" role="alert">{ msg }</div>
            }
        })
    }
}

#[component]
pub fn StatusNotice(status: Signal<Option<String>>) -> impl IntoView {
    move || {
        status.get().map(|msg| {
            view! {
              <div class="mb-4 p-3 rounded bg-green-100 text-green-700" role="status">{ msg }</div>
            }
        })
    }
}
