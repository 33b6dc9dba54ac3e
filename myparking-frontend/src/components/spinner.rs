use leptos::*;

#[component]
pub fn Spinner(loading: Signal<bool>) -> impl IntoView {
    view! {
      <Show when=move || loading.get()>
        <div class="flex justify-center py-4 text-gray-500" aria-busy="true">"Loading..."</div>
      </Show>
    }
}
