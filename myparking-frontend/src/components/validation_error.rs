use leptos::*;

use myparking_boundary::ValidationErrors;

/// Lists the messages of a single form field.
#[component]
pub fn ValidationError(errors: Signal<ValidationErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|errors| {
            errors
                .field(field)
                .iter()
                .map(|msg| view! { <p class="mt-1 text-sm text-red-700">{ msg.clone() }</p> })
                .collect_view()
        })
    }
}
