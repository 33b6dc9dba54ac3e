use leptos::*;

use myparking_boundary::ValidationErrors;

use super::ValidationError;

#[component]
pub fn InputField(
    label: &'static str,
    /// Name of the field in validation responses.
    name: &'static str,
    value: RwSignal<String>,
    errors: Signal<ValidationErrors>,
    disabled: Signal<bool>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
      <div class="mb-4">
        <label for=name class="block mb-1 text-gray-700">{ label }</label>
        <input
          id=name
          name=name
          type=input_type
          class="form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white border border-solid border-gray-300 rounded focus:border-kvm-blue focus:outline-none"
          prop:value=move || value.get()
          prop:disabled=move || disabled.get()
          on:input=move |ev| value.set(event_target_value(&ev))
        />
        <ValidationError errors field=name />
      </div>
    }
}
