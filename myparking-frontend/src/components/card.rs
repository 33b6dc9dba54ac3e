use leptos::*;

pub const BUTTON_CLASS: &str = "inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md bg-kvm-blue-light hover:bg-kvm-blue hover:text-white focus:outline-none transition duration-150 ease-in-out";
pub const SECONDARY_BUTTON_CLASS: &str = "inline-block px-6 py-2 border-2 border-kvm-raspberry-light text-kvm-raspberry font-medium text-xs leading-tight uppercase rounded hover:border-kvm-raspberry focus:outline-none transition duration-150 ease-in-out";

#[component]
pub fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
      <section>
        <div class="container py-12 px-6 mx-auto">
          <div class="flex justify-center items-center flex-wrap h-full g-6 text-gray-800">
            <div class="w-full xl:w-8/12">
              <div class="block bg-white shadow-lg rounded-lg md:p-12 p-6">
                <h4 class="text-xl font-semibold mb-8">{ title }</h4>
                { children() }
              </div>
            </div>
          </div>
        </div>
      </section>
    }
}
