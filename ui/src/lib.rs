use leptos::prelude::*;
use leptos::task::spawn_local;

mod api;
mod components;
mod types;

use components::toast::{ToastContainer, Toasts};
use components::view_audience::ViewAudience;
use types::UiConfig;

#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(UiConfig::default());
    let toasts = Toasts::new(&config.get_untracked());
    provide_context(toasts);

    // Runtime settings from the host; built-in defaults stay if unavailable
    Effect::new(move || {
        spawn_local(async move {
            match api::get_ui_config().await {
                Ok(loaded) => {
                    log::info!("Segments will be sent to {}", loaded.endpoint);
                    toasts.configure(&loaded);
                    config.set(loaded);
                }
                Err(e) => log::warn!("Using default UI settings: {}", e),
            }
        });
    });

    view! {
        <div class="app">
            <ViewAudience config=config />
            <ToastContainer />
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
