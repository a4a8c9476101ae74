use yew::prelude::*;
use log::info;

mod config;
mod lead {
    pub mod form;
    pub mod submission;
}
mod visibility {
    pub mod regions;
    pub mod observer;
}
mod components {
    pub mod benefit_card;
    pub mod icons;
    pub mod lead_form;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
