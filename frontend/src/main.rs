use yew::prelude::*;
use log::info;

mod config;
mod content;
mod observer;
mod reveal;
mod theme;

mod components {
    pub mod arrow;
    pub mod noise;
    pub mod reveal_on_view;
    pub mod text;
}
mod sections {
    pub mod case_studies;
    pub mod contact;
    pub mod depth;
    pub mod hero;
    pub mod methodology;
    pub mod philosophy;
    pub mod vision;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use theme::{GlobalStyles, THEME};

#[function_component]
fn App() -> Html {
    html! {
        <>
            <GlobalStyles theme={&THEME} />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
