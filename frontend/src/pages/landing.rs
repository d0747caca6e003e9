use yew::prelude::*;
use log::info;

use crate::components::noise::NoiseOverlay;
use crate::content::{CASE_STUDIES, CORE_METHODS, DEPTH_LAYERS, FLOW_STEPS, THINKING_STEPS};
use crate::sections::{
    case_studies::CaseStudies,
    contact::Contact,
    depth::Depth,
    hero::Hero,
    methodology::Methodology,
    philosophy::Philosophy,
    vision::VisionMethod,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    info!("Rendering landing page");

    html! {
        <div class="landing-page">
            <NoiseOverlay />

            // 01. First view
            <Hero />

            // 02. Philosophy
            <Philosophy />

            // 03. Thinking OS
            <Methodology steps={&THINKING_STEPS[..]} />

            // 04. Three layers
            <Depth layers={&DEPTH_LAYERS[..]} />

            // 05. Project logs
            <CaseStudies cases={&CASE_STUDIES[..]} />

            // 06. Vision & method
            <VisionMethod flow={&FLOW_STEPS[..]} methods={&CORE_METHODS[..]} />

            // 07. Invitation
            <Contact />

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: var(--ink);
                        color: var(--paper);
                        font-family: serif;
                        overflow-x: hidden;
                    }
                "#}
            </style>
        </div>
    }
}
