use yew::prelude::*;

/// Fixed film-grain overlay drawn above the whole page.
#[function_component]
pub fn NoiseOverlay() -> Html {
    html! {
        <div class="noise-overlay" aria-hidden="true">
            <svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%">
                <filter id="noiseFilter">
                    <@{"feTurbulence"} type="fractalNoise" baseFrequency="0.8" numOctaves="3" stitchTiles="stitch" />
                </filter>
                <rect width="100%" height="100%" filter="url(#noiseFilter)" />
            </svg>
            <style>
                {r#"
                    .noise-overlay {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 50;
                        opacity: var(--noise-opacity);
                        mix-blend-mode: overlay;
                    }
                "#}
            </style>
        </div>
    }
}
