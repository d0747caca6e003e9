use yew::prelude::*;

use crate::components::reveal_on_view::RevealOnView;
use crate::components::text::broken_lines;
use crate::content::{DepthLayer, LayerTier, DEPTH_BACKDROP_URL, DEPTH_TITLE};

fn layer_class(tier: LayerTier) -> &'static str {
    match tier {
        LayerTier::Surface => "depth-layer depth-surface",
        LayerTier::Structure => "depth-layer depth-structure",
        LayerTier::Essence => "depth-layer depth-essence",
    }
}

#[derive(Properties, PartialEq)]
pub struct DepthProps {
    pub layers: &'static [DepthLayer],
}

#[function_component]
pub fn Depth(props: &DepthProps) -> Html {
    let backdrop = format!("background-image: url('{}');", DEPTH_BACKDROP_URL);

    html! {
        <section class="depth">
            <div class="depth-backdrop" aria-hidden="true">
                <div class="depth-band depth-band-top"></div>
                <div class="depth-band depth-band-mid"></div>
                <div class="depth-band depth-band-low"></div>
                <div class="depth-photo" style={backdrop}></div>
            </div>

            <div class="depth-inner">
                <RevealOnView>
                    <h2 class="font-jp-old depth-title">{ DEPTH_TITLE }</h2>
                </RevealOnView>

                <div class="depth-stack">
                    { for props.layers.iter().enumerate().map(|(i, layer)| html! {
                        <RevealOnView key={layer.title} delay={(i as u32 + 1) * 100} class={layer_class(layer.tier)}>
                            <h3 class="font-en-serif">{ layer.title }</h3>
                            <p class="font-jp-serif">{ broken_lines(layer.body.iter().copied()) }</p>
                        </RevealOnView>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .depth {
                        position: relative;
                        padding: 8rem 0;
                        overflow: hidden;
                    }

                    .depth-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }

                    .depth-band {
                        position: absolute;
                        left: 0;
                        width: 100%;
                        height: 33.333%;
                    }

                    .depth-band-top {
                        top: 0;
                        background: linear-gradient(to bottom, var(--ink), var(--layer-mid));
                    }

                    .depth-band-mid {
                        top: 33.333%;
                        background: linear-gradient(to bottom, var(--layer-mid), var(--layer-low));
                    }

                    .depth-band-low {
                        top: 66.666%;
                        background: linear-gradient(to bottom, var(--layer-low), var(--ink));
                    }

                    .depth-photo {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        background-size: cover;
                        background-attachment: fixed;
                        filter: grayscale(100%);
                        mix-blend-mode: overlay;
                    }

                    .depth-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        text-align: center;
                    }

                    .depth-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                        margin: 0 0 5rem;
                    }

                    .depth-stack > * + * {
                        margin-top: 1rem;
                    }

                    .depth-layer {
                        max-width: 42rem;
                        margin-left: auto;
                        margin-right: auto;
                        padding: 2rem;
                    }

                    .depth-layer h3 {
                        font-size: 1.5rem;
                        margin: 0 0 0.5rem;
                    }

                    .depth-layer p {
                        font-size: 0.875rem;
                        margin: 0;
                    }

                    .depth-surface {
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(4px);
                        border: 1px solid #1f2937;
                    }

                    .depth-surface h3 { color: #6b7280; }
                    .depth-surface p { color: #9ca3af; }

                    .depth-structure {
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(12px);
                        border: 1px solid #374151;
                    }

                    .depth-structure h3 { color: #9ca3af; }
                    .depth-structure p { color: #d1d5db; }

                    .depth-essence {
                        background: rgba(197, 160, 89, 0.1);
                        backdrop-filter: blur(16px);
                        border: 1px solid rgba(197, 160, 89, 0.5);
                        box-shadow: 0 0 30px rgba(197, 160, 89, 0.1);
                        padding: 2.5rem;
                    }

                    .depth-essence.reveal-revealed {
                        transform: scale(1.05);
                    }

                    .depth-essence h3 {
                        font-size: 1.875rem;
                        color: var(--gold);
                        margin-bottom: 1rem;
                    }

                    .depth-essence p {
                        font-size: 1rem;
                        line-height: 1.625;
                        color: #f3f4f6;
                    }

                    @media (min-width: 768px) {
                        .depth {
                            padding: 12rem 0;
                        }

                        .depth-title {
                            font-size: 3.75rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
