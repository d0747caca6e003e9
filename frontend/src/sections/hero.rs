use yew::prelude::*;

use crate::components::text::broken_lines;
use crate::content::{HERO_HEADLINE, HERO_LEAD, HERO_VERTICAL};

#[function_component]
pub fn Hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-inner">
                <div class="hero-headline">
                    <h1 class="font-jp-old">
                        <span class="hero-line">{ HERO_HEADLINE[0] }</span>
                        <span class="hero-line hero-accent">{ HERO_HEADLINE[1] }</span>
                    </h1>
                </div>

                <div class="hero-side">
                    <div class="vertical-text hero-vertical font-jp-serif">
                        { broken_lines(HERO_VERTICAL) }
                    </div>
                    <div class="hero-lead font-en-serif">
                        <p>{ broken_lines(HERO_LEAD) }</p>
                    </div>
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-line"></div>
                <span class="font-en-serif">{"SCROLL"}</span>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        box-sizing: border-box;
                    }

                    .hero-inner {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 72rem;
                        height: 100%;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }

                    .hero-headline {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        margin-top: 5rem;
                    }

                    .hero-headline h1 {
                        font-size: 2.25rem;
                        font-weight: 900;
                        line-height: 1.25;
                        letter-spacing: -0.025em;
                        text-align: center;
                        mix-blend-mode: screen;
                        opacity: 0.9;
                        margin: 0;
                    }

                    .hero-line {
                        display: block;
                        margin-bottom: 1rem;
                    }

                    .hero-accent {
                        color: var(--gold);
                        margin-bottom: 0;
                    }

                    .hero-side {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                        padding: 3rem 0;
                    }

                    .hero-vertical {
                        height: 16rem;
                        font-size: 0.875rem;
                        line-height: 2;
                        color: #9ca3af;
                        border-left: 1px solid #1f2937;
                        padding: 0 1rem;
                    }

                    .hero-lead {
                        text-align: center;
                    }

                    .hero-lead p {
                        font-size: 1.25rem;
                        font-style: italic;
                        font-weight: 300;
                        color: #6b7280;
                        margin: 0;
                    }

                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        opacity: 0.5;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                    }

                    .scroll-line {
                        width: 1px;
                        height: 4rem;
                        background: #6b7280;
                        animation: scroll-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }

                    @keyframes scroll-pulse {
                        50% { opacity: 0.5; }
                    }

                    @media (min-width: 768px) {
                        .hero {
                            padding: 4rem;
                        }

                        .hero-inner {
                            flex-direction: row;
                            align-items: flex-start;
                            justify-content: space-between;
                        }

                        .hero-headline {
                            align-items: flex-start;
                            height: 100%;
                            margin-top: 0;
                        }

                        .hero-headline h1 {
                            font-size: 3.75rem;
                            text-align: left;
                        }

                        .hero-line {
                            margin-bottom: 1.5rem;
                        }

                        .hero-side {
                            height: 100%;
                            justify-content: space-between;
                            align-items: flex-end;
                            gap: 0;
                            padding: 5rem 0;
                        }

                        .hero-vertical {
                            height: auto;
                            font-size: 1rem;
                            border-left: none;
                            border-right: 1px solid #1f2937;
                            padding: 0 1rem 0 0;
                        }

                        .hero-lead {
                            text-align: right;
                        }

                        .hero-lead p {
                            font-size: 1.5rem;
                        }
                    }

                    @media (min-width: 1024px) {
                        .hero-headline h1 {
                            font-size: 6rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
