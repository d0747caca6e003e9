use yew::prelude::*;

use crate::components::reveal_on_view::RevealOnView;
use crate::components::text::broken_lines;
use crate::content::{
    PHILOSOPHY_CLOSING, PHILOSOPHY_OPENING, PHILOSOPHY_QUOTE, PHILOSOPHY_TITLE, STRUCTURE_WORDS,
};

#[function_component]
pub fn Philosophy() -> Html {
    html! {
        <section class="philosophy">
            <div class="philosophy-grid">
                <div class="structure-column font-en-serif" aria-hidden="true">
                    { for STRUCTURE_WORDS.into_iter().enumerate().map(|(i, word)| html! {
                        <div class={classes!("structure-word", format!("structure-word-{}", i))}>
                            <span>{ word }</span>
                            <div class="structure-rule"></div>
                        </div>
                    }) }
                </div>

                <div class="philosophy-text">
                    <RevealOnView>
                        <h2 class="font-jp-old philosophy-title">
                            { broken_lines(PHILOSOPHY_TITLE) }
                        </h2>
                    </RevealOnView>

                    <RevealOnView delay={200}>
                        <div class="philosophy-body font-jp-serif">
                            <p>{ broken_lines(PHILOSOPHY_OPENING) }</p>
                            <div class="philosophy-quote">
                                <p>{ broken_lines(PHILOSOPHY_QUOTE) }</p>
                            </div>
                            <p>{ broken_lines(PHILOSOPHY_CLOSING) }</p>
                        </div>
                    </RevealOnView>
                </div>
            </div>

            <style>
                {r#"
                    .philosophy {
                        position: relative;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                    }

                    .philosophy-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }

                    .structure-column {
                        display: none;
                    }

                    .structure-word {
                        position: relative;
                    }

                    .structure-word span {
                        display: block;
                        transition: color 0.5s;
                    }

                    .structure-rule {
                        position: absolute;
                        top: 50%;
                        right: -56px;
                        width: 3rem;
                        height: 1px;
                    }

                    .structure-word-0 span { color: #4b5563; }
                    .structure-word-0:hover span { color: #9ca3af; }
                    .structure-word-0 .structure-rule { background: #1f2937; }
                    .structure-word-1 span { color: #9ca3af; }
                    .structure-word-1:hover span { color: #e5e7eb; }
                    .structure-word-1 .structure-rule { background: #4b5563; }
                    .structure-word-2 span { color: var(--gold); }
                    .structure-word-2:hover span { color: var(--gold-hover); }
                    .structure-word-2 .structure-rule { background: var(--gold); }

                    .philosophy-text {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }

                    .philosophy-title {
                        font-size: 1.875rem;
                        font-weight: 700;
                        line-height: 1.625;
                        margin: 0 0 3rem;
                    }

                    .philosophy-body {
                        font-size: 1.125rem;
                        line-height: 2;
                        color: #d1d5db;
                        text-align: justify;
                    }

                    .philosophy-body > * + * {
                        margin-top: 2rem;
                    }

                    .philosophy-quote {
                        padding: 0.5rem 0 0.5rem 1.5rem;
                        border-left: 2px solid var(--gold);
                    }

                    .philosophy-quote p {
                        font-weight: 500;
                        color: #fff;
                        margin: 0;
                    }

                    @media (min-width: 768px) {
                        .philosophy {
                            padding: 10rem 3rem;
                        }

                        .philosophy-grid {
                            grid-template-columns: repeat(12, minmax(0, 1fr));
                        }

                        .structure-column {
                            grid-column: span 5 / span 5;
                            display: flex;
                            flex-direction: column;
                            justify-content: center;
                            gap: 6rem;
                            border-right: 1px solid #1f2937;
                            padding-right: 3rem;
                            font-size: 3rem;
                            text-align: right;
                            opacity: 0.4;
                            pointer-events: none;
                            user-select: none;
                        }

                        .philosophy-text {
                            grid-column: span 7 / span 7;
                            padding-left: 3rem;
                        }

                        .philosophy-title {
                            font-size: 3rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
