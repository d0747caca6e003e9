use yew::prelude::*;

use crate::components::reveal_on_view::RevealOnView;
use crate::content::{ThinkingStep, METHODOLOGY_INTRO};

/// Cards cascade in 100ms apart.
pub fn step_delay(index: usize) -> u32 {
    index as u32 * 100
}

#[derive(Properties, PartialEq)]
pub struct MethodologyProps {
    pub steps: &'static [ThinkingStep],
}

#[function_component]
pub fn Methodology(props: &MethodologyProps) -> Html {
    html! {
        <section class="methodology">
            <div class="methodology-inner">
                <RevealOnView>
                    <div class="methodology-header">
                        <span class="font-en-serif methodology-index">{"03"}</span>
                        <div>
                            <h2 class="font-en-serif methodology-title">{"My Thinking OS"}</h2>
                            <p class="font-jp-serif methodology-intro">{ METHODOLOGY_INTRO }</p>
                        </div>
                    </div>
                </RevealOnView>

                <div class="methodology-grid">
                    { for props.steps.iter().enumerate().map(|(index, step)| html! {
                        <RevealOnView key={step.num} delay={step_delay(index)} class="step-card">
                            <div>
                                <div class="font-en-serif step-num">{ step.num }</div>
                                <h3 class="font-en-serif step-title">
                                    { step.en }
                                    <span class="font-jp-serif step-jp">{ step.jp }</span>
                                </h3>
                            </div>
                            <div class="step-rule"></div>
                            <p class="font-jp-serif step-desc">{ step.desc }</p>
                        </RevealOnView>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .methodology {
                        padding: 6rem 1.5rem;
                        background: var(--shade-deep);
                        border-top: 1px solid #111827;
                    }

                    .methodology-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                    }

                    .methodology-header {
                        display: flex;
                        flex-direction: column;
                        align-items: baseline;
                        gap: 2rem;
                        margin-bottom: 5rem;
                        padding-bottom: 2rem;
                        border-bottom: 1px solid #1f2937;
                    }

                    .methodology-index {
                        font-size: 3.75rem;
                        color: #1f2937;
                    }

                    .methodology-title {
                        font-size: 2.25rem;
                        font-style: italic;
                        color: var(--gold);
                        margin: 0;
                    }

                    .methodology-intro {
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        margin-top: 0.5rem;
                        color: #6b7280;
                    }

                    .methodology-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                    }

                    .step-card {
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        min-height: 320px;
                        padding: 2rem;
                        border-right: 1px solid #1f2937;
                        border-bottom: 1px solid #1f2937;
                        cursor: default;
                    }

                    .step-card:hover {
                        background: var(--panel-hover);
                    }

                    .step-num {
                        font-size: 0.875rem;
                        color: #4b5563;
                        margin-bottom: 1rem;
                    }

                    .step-title {
                        font-size: 1.5rem;
                        margin: 0 0 0.25rem;
                        transition: color 0.3s;
                    }

                    .step-card:hover .step-title {
                        color: var(--gold);
                    }

                    .step-jp {
                        font-size: 1.125rem;
                        color: #6b7280;
                        margin-left: 0.5rem;
                    }

                    .step-card:hover .step-jp {
                        color: #9ca3af;
                    }

                    .step-rule {
                        width: 2rem;
                        height: 1px;
                        background: #374151;
                        margin: 1.5rem 0;
                        transition: width 0.7s ease-in-out;
                    }

                    .step-card:hover .step-rule {
                        width: 100%;
                    }

                    .step-desc {
                        font-size: 0.875rem;
                        line-height: 1.625;
                        color: #9ca3af;
                        opacity: 0.6;
                        transition: opacity 0.3s;
                    }

                    .step-card:hover .step-desc {
                        opacity: 1;
                    }

                    @media (min-width: 768px) {
                        .methodology {
                            padding: 10rem 1.5rem;
                        }

                        .methodology-header {
                            flex-direction: row;
                        }

                        .methodology-index {
                            font-size: 6rem;
                        }

                        .methodology-title {
                            font-size: 3rem;
                        }

                        .methodology-grid {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }

                        .step-card {
                            padding: 3rem;
                        }

                        .step-title {
                            font-size: 1.875rem;
                        }
                    }

                    @media (min-width: 1024px) {
                        .methodology-grid {
                            grid-template-columns: repeat(3, minmax(0, 1fr));
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_cascade_by_index() {
        let delays: Vec<u32> = (0..6).map(step_delay).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500]);
    }
}
