use yew::prelude::*;

use crate::components::arrow::ArrowRight;
use crate::components::reveal_on_view::RevealOnView;
use crate::components::text::broken_lines;
use crate::content::{lines, step_number, CoreMethod, FlowStep};

#[derive(Properties, PartialEq)]
pub struct VisionMethodProps {
    pub flow: &'static [FlowStep],
    pub methods: &'static [CoreMethod],
}

#[function_component]
pub fn VisionMethod(props: &VisionMethodProps) -> Html {
    let last = props.flow.len().saturating_sub(1);

    html! {
        <section class="vision">
            <div class="vision-inner">
                <RevealOnView>
                    <h2 class="font-en-serif vision-title">{"Vision & Method"}</h2>
                    <p class="font-jp-serif vision-subtitle">{"想いの翻訳と、実行のメソッド"}</p>
                </RevealOnView>

                <div class="vision-parts">
                    <RevealOnView delay={100}>
                        <div class="vision-heading vision-heading-accent">
                            <h3 class="font-jp-old">{"Vision Translation"}</h3>
                            <p class="font-jp-serif">{"抽象的な想いを、実行可能な戦略へ。"}</p>
                        </div>

                        <div class="flow">
                            { for props.flow.iter().enumerate().map(|(i, step)| html! {
                                <div key={step.title} class="flow-step">
                                    <div class="font-en-serif flow-num">{ step_number(i) }</div>
                                    <div class="font-en-serif flow-title">{ step.title }</div>
                                    <div class="font-jp-serif flow-sub">{ step.sub }</div>
                                    <p class="font-jp-serif flow-desc">{ broken_lines(lines(step.desc)) }</p>

                                    if i != last {
                                        <div class="flow-arrow-desktop">
                                            <ArrowRight size={24} />
                                        </div>
                                        <div class="flow-arrow-mobile">
                                            <ArrowRight size={20} class="rotate-90" />
                                        </div>
                                    }
                                </div>
                            }) }
                        </div>
                    </RevealOnView>

                    <RevealOnView delay={300}>
                        <div class="vision-heading">
                            <h3 class="font-jp-old">{"Core Method"}</h3>
                            <p class="font-jp-serif">{"成果を再現する5つの軸"}</p>
                        </div>

                        <div class="methods">
                            { for props.methods.iter().map(|method| html! {
                                <div key={method.title} class="method">
                                    <div class="method-head">
                                        <span class="font-en-serif method-title">{ method.title }</span>
                                        <span class="font-jp-serif method-jp">{ method.jp }</span>
                                    </div>
                                    <p class="font-jp-serif method-desc">{ method.desc }</p>
                                </div>
                            }) }

                            <div class="method-summary">
                                <p class="font-jp-serif">
                                    {"これらを複合的に組み合わせ、"}
                                    <br/>
                                    <span class="method-summary-accent">{"「点」の施策を「線」の戦略へ"}</span>
                                    <br/>
                                    {"昇華させます。"}
                                </p>
                            </div>
                        </div>
                    </RevealOnView>
                </div>
            </div>

            <style>
                {r#"
                    .vision {
                        padding: 6rem 1.5rem;
                        background: var(--shade-soft);
                    }

                    .vision-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                    }

                    .vision-title {
                        font-size: 2.25rem;
                        font-weight: 400;
                        color: #e5e7eb;
                        margin: 0 0 0.5rem;
                    }

                    .vision-subtitle {
                        font-size: 0.875rem;
                        color: #6b7280;
                        letter-spacing: 0.1em;
                        margin: 0 0 5rem;
                    }

                    .vision-parts {
                        display: flex;
                        flex-direction: column;
                        gap: 6rem;
                    }

                    .vision-heading {
                        border-left: 2px solid #374151;
                        padding-left: 1.5rem;
                        margin-bottom: 3rem;
                    }

                    .vision-heading h3 {
                        font-size: 1.5rem;
                        font-weight: 400;
                        color: #d1d5db;
                        margin: 0 0 0.5rem;
                    }

                    .vision-heading p {
                        font-size: 0.875rem;
                        color: #9ca3af;
                        margin: 0;
                    }

                    .vision-heading-accent {
                        border-left-color: var(--gold);
                    }

                    .vision-heading-accent h3 {
                        color: var(--gold);
                    }

                    .flow {
                        position: relative;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1rem;
                    }

                    .flow-step {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        padding: 1.5rem;
                        border: 1px solid #1f2937;
                        background: var(--ink);
                        transition: border-color 0.3s;
                    }

                    .flow-step:hover {
                        border-color: var(--gold);
                    }

                    .flow-num {
                        font-size: 0.75rem;
                        color: #4b5563;
                        margin-bottom: 0.5rem;
                    }

                    .flow-title {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        margin-bottom: 0.25rem;
                    }

                    .flow-sub {
                        font-size: 0.875rem;
                        color: var(--gold);
                        margin-bottom: 1rem;
                    }

                    .flow-desc {
                        font-size: 0.75rem;
                        color: #6b7280;
                        line-height: 1.625;
                        margin: 0;
                    }

                    .flow-arrow-desktop {
                        display: none;
                    }

                    .flow-arrow-mobile {
                        display: flex;
                        justify-content: center;
                        padding: 0.5rem 0;
                        color: #374151;
                    }

                    .rotate-90 {
                        transform: rotate(90deg);
                    }

                    .methods {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    .method-head {
                        display: flex;
                        align-items: baseline;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                        padding-bottom: 0.5rem;
                        border-bottom: 1px solid #1f2937;
                        transition: border-color 0.3s;
                    }

                    .method:hover .method-head {
                        border-color: #4b5563;
                    }

                    .method-title {
                        font-size: 1.125rem;
                        color: var(--gold);
                    }

                    .method-jp {
                        font-size: 0.875rem;
                        color: #d1d5db;
                    }

                    .method-desc {
                        font-size: 0.875rem;
                        color: #6b7280;
                        line-height: 2;
                        text-align: justify;
                        margin: 0;
                    }

                    .method-summary {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                        background: rgba(31, 41, 55, 0.3);
                        border: 1px solid #1f2937;
                    }

                    .method-summary p {
                        font-size: 0.875rem;
                        color: #9ca3af;
                        text-align: center;
                        line-height: 1.625;
                        margin: 0;
                    }

                    .method-summary-accent {
                        color: var(--gold);
                    }

                    @media (min-width: 768px) {
                        .vision {
                            padding: 10rem 1.5rem;
                        }

                        .vision-title {
                            font-size: 3.75rem;
                        }

                        .flow {
                            grid-template-columns: repeat(5, minmax(0, 1fr));
                            gap: 0;
                        }

                        .flow-arrow-desktop {
                            display: block;
                            position: absolute;
                            top: 50%;
                            right: -0.75rem;
                            transform: translateY(-50%);
                            z-index: 20;
                            color: #374151;
                        }

                        .flow-arrow-mobile {
                            display: none;
                        }

                        .methods {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }
                    }

                    @media (min-width: 1024px) {
                        .methods {
                            grid-template-columns: repeat(3, minmax(0, 1fr));
                        }
                    }
                "#}
            </style>
        </section>
    }
}
