use yew::prelude::*;

use crate::components::reveal_on_view::RevealOnView;
use crate::content::CaseStudy;

#[derive(Properties, PartialEq)]
pub struct CaseStudiesProps {
    pub cases: &'static [CaseStudy],
}

#[function_component]
pub fn CaseStudies(props: &CaseStudiesProps) -> Html {
    html! {
        <section class="cases">
            <div class="cases-header">
                <h2 class="font-en-serif">{"Project Logs"}</h2>
                <p class="font-jp-serif">{"実績｜プロジェクト"}</p>
            </div>

            <div class="cases-list">
                { for props.cases.iter().map(|case| html! {
                    <RevealOnView
                        key={case.label}
                        class={classes!("case", case.image_first.then(|| "case-image-first"))}
                    >
                        <div class="case-text font-jp-serif">
                            <div class="case-label font-en-serif">{ case.label }</div>
                            <h3 class="font-jp-old">
                                { case.category }
                                <br/>
                                { case.headline }
                            </h3>
                            <p class="case-body">
                                { case.lead }
                                <br/>
                                { case.body }
                            </p>
                            <div class="case-scope">{ case.scope }</div>
                        </div>
                        <div class="case-image">
                            <img src={case.image_url} alt={case.image_alt} />
                            <div class="case-image-shade"></div>
                        </div>
                    </RevealOnView>
                }) }
            </div>

            <style>
                {r#"
                    .cases {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                    }

                    .cases-header {
                        margin: 0 0 6rem 1rem;
                        padding-left: 1.5rem;
                        border-left: 4px solid var(--gold);
                    }

                    .cases-header h2 {
                        font-size: 3rem;
                        font-weight: 400;
                        margin: 0;
                    }

                    .cases-header p {
                        font-size: 0.875rem;
                        margin-top: 0.5rem;
                        color: #9ca3af;
                        letter-spacing: 0.1em;
                    }

                    .cases-list > * + * {
                        margin-top: 8rem;
                    }

                    .case {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .case-text {
                        order: 2;
                    }

                    .case-image {
                        order: 1;
                        position: relative;
                        height: 400px;
                        width: 100%;
                        background: #1f2937;
                        overflow: hidden;
                        filter: grayscale(100%);
                        transition: filter 1s;
                    }

                    .case-image:hover {
                        filter: grayscale(0);
                    }

                    .case-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.8;
                    }

                    .case-image-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--ink), transparent);
                        opacity: 0.5;
                    }

                    .case-label {
                        color: var(--gold);
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        margin-bottom: 1rem;
                    }

                    .case-text h3 {
                        font-size: 1.5rem;
                        font-weight: 400;
                        line-height: 1.5;
                        margin: 0 0 2rem;
                    }

                    .case-body {
                        color: #9ca3af;
                        line-height: 2;
                        text-align: justify;
                        margin: 0 0 2rem;
                    }

                    .case-scope {
                        font-size: 0.75rem;
                        color: #4b5563;
                        font-family: monospace;
                        border-top: 1px solid #1f2937;
                        padding-top: 1rem;
                    }

                    @media (min-width: 768px) {
                        .cases {
                            padding: 10rem 1.5rem;
                        }

                        .cases-header {
                            margin-left: 3rem;
                        }

                        .cases-header h2 {
                            font-size: 4.5rem;
                        }

                        .cases-header p {
                            font-size: 1rem;
                        }

                        .case {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                            gap: 6rem;
                        }

                        .case-text {
                            order: 1;
                        }

                        .case-image {
                            order: 2;
                        }

                        .case-image-first .case-text {
                            grid-column-start: 2;
                        }

                        .case-image-first .case-image {
                            grid-column-start: 1;
                            grid-row-start: 1;
                        }

                        .case-text h3 {
                            font-size: 1.875rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
