use yew::prelude::*;

use crate::components::reveal_on_view::RevealOnView;
use crate::components::text::broken_lines;
use crate::content::{CONTACT_ANCHOR, CONTACT_INVITATION, CONTACT_NOTE, COPYRIGHT};

#[function_component]
pub fn Contact() -> Html {
    html! {
        <section class="contact">
            <div class="contact-rule" aria-hidden="true"></div>

            <RevealOnView>
                <p class="font-jp-serif contact-invitation">{ broken_lines(CONTACT_INVITATION) }</p>
                <p class="font-jp-serif contact-note">{ broken_lines(CONTACT_NOTE) }</p>

                // Inert until a contact form exists.
                <a href={CONTACT_ANCHOR} class="contact-link">
                    <span class="font-en-serif contact-link-text">{"Start a Dialogue"}</span>
                    <div class="contact-link-rule"></div>
                    <span class="sr-only">{"Contact Form"}</span>
                </a>

                <div class="font-en-serif contact-copyright">{ COPYRIGHT }</div>
            </RevealOnView>

            <style>
                {r#"
                    .contact {
                        position: relative;
                        padding: 8rem 1.5rem;
                        text-align: center;
                        background: var(--ink);
                        overflow: hidden;
                    }

                    .contact-rule {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 1px;
                        height: 5rem;
                        background: linear-gradient(to bottom, #374151, transparent);
                    }

                    .contact-invitation {
                        font-size: 1.125rem;
                        color: #9ca3af;
                        line-height: 1.625;
                        margin: 0 0 2rem;
                    }

                    .contact-note {
                        font-size: 0.875rem;
                        color: #4b5563;
                        margin: 0 0 4rem;
                    }

                    .contact-link {
                        display: inline-flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        cursor: pointer;
                        text-decoration: none;
                    }

                    .contact-link-text {
                        font-size: 1.5rem;
                        letter-spacing: 0.1em;
                        color: var(--gold);
                        transition: color 0.3s;
                    }

                    .contact-link:hover .contact-link-text {
                        color: #fff;
                    }

                    .contact-link-rule {
                        width: 0;
                        height: 1px;
                        background: var(--gold);
                        transition: width 0.5s ease-out;
                    }

                    .contact-link:hover .contact-link-rule {
                        width: 100%;
                    }

                    .contact-copyright {
                        margin-top: 6rem;
                        color: #374151;
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                    }

                    @media (min-width: 768px) {
                        .contact {
                            padding: 12rem 1.5rem;
                        }

                        .contact-invitation {
                            font-size: 1.25rem;
                        }

                        .contact-link-text {
                            font-size: 1.875rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
