use yew::prelude::*;
use web_sys::Element;
use log::debug;

use crate::config;
use crate::observer::IntersectionViewport;
use crate::reveal::{container_classes, transition_style, Reveal, RevealMode, RevealOptions, RevealState};

#[derive(Properties, PartialEq)]
pub struct RevealOnViewProps {
    #[prop_or_default]
    pub children: Children,
    /// Milliseconds to wait after the container becomes visible before animating.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub mode: RevealMode,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
}

pub fn reveal_options(props: &RevealOnViewProps) -> RevealOptions {
    RevealOptions { threshold: props.threshold, mode: props.mode }
}

/// Fades its children in (and back out) as the container crosses the viewport threshold.
#[function_component]
pub fn RevealOnView(props: &RevealOnViewProps) -> Html {
    let container_ref = use_node_ref();
    let state = use_state_eq(RevealState::default);

    // Re-subscribes whenever threshold or mode change.
    {
        let container_ref = container_ref.clone();
        let state = state.clone();
        use_effect_with_deps(move |options: &RevealOptions| {
            let target = container_ref.cast::<Element>();
            let reveal = Reveal::mount(Ok(IntersectionViewport), target, *options, move |next| {
                state.set(next);
            });
            debug!("Reveal mounted (observing: {})", reveal.is_observing());

            move || {
                drop(reveal);
            }
        }, reveal_options(props));
    }

    let classes = container_classes(*state, &props.class.to_string());

    html! {
        <div
            ref={container_ref}
            class={classes}
            style={transition_style(props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use yew::ServerRenderer;

    #[function_component]
    fn SingleReveal() -> Html {
        html! {
            <RevealOnView delay={300} class="x">
                <p>{"C"}</p>
            </RevealOnView>
        }
    }

    #[function_component]
    fn SiblingReveals() -> Html {
        html! {
            <>
                <RevealOnView>
                    <p>{"first"}</p>
                </RevealOnView>
                <RevealOnView delay={200}>
                    <p>{"second"}</p>
                </RevealOnView>
            </>
        }
    }

    async fn render<C>() -> String
    where
        C: BaseComponent,
        C::Properties: Default,
    {
        ServerRenderer::<C>::new().hydratable(false).render().await
    }

    #[tokio::test]
    async fn renders_children_hidden_with_delay() {
        let html = render::<SingleReveal>().await;
        assert!(html.contains("<p>C</p>"), "{}", html);
        assert!(html.contains(r#"class="reveal reveal-hidden x""#), "{}", html);
        assert!(html.contains("transition-delay: 300ms;"), "{}", html);
    }

    #[tokio::test]
    async fn siblings_carry_their_own_delay() {
        let html = render::<SiblingReveals>().await;
        let first = html.find("<p>first</p>").expect("first child rendered");
        let second = html.find("<p>second</p>").expect("second child rendered");
        let zero = html.find("transition-delay: 0ms;").expect("default delay rendered");
        let two_hundred = html.find("transition-delay: 200ms;").expect("explicit delay rendered");
        assert!(zero < first && first < two_hundred && two_hundred < second, "{}", html);
        assert_eq!(html.matches("reveal-hidden").count(), 2);
    }

    #[test]
    fn options_follow_props() {
        let defaults = RevealOnViewProps {
            children: Children::default(),
            delay: 0,
            class: Classes::default(),
            mode: RevealMode::Toggle,
            threshold: config::REVEAL_THRESHOLD,
        };
        assert_eq!(reveal_options(&defaults), RevealOptions::default());

        let changed = RevealOnViewProps {
            children: Children::default(),
            delay: 0,
            class: Classes::default(),
            mode: RevealMode::Once,
            threshold: 0.5,
        };
        let options = reveal_options(&changed);
        assert_eq!(options, RevealOptions { threshold: 0.5, mode: RevealMode::Once });
        assert!(options != reveal_options(&defaults));
    }
}
