use yew::prelude::*;
use stylist::yew::Global;
use stylist::StyleSource;
use log::warn;

/// Every color, font and motion constant used by the page.
///
/// Section stylesheets only read the CSS custom properties produced by
/// [`Theme::custom_properties`], so changing a token here restyles the whole page.
#[derive(Debug, PartialEq)]
pub struct Theme {
    pub ink: &'static str,
    pub paper: &'static str,
    pub gold: &'static str,
    pub gold_hover: &'static str,
    pub shade_deep: &'static str,
    pub shade_soft: &'static str,
    pub panel_hover: &'static str,
    pub layer_mid: &'static str,
    pub layer_low: &'static str,
    pub font_jp_old: &'static str,
    pub font_jp_serif: &'static str,
    pub font_en_serif: &'static str,
    pub reveal_duration_ms: u32,
    pub reveal_offset: &'static str,
    pub noise_opacity: f32,
}

pub static THEME: Theme = Theme {
    ink: "#1a1a1a",
    paper: "#e5e5e5",
    gold: "#C5A059",
    gold_hover: "#e0b86a",
    shade_deep: "#161616",
    shade_soft: "#181818",
    panel_hover: "#1f1f1f",
    layer_mid: "#222",
    layer_low: "#2a2a2a",
    font_jp_old: "'Zen Old Mincho', serif",
    font_jp_serif: "'Shippori Mincho', serif",
    font_en_serif: "'Cormorant Garamond', serif",
    reveal_duration_ms: 1000,
    reveal_offset: "2.5rem",
    noise_opacity: 0.03,
};

impl Theme {
    pub fn custom_properties(&self) -> String {
        format!(
            "--ink: {}; --paper: {}; --gold: {}; --gold-hover: {}; \
             --shade-deep: {}; --shade-soft: {}; --panel-hover: {}; \
             --layer-mid: {}; --layer-low: {}; \
             --font-jp-old: {}; --font-jp-serif: {}; --font-en-serif: {}; \
             --reveal-duration: {}ms; --reveal-offset: {}; --noise-opacity: {};",
            self.ink,
            self.paper,
            self.gold,
            self.gold_hover,
            self.shade_deep,
            self.shade_soft,
            self.panel_hover,
            self.layer_mid,
            self.layer_low,
            self.font_jp_old,
            self.font_jp_serif,
            self.font_en_serif,
            self.reveal_duration_ms,
            self.reveal_offset,
            self.noise_opacity,
        )
    }

    pub fn stylesheet(&self) -> String {
        format!(
            r#"
            :root {{ {vars} }}

            html, body {{
                margin: 0;
                padding: 0;
                background: var(--ink);
                color: var(--paper);
            }}

            ::selection {{
                background: var(--gold);
                color: #000;
            }}

            .font-jp-serif {{ font-family: var(--font-jp-serif); }}
            .font-jp-old {{ font-family: var(--font-jp-old); }}
            .font-en-serif {{ font-family: var(--font-en-serif); }}

            .vertical-text {{
                writing-mode: vertical-rl;
                text-orientation: upright;
                letter-spacing: 0.15em;
            }}

            ::-webkit-scrollbar {{ width: 6px; }}
            ::-webkit-scrollbar-track {{ background: var(--ink); }}
            ::-webkit-scrollbar-thumb {{ background: #333; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: #555; }}

            .reveal {{
                transition-property: opacity, transform;
                transition-duration: var(--reveal-duration);
                transition-timing-function: ease-out;
            }}

            .reveal-hidden {{
                opacity: 0;
                transform: translateY(var(--reveal-offset));
            }}

            .reveal-revealed {{
                opacity: 1;
                transform: translateY(0);
            }}

            .sr-only {{
                position: absolute;
                width: 1px;
                height: 1px;
                overflow: hidden;
                clip: rect(0, 0, 0, 0);
                white-space: nowrap;
            }}
            "#,
            vars = self.custom_properties(),
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct GlobalStylesProps {
    pub theme: &'static Theme,
}

#[function_component]
pub fn GlobalStyles(props: &GlobalStylesProps) -> Html {
    let css = props.theme.stylesheet();
    match StyleSource::try_from(css.clone()) {
        Ok(source) => html! { <Global css={source} /> },
        Err(e) => {
            warn!("Theme stylesheet rejected by parser, injecting raw css: {}", e);
            html! { <style>{css}</style> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_properties_carry_every_token() {
        let vars = THEME.custom_properties();
        assert!(vars.contains("--ink: #1a1a1a;"));
        assert!(vars.contains("--gold: #C5A059;"));
        assert!(vars.contains("--reveal-duration: 1000ms;"));
        assert!(vars.contains("--reveal-offset: 2.5rem;"));
        assert!(vars.contains("--noise-opacity: 0.03;"));
        assert!(vars.contains("--font-jp-old: 'Zen Old Mincho', serif;"));
    }

    #[test]
    fn stylesheet_defines_both_reveal_states() {
        let css = THEME.stylesheet();
        assert!(css.contains(".reveal-hidden"));
        assert!(css.contains(".reveal-revealed"));
        assert!(css.contains("transition-timing-function: ease-out;"));
        assert!(css.contains(&THEME.custom_properties()));
    }
}
