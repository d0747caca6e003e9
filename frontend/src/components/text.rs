use yew::prelude::*;

/// Joins lines of copy with `<br/>` between them.
pub fn broken_lines<I>(lines: I) -> Html
where
    I: IntoIterator<Item = &'static str>,
{
    html! {
        <>
            { for lines.into_iter().enumerate().map(|(i, line)| html! {
                <>
                    if i > 0 { <br/> }
                    { line }
                </>
            }) }
        </>
    }
}
