use stylist::yew::Global;
use yew::prelude::*;

pub const GREEN: &str = "#3FA96B";
pub const MINT: &str = "#A0F0D1";
pub const INK: &str = "#333840";

/// Two-stop colour token used on icon tiles and decorative shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    pub fn css(&self) -> String {
        format!("background: linear-gradient(90deg, {}, {});", self.from, self.to)
    }
}

pub const BASE_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #F4F7F5;
        color: #333840;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        overflow-x: hidden;
    }
    *, *::before, *::after {
        box-sizing: border-box;
    }
    a {
        color: inherit;
        text-decoration: none;
    }
    h1, h2, h3, h4 {
        margin: 0;
    }
    img {
        display: block;
        max-width: 100%;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .section {
        padding: 5rem 0;
        position: relative;
    }
    .card-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }
    @media (min-width: 768px) {
        .card-grid { grid-template-columns: repeat(2, 1fr); }
    }
    .section-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-title {
        font-size: 2.75rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .section-lead {
        font-size: 1.125rem;
        color: rgba(51, 56, 64, 0.8);
        max-width: 48rem;
        margin: 0 auto;
    }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
    }
"#;

/// Page-wide base rules. Section styles live next to their components.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={BASE_CSS} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_css() {
        assert_eq!(
            Gradient::new(GREEN, MINT).css(),
            "background: linear-gradient(90deg, #3FA96B, #A0F0D1);"
        );
    }

    #[test]
    fn test_shared_grid_rules_are_global() {
        assert!(BASE_CSS.contains(".card-grid {"));
        assert!(BASE_CSS.contains(".section {"));
    }
}
