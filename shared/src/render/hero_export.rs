use crate::blocks::HeroConfig;
use crate::validation::is_css_color;
use super::{escape_html, StaticRender};

pub fn render_hero(config: &HeroConfig, dom_id: &str) -> StaticRender {
    let style = match config.background.as_deref() {
        Some(color) if is_css_color(color) => format!(" style=\"background: {};\"", color),
        _ => String::new(),
    };

    let cta = match &config.cta_url {
        Some(url) if !config.cta_label.is_empty() => format!(
            "\n  <a class=\"lb-cta\" href=\"{}\">{}</a>",
            escape_html(url),
            escape_html(&config.cta_label)
        ),
        _ => String::new(),
    };

    let subheadline = if config.subheadline.is_empty() {
        String::new()
    } else {
        format!("\n  <p class=\"lb-subheadline\">{}</p>", escape_html(&config.subheadline))
    };

    StaticRender::markup_only(format!(
        "<section class=\"lb-block lb-hero\" id=\"{}\"{}>\n  <h1 class=\"lb-headline\">{}</h1>{}{}\n</section>",
        dom_id,
        style,
        escape_html(&config.headline),
        subheadline,
        cta,
    ))
}
