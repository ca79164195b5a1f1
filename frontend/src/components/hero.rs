use yew::prelude::*;
use shared::blocks::HeroConfig;
use shared::validation::is_css_color;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub config: HeroConfig,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let config = &props.config;
    let style = config
        .background
        .as_deref()
        .filter(|color| is_css_color(color))
        .map(|color| format!("background: {};", color));

    let cta = match &config.cta_url {
        Some(url) if !config.cta_label.is_empty() => html! {
            <a class={styles::HERO_CTA_BUTTON} href={url.clone()}>{ &config.cta_label }</a>
        },
        _ => html! {},
    };

    html! {
        <section class={styles::HERO_SECTION} {style}>
            <h1 class={styles::HERO_TITLE}>{ &config.headline }</h1>
            if !config.subheadline.is_empty() {
                <p class={styles::TEXT_BODY}>{ &config.subheadline }</p>
            }
            { cta }
        </section>
    }
}
