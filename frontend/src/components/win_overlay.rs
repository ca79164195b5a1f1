use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinOverlayProps {
    pub title: String,
    pub detail: String,
    #[prop_or_default]
    pub claim_url: Option<String>,
    #[prop_or_default]
    pub claim_label: String,
    pub on_close: Callback<()>,
}

#[function_component(WinOverlay)]
pub fn win_overlay(props: &WinOverlayProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let claim = match &props.claim_url {
        Some(url) if !props.claim_label.is_empty() => html! {
            <a class={styles::BUTTON_PRIMARY} href={url.clone()} target="_blank" rel="noopener">
                { &props.claim_label }
            </a>
        },
        _ => html! {},
    };

    html! {
        <div class={styles::OVERLAY} role="dialog" aria-modal="true">
            <div class={styles::OVERLAY_CARD}>
                <h3 class={styles::TEXT_H2}>{ &props.title }</h3>
                <p class={classes!(styles::TEXT_BODY, "my-4")}>{ &props.detail }</p>
                <div class="flex justify-center gap-3">
                    { claim }
                    <button class={styles::BUTTON_SECONDARY} onclick={on_close}>{ "Close" }</button>
                </div>
            </div>
        </div>
    }
}
