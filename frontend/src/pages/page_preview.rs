use yew::prelude::*;
use shared::export::ExportFormat;
use crate::components::{BlockView, DevicePreview};
use crate::config::api_url;
use crate::hooks::{use_page, Fetch};
use crate::styles;

const EXPORT_FORMATS: [ExportFormat; 3] = [ExportFormat::Html, ExportFormat::Php, ExportFormat::Json];

#[derive(Properties, PartialEq)]
pub struct PagePreviewProps {
    pub id: String,
}

#[function_component(PagePreview)]
pub fn page_preview(props: &PagePreviewProps) -> Html {
    let page = use_page(props.id.clone());

    match page {
        Fetch::Loading => html! { <p class={styles::LOADING}>{ "Loading page..." }</p> },
        Fetch::Failed(e) => html! { <div class={styles::CARD_ERROR}>{ e }</div> },
        Fetch::Ready(page) => {
            let exports = EXPORT_FORMATS
                .iter()
                .map(|format| {
                    let href = api_url(&format!("/pages/{}/export?format={}", page.id, format));
                    html! {
                        <a key={format.to_string()} class={styles::BUTTON_SECONDARY} {href}>
                            { format!("Export {}", format.extension().to_uppercase()) }
                        </a>
                    }
                })
                .collect::<Html>();

            html! {
                <div class="space-y-6">
                    <div class={styles::CARD}>
                        <h1 class={styles::TEXT_H1}>{ &page.title }</h1>
                        <div class="mt-4 flex gap-2">{ exports }</div>
                    </div>
                    <DevicePreview>
                        if page.blocks.is_empty() {
                            <p class={classes!(styles::TEXT_SMALL, "p-6")}>{ "This page has no blocks." }</p>
                        }
                        { for page.blocks.iter().map(|block| html! {
                            <BlockView key={block.id.clone()} block={block.clone()} />
                        }) }
                    </DevicePreview>
                </div>
            }
        }
    }
}
