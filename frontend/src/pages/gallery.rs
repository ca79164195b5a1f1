use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use shared::{BlockRegistry, Page, PageBlock};
use crate::components::{BlockView, DevicePreview};
use crate::hooks::{create_page, use_page_list, Fetch};
use crate::{styles, Route};

/// Page made of one default instance of every registered block.
fn sample_page(registry: &BlockRegistry) -> Page {
    let mut page = Page::new("gallery", "Block gallery");
    page.blocks = registry
        .definitions()
        .iter()
        .map(|definition| PageBlock::new(&definition.kind.to_string(), definition.default_config()))
        .collect();
    page
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let registry = use_memo((), |_| BlockRegistry::standard());
    let page = use_memo((), {
        let registry = registry.clone();
        move |_| sample_page(&registry)
    });
    let saved = use_page_list();
    let navigator = use_navigator();
    let save_error = use_state(|| None::<String>);

    let on_save = {
        let page = page.clone();
        let save_error = save_error.clone();
        Callback::from(move |_: MouseEvent| {
            let page = (*page).clone();
            let navigator = navigator.clone();
            let save_error = save_error.clone();
            spawn_local(async move {
                match create_page(&page).await {
                    Ok(stored) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Page { id: stored.id });
                        }
                    }
                    Err(e) => save_error.set(Some(e)),
                }
            });
        })
    };

    let saved_list = match saved {
        Fetch::Loading => html! { <p class={styles::LOADING}>{ "Loading saved pages..." }</p> },
        Fetch::Failed(_) => html! { <p class={styles::TEXT_SMALL}>{ "Saved pages are unavailable." }</p> },
        Fetch::Ready(pages) if pages.is_empty() => html! { <p class={styles::TEXT_SMALL}>{ "No saved pages yet." }</p> },
        Fetch::Ready(pages) => html! {
            <ul class="space-y-1">
                { for pages.into_iter().map(|summary| html! {
                    <li key={summary.id.clone()}>
                        <Link<Route> to={Route::Page { id: summary.id.clone() }} classes={classes!(styles::LINK)}>
                            { format!("{} ({} blocks)", summary.title, summary.block_count) }
                        </Link<Route>>
                    </li>
                }) }
            </ul>
        },
    };

    html! {
        <div class="space-y-6">
            <div class={styles::CARD}>
                <h1 class={styles::TEXT_H1}>{ &page.title }</h1>
                <p class={styles::TEXT_BODY}>
                    { for registry.definitions().iter().map(|d| html! {
                        <span key={d.kind.to_string()} class="mr-4">{ d.display_name }</span>
                    }) }
                </p>
                <div class="mt-4 flex items-center gap-3">
                    <button class={styles::BUTTON_PRIMARY} onclick={on_save}>{ "Save as page" }</button>
                    if let Some(e) = &*save_error {
                        <span class={styles::CARD_ERROR}>{ e }</span>
                    }
                </div>
                <div class="mt-4">{ saved_list }</div>
            </div>
            <DevicePreview>
                { for page.blocks.iter().map(|block| html! {
                    <BlockView key={block.id.clone()} block={block.clone()} />
                }) }
            </DevicePreview>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_page_passes_validation() {
        let page = sample_page(&BlockRegistry::standard());
        assert_eq!(page.blocks.len(), 4);
        assert!(page.check().is_ok());
        assert_eq!(page.blocks[0].id, "hero");
    }
}
