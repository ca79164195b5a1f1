use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use shared::Page;
use crate::config::api_url;
use crate::models::{ApiError, PageSummary};

#[derive(Clone, PartialEq, Debug)]
pub enum Fetch<T> {
    Loading,
    Ready(T),
    Failed(String),
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(match response.json::<ApiError>().await {
            Ok(body) => body.error,
            Err(_) => format!("Error status: {}", response.status()),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Error parsing response: {:?}", e))
}

#[hook]
pub fn use_page(id: String) -> Fetch<Page> {
    let page = use_state(|| Fetch::Loading);

    {
        let page = page.clone();
        use_effect_with(id, move |id| {
            page.set(Fetch::Loading);
            let url = api_url(&format!("/pages/{}", id));

            spawn_local(async move {
                match get_json::<Page>(&url).await {
                    Ok(loaded) => page.set(Fetch::Ready(loaded)),
                    Err(e) => {
                        log::error!("loading page failed: {}", e);
                        page.set(Fetch::Failed(e));
                    }
                }
            });

            || ()
        });
    }

    (*page).clone()
}

#[hook]
pub fn use_page_list() -> Fetch<Vec<PageSummary>> {
    let pages = use_state(|| Fetch::Loading);

    {
        let pages = pages.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match get_json::<Vec<PageSummary>>(&api_url("/pages")).await {
                    Ok(list) => pages.set(Fetch::Ready(list)),
                    Err(e) => {
                        log::warn!("listing pages failed: {}", e);
                        pages.set(Fetch::Failed(e));
                    }
                }
            });

            || ()
        });
    }

    (*pages).clone()
}

/// Saves `page` as a new page and hands back the stored copy with its assigned id.
pub async fn create_page(page: &Page) -> Result<Page, String> {
    let body = serde_json::json!({ "title": page.title, "blocks": page.blocks });
    let response = Request::post(&api_url("/pages"))
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .map_err(|e| format!("Request error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(match response.json::<ApiError>().await {
            Ok(body) => body.error,
            Err(_) => format!("Error status: {}", response.status()),
        });
    }

    response
        .json::<Page>()
        .await
        .map_err(|e| format!("Error parsing response: {:?}", e))
}
