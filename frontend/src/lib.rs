pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod scheduler;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{gallery::Gallery, page_preview::PagePreview};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Gallery,
    #[at("/pages/:id")]
    Page { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class={styles::CONTAINER}>
                <nav class={styles::NAV}>
                    <div class={styles::NAV_CONTENT}>
                        <Link<Route> to={Route::Gallery} classes={classes!(styles::NAV_BRAND)}>{ "Lander" }</Link<Route>>
                    </div>
                </nav>
                <main class={styles::MAIN}>
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Gallery => html! { <Gallery /> },
        Route::Page { id } => html! { <PagePreview {id} /> },
        Route::NotFound => html! {
            <div class={styles::CARD_ERROR}>{ "Nothing here." }</div>
        },
    }
}
