use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-hotel"></i> {" Hotel Photo Match"}</h1>
            <p class="subtitle">{"Find the same property across two listing sites by comparing their photos"}</p>
        </header>
    }
}
