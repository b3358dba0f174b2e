use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-leaf"></i> {" Tomato Leaf Disease Detection"}</h1>
            <p class="subtitle">{"Upload a JPEG photo of a tomato leaf to identify the disease"}</p>
        </header>
    }
}
