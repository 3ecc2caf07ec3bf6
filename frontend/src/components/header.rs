use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-road"></i> {" Road Boundary Detector"}</h1>
            <p class="subtitle">{"Pick a sample, upload a file, or paste a link, then run the model"}</p>
        </header>
    }
}
