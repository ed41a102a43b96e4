use yew::prelude::*;

pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-capsules"></i> {" Smart Drug Authentication"}</h1>
            <p class="subtitle">
                {"Photograph a strip or box, check the detected medicine, and correct its name if the scan misread it"}
            </p>
        </header>
    }
}
