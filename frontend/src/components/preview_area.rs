use super::super::{Model, Msg};
use super::utils::debounce;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <div id="preview-container">
            { render_selected_image_preview(model) }
            <div class="button-container">
                <button
                    class="analyze-btn"
                    onclick={debounce(300, move || link.send_message(Msg::Detect))}
                    disabled={model.form.loading}
                >
                    { render_detect_button_content(model) }
                </button>
            </div>
        </div>
    }
}

fn render_selected_image_preview(model: &Model) -> Html {
    match &model.upload {
        Some(upload) => html! {
            <img id="actual-image-preview"
                src={upload.preview_url.to_string()}
                alt="Preview" />
        },
        None => html! {
            <div class="select-preview">
                <p>{"No image selected"}</p>
            </div>
        },
    }
}

fn render_detect_button_content(model: &Model) -> Html {
    if model.form.loading {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Detecting..."}</> }
    } else {
        let filename = model
            .upload
            .as_ref()
            .map(|upload| upload.file.name())
            .unwrap_or_default();

        if filename.is_empty() {
            html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Detect Medicine"}</> }
        } else {
            let display_name = if filename.chars().count() > 20 {
                format!("{}...", filename.chars().take(17).collect::<String>())
            } else {
                filename
            };
            html! { <><i class="fa-solid fa-magnifying-glass"></i>{ format!(" Detect Medicine in \"{}\"", display_name) }</> }
        }
    }
}
