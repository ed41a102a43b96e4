use super::super::{Model, Msg};
use shared::DetectionRecord;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(detection) = &model.form.detection else {
        return html! {};
    };

    let verdict_class = if detection.is_authentic { "authentic" } else { "counterfeit" };

    html! {
        <div class={classes!("results-container", verdict_class)}>
            <div class="result-header">
                <h2>{"Detection Result"}</h2>
                { render_confidence(detection) }
            </div>
            <div class="detailed-results">
                <p class="medicine-name">{ format!("Medicine: {}", detection.display_name()) }</p>
                <p>{ format!("Composition: {}", detection.display_composition()) }</p>
                <p>{ format!("Side Effects: {}", detection.display_side_effects()) }</p>
                <p class={classes!("verdict", verdict_class)}>{ detection.authenticity_label() }</p>
            </div>
            { render_rename_form(model, ctx) }
        </div>
    }
}

fn render_confidence(detection: &DetectionRecord) -> Html {
    match detection.confidence_percent() {
        Some(confidence) => html! {
            <div class="confidence-meter">
                <div class="meter-label">{"Confidence:"}</div>
                <div class="meter-value">{ confidence }</div>
            </div>
        },
        None => html! {},
    }
}

fn render_rename_form(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::NewNameChanged(input.value())
    });

    html! {
        <div class="rename-form">
            <input
                type="text"
                value={model.form.new_name.clone()}
                oninput={handle_input}
                placeholder="Enter new medicine name"
            />
            <button
                class="analyze-btn"
                onclick={link.callback(|_| Msg::UpdateName)}
                disabled={model.form.updating_name}
            >
                { if model.form.updating_name { "Updating..." } else { "Update Name" } }
            </button>
        </div>
    }
}
