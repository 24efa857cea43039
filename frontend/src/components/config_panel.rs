use super::super::{Model, Msg};
use shared::MatchMethod;
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub fn render_config_panel(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let panel = &model.panel;
    let loading = model.status.current().is_loading();

    let on_source_a = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetSourceA(input.value())
    });
    let on_source_b = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetSourceB(input.value())
    });

    let on_method = link.batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        match MatchMethod::from_str(&select.value()) {
            Ok(method) => Some(Msg::SelectMethod(method)),
            Err(_) => {
                log::warn!("Unknown matching method in selector: {}", select.value());
                None
            }
        }
    });

    let on_threshold = link.batch_callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value().parse::<f64>().ok().map(Msg::AdjustThreshold)
    });

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="config-panel" onsubmit={on_submit}>
            <div class="id-inputs">
                <label for="source-a-id">{"Source A property ID"}</label>
                <input
                    id="source-a-id"
                    type="text"
                    placeholder="e.g. 123456"
                    value={panel.source_a_id().to_string()}
                    oninput={on_source_a}
                />
                <label for="source-b-id">{"Source B property ID"}</label>
                <input
                    id="source-b-id"
                    type="text"
                    placeholder="e.g. 654321"
                    value={panel.source_b_id().to_string()}
                    oninput={on_source_b}
                />
            </div>

            <div class="method-select">
                <label for="matching-method">{"Matching method"}</label>
                <select id="matching-method" onchange={on_method}>
                    { for MatchMethod::iter().map(|method| html! {
                        <option
                            value={method.wire_name()}
                            selected={method == panel.method()}
                        >
                            { method.display_name() }
                        </option>
                    })}
                </select>
                { render_method_hint(model) }
            </div>

            <div class="threshold">
                <label for="threshold">
                    {"Similarity threshold: "}
                    <span id="threshold-value">{ panel.threshold_label() }</span>
                </label>
                <input
                    id="threshold"
                    type="range"
                    min="0"
                    max="1"
                    step="0.01"
                    value={panel.threshold().to_string()}
                    oninput={on_threshold}
                />
                <p class="threshold-semantics">{ panel.method().threshold_semantics() }</p>
            </div>

            <button id="process-btn" class="analyze-btn" type="submit" disabled={loading}>
                {
                    if loading {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Working..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Fetch and compare images"}</> }
                    }
                }
            </button>
        </form>
    }
}

fn render_method_hint(model: &Model) -> Html {
    let hint = model.panel.hint();
    html! {
        <div class="method-hint">
            <p class="hint-summary">{ hint.summary }</p>
            <p class="hint-pros"><strong>{"Strengths: "}</strong>{ hint.advantages }</p>
            <p class="hint-cons"><strong>{"Weaknesses: "}</strong>{ hint.drawbacks }</p>
        </div>
    }
}
