use super::super::{App, Msg};
use detector_shared::view::run_label;
use detector_shared::{DisplayMode, ModelVariant};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModelInfoProps {
    pub selected: ModelVariant,
    pub on_select: Callback<ModelVariant>,
}

/// Model picker with a short note on what each variant is good at.
#[function_component(ModelInfo)]
pub fn model_info(props: &ModelInfoProps) -> Html {
    html! {
        <div class="card model-info">
            <h2 class="card-title">{"Model"}</h2>
            { for ModelVariant::all().map(|variant| {
                let on_select = props.on_select.clone();
                html! {
                    <label class={classes!("model-option", (variant == props.selected).then_some("selected"))}>
                        <input
                            type="radio"
                            name="model"
                            value={variant.wire_id()}
                            checked={variant == props.selected}
                            onchange={Callback::from(move |_| on_select.emit(variant))}
                        />
                        <span class="radio-label-text">{ variant.label() }</span>
                        <p class="model-description">{ variant.description() }</p>
                    </label>
                }
            })}
        </div>
    }
}

pub fn render_confidence_slider(model: &App, ctx: &Context<App>) -> Html {
    let confidence = model.session.parameters().confidence;
    let handle_input = ctx.link().callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetConfidence(input.value().parse().unwrap_or_default())
    });

    html! {
        <div class="card">
            <h2 class="card-title">{"Confidence Threshold"}</h2>
            <div class="slider-scale">
                <span>{"0%"}</span>
                <span class="slider-value">{ confidence.to_string() }</span>
                <span>{"100%"}</span>
            </div>
            <input
                type="range"
                min="0"
                max="100"
                step="1"
                value={confidence.percent().to_string()}
                oninput={handle_input}
            />
        </div>
    }
}

pub fn render_display_mode(model: &App, ctx: &Context<App>) -> Html {
    let current = model.session.parameters().display_mode;
    let handle_change = ctx.link().batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        match select.value().parse::<DisplayMode>() {
            Ok(mode) => Some(Msg::SetDisplayMode(mode)),
            Err(e) => {
                log::warn!("Ignoring display mode {:?}: {}", select.value(), e);
                None
            }
        }
    });

    html! {
        <div class="card">
            <h2 class="card-title">{"Label Display Mode"}</h2>
            <select onchange={handle_change}>
                { for DisplayMode::all().map(|mode| html! {
                    <option value={mode.wire_id()} selected={mode == current}>
                        { mode.label() }
                    </option>
                })}
            </select>
        </div>
    }
}

pub fn render_run_button(model: &App, ctx: &Context<App>) -> Html {
    let processing = model.session.is_processing();

    html! {
        <button
            class="analyze-btn run-btn"
            disabled={!model.session.can_run()}
            onclick={ctx.link().callback(|_| Msg::Run)}
        >
            { run_label(&model.session) }
            { if processing {
                html! {}
            } else {
                html! { <i class="fa-solid fa-play"></i> }
            }}
        </button>
    }
}
