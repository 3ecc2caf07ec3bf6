use super::super::{App, Msg};
use detector_shared::view::EMPTY_PLACEHOLDER;
use detector_shared::{MediaKind, Stage};
use yew::prelude::*;

fn render_media(url: &str, kind: MediaKind, alt: &str) -> Html {
    match kind {
        MediaKind::Video => html! {
            <video src={url.to_string()} controls=true class="media-frame" />
        },
        MediaKind::Image => html! {
            <img src={url.to_string()} alt={alt.to_string()} class="media-frame" />
        },
    }
}

/// Result if there is one, else the preview, else a placeholder.
pub fn render_stage(model: &App) -> Html {
    let content = match Stage::of(&model.session) {
        Stage::Result { url, kind, caption } => html! {
            <div class="result-frame">
                { render_media(url, kind, "Result") }
                { for caption.map(|caption| html! {
                    <div class="result-caption">{ caption }</div>
                })}
            </div>
        },
        Stage::Preview { url, kind } => render_media(url, kind, "Preview"),
        Stage::Empty => html! {
            <div class="select-preview">
                <p>{ EMPTY_PLACEHOLDER }</p>
            </div>
        },
    };

    html! {
        <div class="card stage">{ content }</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessingIndicatorProps {
    pub is_processing: bool,
}

#[function_component(ProcessingIndicator)]
pub fn processing_indicator(props: &ProcessingIndicatorProps) -> Html {
    if !props.is_processing {
        return html! {};
    }

    html! {
        <div class="processing-indicator">
            <i class="fa-solid fa-spinner fa-spin"></i>
            <p>{"Processing... detecting road boundaries"}</p>
        </div>
    }
}

pub fn render_error_banner(model: &App, ctx: &Context<App>) -> Html {
    if let Some(error_msg) = model.session.error() {
        html! {
            <div class="error-message" role="alert">
                <i class="fa-solid fa-circle-exclamation"></i>
                <div>
                    <strong>{"Error"}</strong>
                    <p>{ error_msg }</p>
                </div>
                <button
                    class="remove-btn"
                    title="Dismiss"
                    onclick={ctx.link().callback(|_| Msg::DismissError)}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
        }
    } else {
        html! {}
    }
}
