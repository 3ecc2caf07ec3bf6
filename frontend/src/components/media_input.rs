use super::super::{App, Msg};
use super::utils::{debounce, first_file};
use detector_shared::AcceptFilter;
use web_sys::{DragEvent, HtmlInputElement, SubmitEvent};
use yew::prelude::*;

pub fn render_sample_gallery(model: &App, ctx: &Context<App>) -> Html {
    let link = ctx.link();

    html! {
        <div class="card">
            <h2 class="card-title">{"Samples from Test Set"}</h2>
            <div class="sample-grid">
                { for model.config.samples.iter().enumerate().map(|(index, path)| {
                    let clicked = path.clone();
                    html! {
                        <div
                            key={path.clone()}
                            class="sample-item"
                            onclick={link.callback(move |_| Msg::SampleClicked(clicked.clone()))}
                        >
                            <img src={path.clone()} alt={format!("Sample {}", index + 1)} />
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

pub fn render_upload_card(model: &App, ctx: &Context<App>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);
        // Allows picking the same file twice in a row.
        input.set_value("");
        Msg::FilePicked(file)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    let open_picker = |accept: AcceptFilter| {
        let link = link.clone();
        debounce(300, move || link.send_message(Msg::OpenPicker(accept)))
    };

    html! {
        <div class="card">
            <h2 class="card-title">{"Upload File"}</h2>
            <p class="card-description">{"Upload an image or video for processing"}</p>

            // Outside #drop-zone: its programmatic click must not bubble into the zone's onclick.
            <input
                ref={model.file_input.clone()}
                type="file"
                id="file-input"
                accept={model.accept.as_attr()}
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={open_picker(AcceptFilter::Any)}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drop file here or click to browse"}</p>
                    <p class="file-types">{"Supports images and videos"}</p>
                </div>
            </div>

            <div class="button-container">
                <button class="outline-btn" onclick={open_picker(AcceptFilter::Images)}>
                    <i class="fa-solid fa-image"></i>{" Image"}
                </button>
                <button class="outline-btn" onclick={open_picker(AcceptFilter::Videos)}>
                    <i class="fa-solid fa-video"></i>{" Video"}
                </button>
            </div>
        </div>
    }
}

pub fn render_url_form(model: &App, ctx: &Context<App>) -> Html {
    let url_input = model.url_input.clone();
    let handle_submit = ctx.link().callback(move |e: SubmitEvent| {
        e.prevent_default();
        let url = url_input
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default();
        Msg::UrlSubmitted(url)
    });

    html! {
        <div class="card">
            <h2 class="card-title">{"Paste Image URL"}</h2>
            <form class="url-form" onsubmit={handle_submit}>
                <i class="fa-solid fa-link"></i>
                <input
                    ref={model.url_input.clone()}
                    type="url"
                    name="url"
                    placeholder="Paste a link..."
                />
                <button type="submit" class="outline-btn">{"Submit"}</button>
            </form>
        </div>
    }
}
