#![warn(
    missing_docs,
    clippy::pedantic,
    clippy::allow_attributes,
    clippy::missing_docs_in_private_items
)]
#![allow(clippy::must_use_candidate)]

//! Browser front end for the tick todo service, compiled to WASM. The pure
//! state machine lives in `tick_core`; this crate is the imperative shell
//! wiring it to the document and the network.

/// Generic element construction.
mod dom;

/// Running the core's effects.
mod effects;

/// State to DOM.
mod render;

#[expect(clippy::missing_docs_in_private_items)]
mod utils;

use futures::channel::mpsc::{self, UnboundedSender};
use futures::StreamExt;
use tick_core::api::Client;
use tick_core::{Action, App};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlFormElement, HtmlSelectElement};

/// Boot the page: wire up the creation form, kick off the initial fetch, and
/// run the action/effect loop for as long as the page lives.
///
/// # Errors
///
/// Fails if the page doesn't provide the expected surface: a `.todo-form`
/// with a `text` field, a `#categories` container, and a `#dropdown-category`
/// select.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    utils::set_panic_hook();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let origin = window.location().origin()?;

    let env = effects::Env {
        http: reqwest::Client::new(),
        api: Client::new(origin),
        window,
        document: document.clone(),
    };

    let (tx, mut rx) = mpsc::unbounded();
    wire_form(&env, &tx)?;

    let mut app = App::new();
    let mut renderer = render::Renderer::new(document);

    effects::run(app.init(), &env, &tx);
    renderer.render(&app, &tx)?;

    log::info!("initialized");

    while let Some(action) = rx.next().await {
        for effect in app.handle(action) {
            effects::run(effect, &env, &tx);
        }

        renderer.render(&app, &tx)?;
    }

    Ok(())
}

/// Attach the submit handler to the creation form. It reads the `text` field
/// and the dropdown selection, then hands off to the app; everything after
/// that is state-machine business.
fn wire_form(env: &effects::Env, tx: &UnboundedSender<Action>) -> Result<(), JsValue> {
    let form = env
        .document
        .query_selector(".todo-form")?
        .ok_or_else(|| JsValue::from_str("no .todo-form on the page"))?;

    let document = env.document.clone();
    let tx = tx.clone();

    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();

        let Some(form) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };

        let Ok(data) = FormData::new_with_form(&form) else {
            return;
        };

        let text = data.get("text").as_string().unwrap_or_default();
        let category = document
            .get_element_by_id("dropdown-category")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_default();

        let _ = tx.unbounded_send(Action::Submitted { text, category });
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;

    // The form lives as long as the page; the closure can too.
    on_submit.forget();

    Ok(())
}
