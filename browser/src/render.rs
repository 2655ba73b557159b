//! Rebuild the grouped list from app state after every handled action.

use crate::dom::{self, Params};
use futures::channel::mpsc::UnboundedSender;
use tick_core::{Action, App, Todo};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

/// An event-handler closure owned by the current render.
type Handler = Closure<dyn FnMut(Event)>;

/// Renders the `#categories` container from [`App`] state. Re-rendering
/// replaces the whole subtree, so an item always reflects the last known done
/// state and keeps its position within its group.
pub struct Renderer {
    /// The page we're rendering into.
    document: Document,

    /// Closures backing the current subtree's event handlers. Replaced along
    /// with the subtree; dropping the old ones releases their callbacks.
    handlers: Vec<Handler>,
}

impl Renderer {
    /// A renderer for a document.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            handlers: Vec::new(),
        }
    }

    /// Replace the `#categories` subtree with the current app state.
    ///
    /// ## Errors
    ///
    /// Fails if the page doesn't provide a `#categories` container.
    pub fn render(&mut self, app: &App, tx: &UnboundedSender<Action>) -> Result<(), JsValue> {
        let container = self
            .document
            .get_element_by_id("categories")
            .ok_or_else(|| JsValue::from_str("no #categories on the page"))?;

        container.set_inner_html("");

        let mut handlers = Vec::new();

        if app.is_loading() {
            let loading = dom::create(&self.document, "div", Params::new().text("Loading…"))?;
            container.append_child(&loading)?;
        }

        for group in app.groups() {
            let labeled = dom::create(
                &self.document,
                "div",
                Params::new()
                    .class("category")
                    .id(&group.name)
                    .text(&group.name),
            )?;

            let list = self.document.create_element("ul")?;

            for todo in &group.todos {
                list.append_child(&self.todo_item(todo, tx, &mut handlers)?.into())?;
            }

            labeled.append_child(&list)?;
            container.append_child(&labeled)?;
        }

        self.handlers = handlers;

        Ok(())
    }

    /// A self-contained list item: the todo text, a toggle button, and a
    /// delete button.
    fn todo_item(
        &self,
        todo: &Todo,
        tx: &UnboundedSender<Action>,
        handlers: &mut Vec<Handler>,
    ) -> Result<Element, JsValue> {
        let class = if todo.done { "todo done" } else { "todo" };
        let item = dom::create(&self.document, "li", Params::new().class(class))?;

        let text = dom::create(
            &self.document,
            "span",
            Params::new().class("todo-text").text(&todo.text),
        )?;
        item.append_child(&text)?;

        let controls = dom::create(&self.document, "div", Params::new().class("controls"))?;

        let toggle_label = if todo.done { "Do it again" } else { "Done" };
        let toggle = dom::create(&self.document, "button", Params::new().text(toggle_label))?;
        on_click(
            &toggle,
            tx,
            Action::ToggleRequested { id: todo.id },
            handlers,
        )?;
        controls.append_child(&toggle)?;

        let delete = dom::create(
            &self.document,
            "button",
            Params::new().class("delete-btn").text("Delete"),
        )?;
        on_click(
            &delete,
            tx,
            Action::DeleteRequested { id: todo.id },
            handlers,
        )?;
        controls.append_child(&delete)?;

        item.append_child(&controls)?;

        Ok(item)
    }
}

/// Send an action into the app loop whenever the element is clicked.
fn on_click(
    target: &Element,
    tx: &UnboundedSender<Action>,
    action: Action,
    handlers: &mut Vec<Handler>,
) -> Result<(), JsValue> {
    let tx = tx.clone();
    let handler = Closure::wrap(Box::new(move |_event: Event| {
        let _ = tx.unbounded_send(action.clone());
    }) as Box<dyn FnMut(Event)>);

    target.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handlers.push(handler);

    Ok(())
}
