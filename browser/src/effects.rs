//! Run the effects the core describes: network calls through the API layer,
//! plus the handful of document-facing effects (dialogs, form reset, dropdown
//! population.)

use crate::dom::{self, Params};
use futures::channel::mpsc::UnboundedSender;
use tick_core::api::{self, Client};
use tick_core::{Action, Effect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlFormElement, Window};

/// Connections to external services that effects use. Cheap to clone; each
/// spawned effect takes its own copy.
#[derive(Clone)]
pub struct Env {
    /// An HTTP client with reqwest (a thin wrapper over `fetch` on this
    /// target.)
    pub http: reqwest::Client,

    /// Endpoint wrappers for the todo API.
    pub api: Client,

    /// For alert and prompt dialogs.
    pub window: Window,

    /// For the form and dropdown effects.
    pub document: Document,
}

/// Run one effect. Document effects run synchronously; network effects are
/// spawned and report back through the channel when they finish.
pub fn run(effect: Effect, env: &Env, tx: &UnboundedSender<Action>) {
    match effect {
        Effect::Alert(message) => {
            let _ = env.window.alert_with_message(&message);
        }

        Effect::RequestCredentials => {
            let _ = tx.unbounded_send(request_credentials(&env.window));
        }

        Effect::ResetForm => reset_form(&env.document),

        Effect::PopulateCategoryOptions(names) => {
            if let Err(problem) = populate_options(&env.document, &names) {
                log::error!("couldn't populate the category dropdown: {problem:?}");
            }
        }

        network => {
            let env = env.clone();
            let tx = tx.clone();

            spawn_local(async move {
                if let Some(action) = run_network(network, &env).await {
                    let _ = tx.unbounded_send(action);
                }
            });
        }
    }
}

/// The network-facing effects. A 401 on a fetch becomes
/// [`Action::Unauthorized`] so the state machine can run the login flow;
/// everything else that fails becomes a logged, never-rendered
/// [`Action::Problem`].
async fn run_network(effect: Effect, env: &Env) -> Option<Action> {
    match effect {
        Effect::FetchTodos => match env.api.todos(&env.http).await {
            Ok(todos) => Some(Action::GotTodos(todos)),
            Err(api::Error::Unauthorized) => Some(Action::Unauthorized),
            Err(problem) => Some(problem_action("fetching todos", &problem)),
        },

        Effect::FetchCategories => match env.api.categories(&env.http).await {
            Ok(categories) => Some(Action::GotCategories(categories)),
            Err(api::Error::Unauthorized) => Some(Action::Unauthorized),
            Err(problem) => Some(problem_action("fetching categories", &problem)),
        },

        Effect::LogIn(credentials) => {
            // The outcome doesn't matter: we refetch either way, and a second
            // 401 on the refetch is what ends the bootstrap.
            if let Err(problem) = env.api.login(&env.http, &credentials).await {
                log::error!("login failed: {problem}");
            }

            Some(Action::LoginFinished)
        }

        Effect::CreateTodo(req) => match env.api.create(&env.http, &req).await {
            Ok(id) => Some(Action::Created { id, todo: req }),
            Err(problem) => Some(problem_action("creating a todo", &problem)),
        },

        Effect::ToggleTodo { id, done } => match env.api.toggle(&env.http, id, done).await {
            Ok(()) => Some(Action::Toggled { id, done }),
            Err(problem) => Some(problem_action("toggling a todo", &problem)),
        },

        Effect::DeleteTodo { id } => match env.api.delete(&env.http, id).await {
            Ok(()) => Some(Action::Deleted { id }),
            Err(problem) => Some(problem_action("deleting a todo", &problem)),
        },

        // Document effects are handled in `run`.
        Effect::RequestCredentials
        | Effect::PopulateCategoryOptions(_)
        | Effect::ResetForm
        | Effect::Alert(_) => None,
    }
}

/// Log a failure and turn it into a recorded action.
fn problem_action(context: &str, problem: &api::Error) -> Action {
    log::error!("problem {context}: {problem}");

    Action::Problem(problem.to_string())
}

/// Ask for credentials with a pair of prompt dialogs. A dismissed prompt
/// counts as an empty entry; the login attempt then comes back unauthorized
/// and the second 401 ends the bootstrap.
fn request_credentials(window: &Window) -> Action {
    let username = prompt(window, "You're not logged in. What's your username?");
    let password = prompt(window, "And now your password?");

    Action::CredentialsEntered(api::login::Req { username, password })
}

/// A blocking prompt, normalizing dismissal to the empty string.
fn prompt(window: &Window, message: &str) -> String {
    window
        .prompt_with_message(message)
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Clear the creation form's fields.
fn reset_form(document: &Document) {
    let form = document
        .query_selector(".todo-form")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());

    if let Some(form) = form {
        form.reset();
    }
}

/// Append one `<option>` per category name to the dropdown, clearing whatever
/// was there before.
fn populate_options(document: &Document, names: &[String]) -> Result<(), JsValue> {
    let Some(dropdown) = document.get_element_by_id("dropdown-category") else {
        return Ok(());
    };

    dropdown.set_inner_html("");

    for name in names {
        let option = dom::create(document, "option", Params::new().value(name).text(name))?;
        dropdown.append_child(&option)?;
    }

    Ok(())
}
