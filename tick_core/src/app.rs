use crate::groups::{group_by_category, group_name, Catalog, Group};
use crate::todo::Todo;
use std::mem;

/// Things that can happen to this app
pub mod action;
pub use action::Action;

/// Things that should happen as a result. Side effects!
pub mod effect;
pub use effect::Effect;

/// Shown when a login retry still comes back unauthorized.
const AUTH_FAILED: &str = "Something's not right. Try refreshing the page.";

/// The "functional core" of the page: every user gesture and network result
/// arrives as an [`Action`], and everything that needs to touch the network
/// or the document leaves as an [`Effect`]. The shell re-renders from this
/// state after every handled action.
#[derive(Debug)]
pub struct App {
    /// Most recent problem. Mutation failures land here instead of in the
    /// user's face (parity with the original client).
    status: Option<String>,

    /// Where the app is in its lifecycle
    state: AppState,
}

impl App {
    /// Create a new instance of the app
    pub fn new() -> Self {
        Self {
            status: None,
            state: AppState::Loading { retried: false },
        }
    }

    /// Produce the side effect needed to initialize the app.
    #[expect(clippy::unused_self)]
    pub fn init(&self) -> Effect {
        Effect::FetchTodos
    }

    /// Handle an `Action`, updating the app's state and producing some side
    /// effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::GotTodos(todos) => match self.state {
                AppState::Loading { .. } => {
                    self.state = AppState::LoadingCategories { todos };
                    vec![Effect::FetchCategories]
                }
                _ => vec![],
            },

            Action::Unauthorized => match self.state {
                AppState::Loading { retried: false } => {
                    self.state = AppState::AwaitingLogin;
                    vec![Effect::RequestCredentials]
                }
                AppState::Loading { retried: true } | AppState::LoadingCategories { .. } => {
                    self.state = AppState::Failed;
                    vec![Effect::Alert(AUTH_FAILED.to_owned())]
                }
                _ => vec![],
            },

            Action::CredentialsEntered(credentials) => match self.state {
                AppState::AwaitingLogin => {
                    self.state = AppState::LoggingIn;
                    vec![Effect::LogIn(credentials)]
                }
                _ => vec![],
            },

            Action::LoginFinished => match self.state {
                // The login outcome is deliberately ignored; we refetch once
                // and let a second 401 settle it.
                AppState::LoggingIn => {
                    self.state = AppState::Loading { retried: true };
                    vec![Effect::FetchTodos]
                }
                _ => vec![],
            },

            Action::GotCategories(categories) => {
                match mem::replace(&mut self.state, AppState::Failed) {
                    AppState::LoadingCategories { todos } => {
                        let catalog = Catalog::new(categories);
                        let options = catalog.names();

                        self.state = AppState::Loaded(Loaded {
                            catalog,
                            groups: group_by_category(todos),
                        });

                        vec![Effect::PopulateCategoryOptions(options)]
                    }
                    other => {
                        self.state = other;
                        vec![]
                    }
                }
            }

            Action::Submitted { text, category } => self
                .state
                .map_loaded_mut(|loaded| {
                    vec![Effect::CreateTodo(crate::api::create::Req {
                        text,
                        done: false,
                        category: loaded.catalog.select(&category),
                    })]
                })
                .unwrap_or_default(),

            Action::Created { id, todo } => self
                .state
                .map_loaded_mut(|loaded| {
                    loaded.append(Todo {
                        id,
                        text: todo.text,
                        done: todo.done,
                        category: todo.category,
                        created: None,
                    });

                    vec![Effect::ResetForm]
                })
                .unwrap_or_default(),

            Action::ToggleRequested { id } => self
                .state
                .map_loaded_mut(|loaded| match loaded.find(id) {
                    Some(todo) => vec![Effect::ToggleTodo {
                        id,
                        done: !todo.done,
                    }],
                    None => vec![],
                })
                .unwrap_or_default(),

            Action::Toggled { id, done } => {
                self.state.map_loaded_mut(|loaded| loaded.set_done(id, done));

                vec![]
            }

            Action::DeleteRequested { id } => self
                .state
                .map_loaded_mut(|loaded| match loaded.find(id) {
                    Some(_) => vec![Effect::DeleteTodo { id }],
                    None => vec![],
                })
                .unwrap_or_default(),

            Action::Deleted { id } => {
                self.state.map_loaded_mut(|loaded| loaded.remove(id));

                vec![]
            }

            Action::Problem(problem) => {
                self.status = Some(problem);

                vec![]
            }
        }
    }

    /// The groups to render, in first-encounter order. Empty until the
    /// bootstrap finishes.
    pub fn groups(&self) -> &[Group] {
        match &self.state {
            AppState::Loaded(loaded) => &loaded.groups,
            _ => &[],
        }
    }

    /// Whether the bootstrap is still in flight.
    pub fn is_loading(&self) -> bool {
        !matches!(self.state, AppState::Loaded(_) | AppState::Failed)
    }

    /// Whether the bootstrap gave up after a second 401.
    pub fn has_failed(&self) -> bool {
        matches!(self.state, AppState::Failed)
    }

    /// The most recent problem, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// App lifecycle
#[derive(Debug)]
enum AppState {
    /// Waiting on a todos fetch. `retried` is set once we've been through the
    /// login prompt, so a second 401 is terminal.
    Loading {
        /// Whether this fetch follows a login attempt.
        retried: bool,
    },

    /// We asked the shell for credentials and are waiting on the user.
    AwaitingLogin,

    /// A login request is in flight.
    LoggingIn,

    /// Todos arrived; waiting on the category list before the first render.
    LoadingCategories {
        /// The todos we'll group once categories arrive.
        todos: Vec<Todo>,
    },

    /// Everything fetched. The page is interactive.
    Loaded(Loaded),

    /// Auth failed twice. Terminal; the shell has shown the alert.
    Failed,
}

impl AppState {
    /// Do something to the inner loaded state, if the app is indeed in that
    /// state.
    fn map_loaded_mut<T>(&mut self, edit: impl FnOnce(&mut Loaded) -> T) -> Option<T> {
        if let Self::Loaded(loaded) = self {
            Some(edit(loaded))
        } else {
            None
        }
    }
}

/// State when we have successfully loaded and are running
#[derive(Debug)]
pub struct Loaded {
    /// The categories fetched for this page load. Immutable once built.
    catalog: Catalog,

    /// The grouped todo list we're rendering.
    groups: Vec<Group>,
}

impl Loaded {
    /// Find a todo anywhere in the grouped list.
    fn find(&self, id: i64) -> Option<&Todo> {
        self.groups
            .iter()
            .flat_map(|group| group.todos.iter())
            .find(|todo| todo.id == id)
    }

    /// Flip a todo's done flag in place. Position within its group is
    /// unchanged.
    fn set_done(&mut self, id: i64, done: bool) {
        for group in &mut self.groups {
            if let Some(todo) = group.todos.iter_mut().find(|todo| todo.id == id) {
                todo.done = done;
                return;
            }
        }
    }

    /// Remove exactly one todo. Empty groups stay around, matching the
    /// original client's behavior of leaving the container in place.
    fn remove(&mut self, id: i64) {
        for group in &mut self.groups {
            group.todos.retain(|todo| todo.id != id);
        }
    }

    /// Append a freshly created todo to its group, creating the group if
    /// this is the first todo under that category.
    fn append(&mut self, todo: Todo) {
        let name = group_name(&todo);

        match self.groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.todos.push(todo),
            None => {
                let name = name.to_owned();
                self.groups.push(Group {
                    name,
                    todos: vec![todo],
                });
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::{create, login};
    use crate::todo::Category;

    fn todo(id: i64, text: &str, done: bool, category: Option<Category>) -> Todo {
        Todo {
            id,
            text: text.to_owned(),
            done,
            category,
            created: None,
        }
    }

    fn work() -> Category {
        Category {
            id: 1,
            name: "Work".to_owned(),
        }
    }

    fn credentials() -> login::Req {
        login::Req {
            username: "admin".to_owned(),
            password: "admin".to_owned(),
        }
    }

    /// An app that's been through a successful bootstrap.
    fn loaded_app() -> App {
        let mut app = App::new();

        assert_eq!(
            app.handle(Action::GotTodos(vec![
                todo(1, "A", false, Some(work())),
                todo(2, "B", false, None),
            ])),
            vec![Effect::FetchCategories]
        );
        assert_eq!(
            app.handle(Action::GotCategories(vec![work()])),
            vec![Effect::PopulateCategoryOptions(vec![
                "My todos".to_owned(),
                "Work".to_owned(),
            ])]
        );

        app
    }

    #[test]
    fn bootstrap_renders_after_todos_and_categories() {
        let app = App::new();
        assert_eq!(app.init(), Effect::FetchTodos);
        assert!(app.is_loading());

        let app = loaded_app();
        assert!(!app.is_loading());
        assert_eq!(app.groups().len(), 2);
        assert_eq!(app.groups()[0].name, "Work");
        assert_eq!(app.groups()[1].name, "My todos");
    }

    #[test]
    fn first_401_prompts_then_retries_once() {
        let mut app = App::new();

        assert_eq!(
            app.handle(Action::Unauthorized),
            vec![Effect::RequestCredentials]
        );
        assert_eq!(
            app.handle(Action::CredentialsEntered(credentials())),
            vec![Effect::LogIn(credentials())]
        );
        assert_eq!(app.handle(Action::LoginFinished), vec![Effect::FetchTodos]);

        // The retry succeeds; the list loads exactly once.
        assert_eq!(
            app.handle(Action::GotTodos(vec![todo(1, "A", false, None)])),
            vec![Effect::FetchCategories]
        );
        app.handle(Action::GotCategories(vec![]));
        assert_eq!(app.groups().len(), 1);
    }

    #[test]
    fn second_401_is_terminal_with_a_single_alert() {
        let mut app = App::new();

        app.handle(Action::Unauthorized);
        app.handle(Action::CredentialsEntered(credentials()));
        app.handle(Action::LoginFinished);

        assert_eq!(
            app.handle(Action::Unauthorized),
            vec![Effect::Alert(AUTH_FAILED.to_owned())]
        );
        assert!(app.has_failed());
        assert!(app.groups().is_empty());

        // No further fetches, prompts, or alerts, no matter what comes in.
        assert_eq!(app.handle(Action::Unauthorized), vec![]);
        assert_eq!(app.handle(Action::LoginFinished), vec![]);
        assert_eq!(
            app.handle(Action::CredentialsEntered(credentials())),
            vec![]
        );
    }

    #[test]
    fn toggling_twice_restores_state_and_position() {
        let mut app = loaded_app();

        assert_eq!(
            app.handle(Action::ToggleRequested { id: 1 }),
            vec![Effect::ToggleTodo { id: 1, done: true }]
        );
        app.handle(Action::Toggled { id: 1, done: true });
        assert!(app.groups()[0].todos[0].done);

        assert_eq!(
            app.handle(Action::ToggleRequested { id: 1 }),
            vec![Effect::ToggleTodo { id: 1, done: false }]
        );
        app.handle(Action::Toggled { id: 1, done: false });

        let original = loaded_app();
        assert_eq!(app.groups(), original.groups());
    }

    #[test]
    fn failed_toggle_leaves_state_unchanged() {
        let mut app = loaded_app();
        let before = app.groups().to_vec();

        app.handle(Action::ToggleRequested { id: 1 });
        // The effect failed; no Toggled action ever arrives.
        app.handle(Action::Problem("HTTP error".to_owned()));

        assert_eq!(app.groups(), &before[..]);
        assert_eq!(app.status(), Some("HTTP error"));
    }

    #[test]
    fn deleting_removes_exactly_one_and_leaves_siblings() {
        let mut app = loaded_app();

        assert_eq!(
            app.handle(Action::DeleteRequested { id: 2 }),
            vec![Effect::DeleteTodo { id: 2 }]
        );
        app.handle(Action::Deleted { id: 2 });

        let remaining: Vec<i64> = app
            .groups()
            .iter()
            .flat_map(|group| group.todos.iter().map(|todo| todo.id))
            .collect();
        assert_eq!(remaining, vec![1]);
    }

    #[test]
    fn submitting_appends_a_not_done_todo_and_resets_the_form() {
        let mut app = loaded_app();

        let effects = app.handle(Action::Submitted {
            text: "Buy milk".to_owned(),
            category: "My todos".to_owned(),
        });
        let Some(Effect::CreateTodo(req)) = effects.into_iter().next() else {
            panic!("expected a CreateTodo effect");
        };
        assert_eq!(req.text, "Buy milk");
        assert!(!req.done);
        assert_eq!(req.category, None);

        assert_eq!(
            app.handle(Action::Created { id: 42, todo: req }),
            vec![Effect::ResetForm]
        );

        let my_todos = &app.groups()[1];
        assert_eq!(my_todos.name, "My todos");
        let added = my_todos.todos.last().unwrap();
        assert_eq!(added.id, 42);
        assert_eq!(added.text, "Buy milk");
        assert!(!added.done);
    }

    #[test]
    fn submitting_under_a_new_category_creates_its_group() {
        let mut app = loaded_app();

        let req = create::Req {
            text: "C".to_owned(),
            done: false,
            category: Some(Category {
                id: 7,
                name: "Errands".to_owned(),
            }),
        };
        app.handle(Action::Created { id: 3, todo: req });

        let last = app.groups().last().unwrap();
        assert_eq!(last.name, "Errands");
        assert_eq!(last.todos[0].id, 3);
    }
}
