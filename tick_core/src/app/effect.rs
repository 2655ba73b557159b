use crate::api::{create, login};

/// Things that should happen as a result of an [`Action`](super::Action).
/// The core only describes them; the shell runs them and feeds the resulting
/// actions back in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// GET the todo list.
    FetchTodos,

    /// GET the category list.
    FetchCategories,

    /// Ask the user for credentials. Resolved by the shell (prompt dialogs in
    /// the browser) into [`Action::CredentialsEntered`](super::Action).
    RequestCredentials,

    /// POST a login request with basic auth.
    LogIn(login::Req),

    /// POST a new todo.
    CreateTodo(create::Req),

    /// PATCH a todo's done flag.
    ToggleTodo {
        /// Which todo.
        id: i64,

        /// The flag to set.
        done: bool,
    },

    /// DELETE a todo.
    DeleteTodo {
        /// Which todo.
        id: i64,
    },

    /// Fill the category dropdown with these names, in order.
    PopulateCategoryOptions(Vec<String>),

    /// Clear the creation form's fields.
    ResetForm,

    /// Show a blocking alert. Only used for the terminal auth failure.
    Alert(String),
}
