use crate::api::{create, login};
use crate::todo::{Category, Todo};

/// Things that can happen to this app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The server sent us the todo list.
    GotTodos(Vec<Todo>),

    /// The server sent us the category list.
    GotCategories(Vec<Category>),

    /// A fetch came back 401.
    Unauthorized,

    /// The user answered the credential prompts.
    CredentialsEntered(login::Req),

    /// The login request finished (in any way; a second 401 on the refetch is
    /// what decides whether it worked.)
    LoginFinished,

    /// The user submitted the creation form.
    Submitted {
        /// The `text` form field.
        text: String,

        /// The name selected in the category dropdown.
        category: String,
    },

    /// The server accepted a new todo and assigned it an ID.
    Created {
        /// The server-assigned ID.
        id: i64,

        /// What we asked it to create.
        todo: create::Req,
    },

    /// The user clicked a todo's toggle button.
    ToggleRequested {
        /// Which todo.
        id: i64,
    },

    /// The server accepted a done-flag update.
    Toggled {
        /// Which todo.
        id: i64,

        /// The new done flag.
        done: bool,
    },

    /// The user clicked a todo's delete button.
    DeleteRequested {
        /// Which todo.
        id: i64,
    },

    /// The server confirmed a deletion.
    Deleted {
        /// Which todo.
        id: i64,
    },

    /// Something bad happened. Recorded, never shown.
    Problem(String),
}
