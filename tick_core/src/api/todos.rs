use crate::todo::Todo;

/// Everything the server knows about the user's todos.
pub type Resp = Vec<Todo>;

/// Where the todo list lives.
pub const PATH: &str = "/api/todo";
