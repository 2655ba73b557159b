//! Client-side core for the tick todo app: the data model, category
//! grouping, the bootstrap state machine, and the HTTP API layer. Everything
//! in here is platform-neutral so the browser shell stays thin and the
//! interesting logic can be tested natively.

/// The todo data model.
pub mod todo;
pub use todo::{Category, Todo};

/// Grouping todos by category.
pub mod groups;
pub use groups::{group_by_category, Catalog, Group, DEFAULT_CATEGORY};

/// The pure state machine driving the page.
pub mod app;
pub use app::{Action, App, Effect};

/// Talk to the todo API.
pub mod api;
