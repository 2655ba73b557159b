/// Things that can go wrong in the API
pub mod error;
pub use error::Error;

/// HTTP wrapper around all of the endpoints
pub mod client;
pub use client::Client;

/// List the user's todos
pub mod todos;

/// List the user's categories
pub mod categories;

/// Create a todo
pub mod create;

/// Flip a todo's done flag
pub mod toggle;

/// Delete a todo
pub mod delete;

/// Log in with basic auth
pub mod login;
