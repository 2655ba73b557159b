use crate::todo::Category;
use serde::{Deserialize, Serialize};

/// A todo as the user submits it, before the server assigns an ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Req {
    /// What needs doing.
    pub text: String,

    /// Whether it's already done. Always false coming from the form.
    pub done: bool,

    /// The category picked in the dropdown, if it maps to a server category.
    /// `None` (serialized as `null`) means the default group.
    pub category: Option<Category>,
}

/// The server replies with the ID it assigned.
pub type Resp = i64;

/// Where the create endpoint lives.
pub const PATH: &str = "/api/todo";
