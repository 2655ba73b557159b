use crate::todo::Category;

/// The user's categories, in server order.
pub type Resp = Vec<Category>;

/// Where the category list lives.
pub const PATH: &str = "/api/todo/category";
