/// Where the delete endpoint lives.
pub static PATH: &str = "/api/todo/:id";

/// Construct a path given a todo ID.
pub fn path(id: i64) -> String {
    PATH.replace(":id", &id.to_string())
}
