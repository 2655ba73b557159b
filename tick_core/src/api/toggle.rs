/// Where the toggle endpoint lives. A `PATCH` with a `done` query parameter;
/// the server preserves every field the query doesn't mention.
pub static PATH: &str = "/api/todo/:id";

/// Construct a path given a todo ID.
pub fn path(id: i64) -> String {
    PATH.replace(":id", &id.to_string())
}
