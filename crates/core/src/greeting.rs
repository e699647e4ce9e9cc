/// Name used when the caller does not supply one.
pub const DEFAULT_GREETING_NAME: &str = "World";

/// Build the greeting message for `name`, falling back to
/// [`DEFAULT_GREETING_NAME`].
///
/// An explicitly empty name is kept as-is.
pub fn greeting(name: Option<&str>) -> String {
    format!("Hello, {}!", name.unwrap_or(DEFAULT_GREETING_NAME))
}
