pub const GREETING: &str = "Hello! The server is up and running.";

/// GET /hello
pub async fn hello() -> &'static str {
    GREETING
}
