//! Health probe

/// Fixed-string liveness check.
pub async fn hello() -> &'static str {
    "hello"
}
