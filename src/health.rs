//! Liveness probe for whatever hosts the game.

pub const STATUS_OK: &str = "ok";

/// Always `"ok"`: the game has no external dependencies that can go down.
pub fn status() -> &'static str {
    STATUS_OK
}

/// The probe as a one-line JSON document, e.g. `{"status":"ok"}`.
pub fn status_json() -> String {
    format!("{{\"status\":\"{}\"}}", status())
}
