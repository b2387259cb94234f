use regex::Regex;
use std::sync::LazyLock;

// Supabase legacy keys are JWTs: three base64url segments, header starts with eyJ
static JWT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"eyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+").expect("valid JWT pattern")
});

static SECRET_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sb_secret_[A-Za-z0-9_-]+").expect("valid secret key pattern")
});

static BEARER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Bearer\s+[A-Za-z0-9\-_\.]+").expect("valid bearer pattern")
});

static FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(["']?(?:password|apikey|api_key|service_role_key|secret)["']?\s*[:=]\s*)["']?[^"'\s,}]+["']?"#,
    )
    .expect("valid field pattern")
});

/// Strips credentials from text that is about to be shown or logged
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = BEARER_PATTERN.replace_all(message, "Bearer [TOKEN_REDACTED]");
        let scrubbed = JWT_PATTERN.replace_all(&scrubbed, "[JWT_REDACTED]");
        let scrubbed = SECRET_KEY_PATTERN.replace_all(&scrubbed, "[API_KEY_REDACTED]");
        FIELD_PATTERN
            .replace_all(&scrubbed, "${1}[REDACTED]")
            .into_owned()
    }
}
