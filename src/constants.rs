// src/constants.rs
//
// Application-wide constants shared by the client, the CLI and the form validation.

/// Base URL of the public NoteHub API.
pub const DEFAULT_BASE_URL: &str = "https://notehub-public.goit.study/api";

/// Page size requested when the caller does not specify one.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Request timeout written into a freshly created config file.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "NOTEHUB_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV_VAR: &str = "NOTEHUB_BASE_URL";

/// Minimum number of characters in a note title.
pub const TITLE_MIN_CHARS: usize = 3;

/// Maximum number of characters in a note title.
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum number of characters in a note body.
pub const CONTENT_MAX_CHARS: usize = 500;

/// Delay in milliseconds after spawning the browser before the temp dir may be dropped.
///
/// The browser reads the rendered file asynchronously; removing the temporary directory
/// right away can leave it with an empty page.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
