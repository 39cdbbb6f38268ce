
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Local CMS proxy while developing
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

/// CMS collection holding the awareness topics.
pub const TOPICS_COLLECTION: &str = "cyberawarenesstopics";

/// How many same-category topics the detail page lists.
pub const RELATED_TOPICS_LIMIT: usize = 3;

/// Simulated latency of the contact form submission.
pub const SUBMIT_DELAY_MS: u32 = 1500;

/// How long the "message sent" confirmation stays before the form resets.
pub const CONFIRMATION_WINDOW_MS: u32 = 3000;

/// Fraction of an element that has to be in view before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay between consecutive cards revealing in a grid.
pub const REVEAL_STAGGER_MS: u32 = 100;
