pub struct UiText {
    pub app_title: &'static str,

    // --- Home page ---
    pub search_hint: &'static str,
    pub markets_loading: &'static str,
    pub markets_error: &'static str,
    pub markets_retry: &'static str,
    pub markets_no_match: &'static str,
    pub more_info: &'static str,
    pub close_info: &'static str,
    pub loading: &'static str,
    pub details_error: &'static str,

    // --- Replacement dialog ---
    pub max_coins_title: &'static str,
    pub max_coins_body: &'static str,
    pub max_coins_confirm: &'static str,
    pub max_coins_cancel: &'static str,

    // --- Live reports ---
    pub reports_title: &'static str,
    pub reports_empty: &'static str,
    pub reports_waiting: &'static str,
    pub reports_tracking: &'static str,
    pub reports_window: &'static str,
    pub reports_since_reset: &'static str,

    // --- About ---
    pub about_body: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Coin Watch",

    search_hint: "Search coins...",
    markets_loading: "Loading coins...",
    markets_error: "Failed to load coins. Please try again.",
    markets_retry: "Retry",
    markets_no_match: "No coins match your search.",
    more_info: "MORE INFO",
    close_info: "CLOSE INFO",
    loading: "Loading...",
    details_error: "Failed to load coin details.",

    max_coins_title: "Maximum coins reached",
    max_coins_body: "You can track up to 5 coins. Choose one to replace with",
    max_coins_confirm: "Replace",
    max_coins_cancel: "Cancel",

    reports_title: "Live Reports",
    reports_empty: "No coins selected. Pick up to 5 coins on the Home page, then come back here.",
    reports_waiting: "Waiting for the first prices...",
    reports_tracking: "Tracking",
    reports_window: "Window",
    reports_since_reset: "since reset",

    about_body: "Coin Watch tracks live prices for up to five cryptocurrencies. \
        Select coins on the Home page and open Live Reports for a rolling chart \
        refreshed every two seconds.",
};
