use std::sync::LazyLock;

pub struct UiText {
    pub title: String,

    // --- Form ---
    pub label_api_key: String,
    pub hint_api_key: String,
    pub label_address: String,
    pub hint_address: String,
    pub label_max_minutes: String,
    pub label_respect_state: String,
    pub hover_respect_state: String,
    pub label_routing: String,

    pub button_calculate: String,
    pub button_load_data: String,

    // --- Status ---
    pub status_initial: String,
    pub status_data_missing: String,
    pub label_dataset: String,
    pub label_records_loaded: String,
    pub label_legend_fast: String,
    pub label_legend_slow: String,
    pub hover_open_map: String,
    pub button_open_map: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    title: "Driving Time Radius Calculator".to_string(),

    label_api_key: "Google Maps API Key:".to_string(),
    hint_api_key: "Geocoding + Routes enabled key".to_string(),
    label_address: "Origin Address:".to_string(),
    hint_address: "e.g. 1600 Amphitheatre Pkwy, Mountain View, CA".to_string(),
    label_max_minutes: "Max Driving Time (minutes):".to_string(),
    label_respect_state: "Respect State Lines".to_string(),
    hover_respect_state: "Only keep zip codes in the same state as the origin".to_string(),
    label_routing: "Routing:".to_string(),

    button_calculate: "Calculate".to_string(),
    button_load_data: "Load Data".to_string(),

    status_initial: "Load the zip code data, then enter an address and press Calculate."
        .to_string(),
    status_data_missing: "No data loaded".to_string(),
    label_dataset: "Dataset:".to_string(),
    label_records_loaded: "zip code areas loaded".to_string(),
    label_legend_fast: "fast".to_string(),
    label_legend_slow: "slow".to_string(),
    hover_open_map: "Open the last generated map in the browser".to_string(),
    button_open_map: "Open Map".to_string(),
});
