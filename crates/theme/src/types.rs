use serde::{Deserialize, Serialize};

/// Branding options recognized by the widget. Persisted as opaque JSON;
/// anything the file carries beyond these keys is ignored on resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub primary_gradient: String,
    pub secondary_gradient: String,
    pub accent_color: String,
    pub logo_url: String,
    pub brand_name: String,
    pub welcome_message: String,
    pub quick_actions: Vec<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_images: Option<Vec<String>>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_gradient: "from-[#5c108a] to-[#4a0d70]".to_string(),
            secondary_gradient: "from-[#5c108a] to-[#4a0d70]".to_string(),
            accent_color: "[#5c108a]".to_string(),
            logo_url: "https://space.bouncewatch.com/images/399663/Plum-Goodness-logo.jpg"
                .to_string(),
            brand_name: "Plum Goodness".to_string(),
            welcome_message: "How can we help you today?".to_string(),
            quick_actions: vec![
                "Ask a question".to_string(),
                "Track my order".to_string(),
                "New arrivals".to_string(),
                "Get support".to_string(),
            ],
            badge_images: Some(vec![
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTLSSFJG6FMzugKEAqNhAq9Pp3ux_9oR2LwMQ&s"
                    .to_string(),
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQ4GWy-pvv8ROWnE0k8KwKcdOb78ebwqBoDBA&s"
                    .to_string(),
            ]),
        }
    }
}
