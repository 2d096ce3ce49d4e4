/// Which surface the widget is showing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize,
)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(rename_all = "lowercase")]
pub enum WidgetState {
    #[default]
    Welcome,
    Chatting,
    History,
    Faq,
}
