use serde::Deserialize;

/// Entry of `GET /heroes`.
#[derive(Debug, Clone, Deserialize)]
pub struct HeroConstant {
    pub id: i64,
    pub localized_name: String,
}

/// Value of the `GET /constants/items` map (keyed by internal item name).
#[derive(Debug, Clone, Deserialize)]
pub struct ItemConstant {
    pub id: i64,
    #[serde(default)]
    pub dname: Option<String>,
}
