use serde::Deserialize;

/// Query parameters accepted by the public listings page.
#[derive(Debug, Default, Deserialize)]
pub struct ListingsQuery {
    /// Restrict to one placement tier.
    pub tier: Option<String>,
    pub search: Option<String>,
}
