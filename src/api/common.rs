use serde::Deserialize;

/// The `category` parameter, whether it arrives in the query string or a
/// form body. A missing field reads as an empty string.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    #[serde(default)]
    pub category: String,
}

impl CategoryParams {
    /// `None` means "no filter".
    pub fn filter(&self) -> Option<&str> {
        if self.category.is_empty() {
            None
        } else {
            Some(&self.category)
        }
    }
}
