use serde::{Deserialize, Serialize};

/// A banner slot on the banners page. Positions run from 1 to 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisementBanner {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: Option<String>,
    pub image: String,
    #[serde(default)]
    pub alt: Option<String>,
    pub position: u8,
    #[serde(default)]
    pub link: Option<String>,
}

impl AdvertisementBanner {
    /// Alt text, falling back to the title.
    pub fn alt_text(&self) -> &str {
        self.alt
            .as_deref()
            .filter(|alt| !alt.is_empty())
            .unwrap_or(&self.title)
    }

    /// Keep only the banners placed at `position`. `None` keeps all of them.
    pub fn at_position(banners: &[Self], position: Option<u8>) -> Vec<Self> {
        banners
            .iter()
            .filter(|banner| position.is_none_or(|p| banner.position == p))
            .cloned()
            .collect()
    }
}

/// A page background takeover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisementBackground {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// `GET /advertisements/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advertisement {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub position: Option<u8>,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
}
