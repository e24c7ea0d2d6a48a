use serde::Serialize;

pub const SEARCH_BASE_URL: &str = "https://scryfall.com/search?q=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ImageLookup {
    Found(String),
    NotFound,
    TransientError(String),
}

/// Capability for resolving a card name to an image URL.
pub trait CardImageSource {
    fn lookup(&self, card_name: &str) -> ImageLookup;
}

/// Never touches the network. Every card falls back to its search link.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineImages;

impl CardImageSource for OfflineImages {
    fn lookup(&self, _card_name: &str) -> ImageLookup {
        ImageLookup::NotFound
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub name: String,
    pub search_url: String,
    pub image_url: Option<String>,
}

pub fn search_url(card_name: &str) -> String {
    format!("{}{}", SEARCH_BASE_URL, card_name.replace(' ', "+"))
}

pub fn resolve_card<S: CardImageSource + ?Sized>(source: &S, card_name: &str) -> CardLink {
    let image_url = match source.lookup(card_name) {
        ImageLookup::Found(url) => Some(url),
        ImageLookup::NotFound => None,
        ImageLookup::TransientError(reason) => {
            tracing::debug!("Image lookup for '{}' failed: {}", card_name, reason);
            None
        }
    };
    CardLink {
        name: card_name.to_string(),
        search_url: search_url(card_name),
        image_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flaky;

    impl CardImageSource for Flaky {
        fn lookup(&self, _card_name: &str) -> ImageLookup {
            ImageLookup::TransientError("timeout".to_string())
        }
    }

    #[test]
    fn test_search_url_uses_plus_for_spaces() {
        assert_eq!(
            search_url("Veil of Summer"),
            "https://scryfall.com/search?q=Veil+of+Summer"
        );
    }

    #[test]
    fn test_lookup_failure_degrades_to_link() {
        let link = resolve_card(&Flaky, "Sunfall");
        assert_eq!(link.image_url, None);
        assert!(link.search_url.ends_with("Sunfall"));
    }

    #[test]
    fn test_offline_source_never_finds_images() {
        assert_eq!(OfflineImages.lookup("Farewell"), ImageLookup::NotFound);
    }
}
