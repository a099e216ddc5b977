//! Static site content. The menu and timeline are configuration the page
//! consumes, not data it computes, so they live in an embedded JSON document
//! rather than in component code.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub year: String,
    pub title: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteContent {
    pub owner: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub menu: Vec<MenuItem>,
    pub experiences: Vec<ExperienceEntry>,
}

static SITE_CONTENT: LazyLock<SiteContent> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../content/site.json"))
        .expect("embedded site content should be valid JSON")
});

pub fn site_content() -> &'static SiteContent {
    &SITE_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = site_content();
        assert!(!content.owner.is_empty());
        assert!(!content.menu.is_empty());
        assert!(!content.experiences.is_empty());
    }

    #[test]
    fn menu_order_is_display_order() {
        let titles: Vec<_> = site_content().menu.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles[0], "Home");
        assert_eq!(titles.last(), Some(&"Resume"));
    }

    #[test]
    fn content_round_trips_through_json() {
        let content = site_content();
        let encoded = serde_json::to_string(content).expect("content should serialize");
        let decoded: SiteContent = serde_json::from_str(&encoded).expect("should parse back");
        assert_eq!(&decoded, content);
    }
}
