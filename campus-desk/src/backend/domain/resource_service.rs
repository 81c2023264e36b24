//! Resource hub: saved teaching resources and tag-based suggestions.

use log::debug;
use shared::Resource;

use super::errors::DeskError;
use super::keywords::extract_keywords;
use super::record_table::escape_html;

pub const EMPTY_RESOURCES_HTML: &str = "<div class=\"muted\">No resources added yet.</div>";

/// Split comma-separated tags, trimming, lowercasing and dropping empties
pub fn parse_tags(tags_input: &str) -> Vec<String> {
    tags_input
        .split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct ResourceHub {
    resources: Vec<Resource>,
}

impl ResourceHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Save a resource. The trimmed title must not be empty.
    pub fn add(&mut self, title: &str, tags_input: &str, added: String) -> Result<&Resource, DeskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DeskError::EmptyTitle);
        }
        self.resources.push(Resource {
            title: title.to_string(),
            tags: parse_tags(tags_input),
            added,
        });
        debug!("Resource hub now holds {} resources", self.resources.len());
        Ok(&self.resources[self.resources.len() - 1])
    }

    /// Resources with at least one tag among the topic's keywords
    pub fn suggest(&self, topic: &str) -> Vec<&Resource> {
        let keywords = extract_keywords(topic);
        self.resources
            .iter()
            .filter(|resource| {
                resource
                    .tags
                    .iter()
                    .any(|tag| keywords.contains(&tag.to_lowercase()))
            })
            .collect()
    }

    /// Numbered list markup, or a placeholder when nothing is saved
    pub fn render_html(&self) -> String {
        if self.resources.is_empty() {
            return EMPTY_RESOURCES_HTML.to_string();
        }
        self.resources
            .iter()
            .enumerate()
            .map(|(index, resource)| {
                format!(
                    "<div style=\"padding:8px;border-radius:8px;margin-bottom:6px;background:#f8fafc\">{}. <strong>{}</strong><div class=\"muted\">Tags: {} • {}</div></div>",
                    index + 1,
                    escape_html(&resource.title),
                    escape_html(&resource.tags.join(", ")),
                    resource.added
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" Biology, Plants ,,LEAF "), vec!["biology", "plants", "leaf"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_add_requires_title() {
        let mut hub = ResourceHub::new();
        assert_eq!(hub.add("  ", "biology", "now".to_string()).unwrap_err(), DeskError::EmptyTitle);
        assert!(hub.resources().is_empty());
    }

    #[test]
    fn test_suggest_matches_tags_against_keywords() {
        let mut hub = ResourceHub::new();
        hub.add("Leaf diagram", "Photosynthesis, biology", "t1".to_string()).unwrap();
        hub.add("Fraction strips", "maths", "t2".to_string()).unwrap();

        let titles: Vec<&str> = hub.suggest("Photosynthesis").iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Leaf diagram"]);
        assert!(hub.suggest("Volcanoes").is_empty());
    }

    #[test]
    fn test_render_html() {
        let mut hub = ResourceHub::new();
        assert_eq!(hub.render_html(), EMPTY_RESOURCES_HTML);

        hub.add("Leaf <diagram>", "biology", "t1".to_string()).unwrap();
        assert!(hub.render_html().contains("1. <strong>Leaf &lt;diagram&gt;</strong>"));
        assert!(hub.render_html().contains("Tags: biology • t1"));
    }
}
