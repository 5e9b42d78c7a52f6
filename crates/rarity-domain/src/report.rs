//! Text rendering of the rankings and statistics reports

use crate::error::RarityError;
use crate::item::display_value;
use crate::ranking::{format_display_name, pad_rank, Ranking};
use crate::statistics::TraitStatistics;

const RULE: &str = "-------------------------------------------------------------";

/// Placeholder replaced by the item identifier in a [`LinkTemplate`]
pub const ID_PLACEHOLDER: &str = "{id}";

/// Default item link
pub const DEFAULT_LINK_TEMPLATE: &str = "https://ethscriptions.com/ethscriptions/{id}";

/// URL pattern for the per-item link in the rankings report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate(String);

impl LinkTemplate {
    /// Parse a template; it must contain `{id}`
    pub fn new(template: impl Into<String>) -> Result<Self, RarityError> {
        let template = template.into();
        if !template.contains(ID_PLACEHOLDER) {
            return Err(RarityError::InvalidLinkTemplate(template));
        }
        Ok(Self(template))
    }

    /// Link for an identifier
    pub fn render(&self, id: &str) -> String {
        self.0.replace(ID_PLACEHOLDER, id)
    }
}

impl Default for LinkTemplate {
    fn default() -> Self {
        Self(DEFAULT_LINK_TEMPLATE.to_string())
    }
}

/// Render one line per ranked entry
///
/// `Rank <padded> - <name> | Rarest trait = <type> - <value> | Link: <url>`
pub fn render_rankings(ranking: &Ranking<'_>, link: &LinkTemplate) -> String {
    let width = ranking.width();
    let mut out = String::new();

    for entry in &ranking.entries {
        let name = format_display_name(entry.item.name.as_deref().unwrap_or(""), width);
        out.push_str(&format!(
            "Rank {} - {} | Rarest trait = {} - {} | Link: {}\n",
            pad_rank(entry.rank, width),
            name,
            entry.rarest_trait.trait_type,
            display_value(entry.rarest_trait.value.as_ref()),
            link.render(&entry.item.id.to_string()),
        ));
    }

    out
}

/// Render the statistics report
///
/// Featured traits get their own section ahead of the regular traits when
/// present.
pub fn render_statistics(stats: &TraitStatistics) -> String {
    let n = stats.total_items;
    let mut lines: Vec<String> = Vec::new();

    if stats.has_featured() {
        lines.push(RULE.to_string());
        lines.push("Rarity Scores for Traits (Featured Artist traits shown separately):".to_string());
        lines.push(RULE.to_string());
        lines.push("NOTE: Featured Artist traits are excluded from rarity calculations".to_string());
        lines.push("to prevent inflation of common trait rarity scores.".to_string());
        lines.push(String::new());
        lines.push("FEATURED ARTIST TRAITS (not included in rarity calculations):".to_string());
        for featured in &stats.featured {
            lines.push(format!(
                "{} - {} | frequency = {} / {} (excluded from scoring)",
                featured.trait_type,
                display_value(featured.value.as_ref()),
                featured.count,
                n
            ));
        }
        lines.push(String::new());
        lines.push("REGULAR TRAITS (used in rarity calculations):".to_string());
    } else {
        lines.push(RULE.to_string());
        lines.push("Rarity Scores for Traits:".to_string());
        lines.push(RULE.to_string());
    }

    for entry in &stats.regular {
        lines.push(format!(
            "{} - {} | rarity score = {:.2} | frequency = {} / {}",
            entry.trait_type,
            entry.value,
            stats.score_of(entry),
            entry.count,
            n
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TraitConfig;
    use crate::frequency::TraitFrequencyTable;
    use crate::item::{Item, ItemId};
    use crate::ranking::rank_items;
    use crate::scoring::score_items;

    fn sample() -> Vec<Item> {
        vec![
            Item::new("0xaaa", "Darkness #1").with_attribute("Hat", "Cap"),
            Item::new("0xbbb", "Darkness #2").with_attribute("Featured Artist", "Alice"),
            Item::new("0xccc", "Darkness #3")
                .with_attribute("Hat", "Crown")
                .with_attribute("Eyes", "Red"),
        ]
    }

    #[test]
    fn test_rankings_lines() {
        let items = sample();
        let config = TraitConfig::default();
        let table = TraitFrequencyTable::aggregate(&items, &config);
        let ranking = rank_items(score_items(&items, &table, &config), &items, &config);
        let text = render_rankings(&ranking, &LinkTemplate::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Rank 1 - Darkness #2 | Rarest trait = Featured Artist - Alice | Link: https://ethscriptions.com/ethscriptions/0xbbb"
        );
        assert_eq!(
            lines[1],
            "Rank 2 - Darkness #3 | Rarest trait = Hat - Crown | Link: https://ethscriptions.com/ethscriptions/0xccc"
        );
        assert!(lines[2].starts_with("Rank 3 - Darkness #1 |"));
    }

    #[test]
    fn test_rankings_link_for_null_and_missing_ids() {
        let mut null_id = Item::new("", "Null #1").with_attribute("Hat", "Crown");
        null_id.id = ItemId::Null;
        let mut missing_id = Item::new("", "Missing #2").with_attribute("Hat", "Cap");
        missing_id.id = ItemId::Missing;
        let items = vec![null_id, missing_id];
        let config = TraitConfig::default();
        let table = TraitFrequencyTable::aggregate(&items, &config);
        let ranking = rank_items(score_items(&items, &table, &config), &items, &config);
        let text = render_rankings(&ranking, &LinkTemplate::default());
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].ends_with("| Link: https://ethscriptions.com/ethscriptions/None"));
        assert!(lines[1].ends_with("| Link: https://ethscriptions.com/ethscriptions/"));
    }

    #[test]
    fn test_statistics_with_featured_section() {
        let items = sample();
        let config = TraitConfig::default();
        let table = TraitFrequencyTable::aggregate(&items, &config);
        let text = render_statistics(&TraitStatistics::collect(&items, &table, &config));

        assert!(text.contains("FEATURED ARTIST TRAITS (not included in rarity calculations):"));
        assert!(text.contains("Featured Artist - Alice | frequency = 1 / 3 (excluded from scoring)"));
        assert!(text.contains("REGULAR TRAITS (used in rarity calculations):"));
        assert!(text.contains("Eyes - Red | rarity score = 3.00 | frequency = 1 / 3"));
        assert!(text.ends_with("Eyes - Red | rarity score = 3.00 | frequency = 1 / 3\n"));
    }

    #[test]
    fn test_statistics_without_featured_section() {
        let items = vec![
            Item::new("1", "One").with_attribute("Color", "A"),
            Item::new("2", "Two").with_attribute("Color", "A"),
            Item::new("3", "Three").with_attribute("Color", "B"),
        ];
        let config = TraitConfig::default();
        let table = TraitFrequencyTable::aggregate(&items, &config);
        let text = render_statistics(&TraitStatistics::collect(&items, &table, &config));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Rarity Scores for Traits:");
        assert_eq!(lines[3], "Color - B | rarity score = 3.00 | frequency = 1 / 3");
        assert_eq!(lines[4], "Color - A | rarity score = 1.50 | frequency = 2 / 3");
        assert!(!text.contains("FEATURED"));
    }

    #[test]
    fn test_link_template_requires_placeholder() {
        assert!(LinkTemplate::new("https://example.com/").is_err());
        let link = LinkTemplate::new("https://example.com/{id}/view").unwrap();
        assert_eq!(link.render("42"), "https://example.com/42/view");
    }
}
