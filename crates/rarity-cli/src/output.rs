//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use rarity_domain::item::display_value;
use rarity_domain::{RarityRun, TraitConfig, TraitStatistics, TraitValue};
use serde_json::{json, Value};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format trait statistics as a table, rarest first.
    pub fn format_statistics_table(&self, stats: &TraitStatistics, limit: Option<usize>) -> String {
        if stats.regular.is_empty() && stats.featured.is_empty() {
            return self.colorize("No traits found.", "yellow");
        }

        let mut sections = Vec::new();

        if stats.has_featured() {
            let mut builder = Builder::default();
            builder.push_record(["Featured Trait", "Value", "Frequency"]);
            for entry in &stats.featured {
                builder.push_record([
                    entry.trait_type.clone(),
                    display_value(entry.value.as_ref()),
                    format!("{} / {}", entry.count, stats.total_items),
                ]);
            }
            sections.push(self.render_table(builder));
            sections.push(self.warning("Featured traits are excluded from rarity calculations"));
        }

        if !stats.regular.is_empty() {
            let shown = limit.unwrap_or(stats.regular.len()).min(stats.regular.len());
            let mut builder = Builder::default();
            builder.push_record(["Trait Type", "Value", "Rarity Score", "Frequency"]);
            for entry in &stats.regular[..shown] {
                builder.push_record([
                    entry.trait_type.clone(),
                    entry.value.to_string(),
                    format!("{:.2}", stats.score_of(entry)),
                    format!("{} / {}", entry.count, stats.total_items),
                ]);
            }
            sections.push(self.render_table(builder));

            if shown < stats.regular.len() {
                sections.push(self.info(&format!("Showing {} of {} traits", shown, stats.regular.len())));
            }
        }

        sections.join("\n")
    }

    /// Format trait statistics as JSON.
    pub fn format_statistics_json(&self, stats: &TraitStatistics, limit: Option<usize>) -> Result<String> {
        let shown = limit.unwrap_or(stats.regular.len()).min(stats.regular.len());

        let featured: Vec<Value> = stats
            .featured
            .iter()
            .map(|f| {
                json!({
                    "trait_type": f.trait_type,
                    "value": f.value.as_ref().map(trait_value_json).unwrap_or(Value::Null),
                    "count": f.count,
                })
            })
            .collect();

        let regular: Vec<Value> = stats.regular[..shown]
            .iter()
            .map(|r| {
                json!({
                    "trait_type": r.trait_type,
                    "value": trait_value_json(&r.value),
                    "count": r.count,
                    "rarity_score": stats.score_of(r),
                })
            })
            .collect();

        let document = json!({
            "total_items": stats.total_items,
            "featured": featured,
            "traits": regular,
        });

        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Summary printed after a rank run.
    pub fn run_summary(&self, run: &RarityRun<'_>, config: &TraitConfig, artifacts: &[&Path]) -> String {
        let mut lines: Vec<String> = artifacts
            .iter()
            .map(|path| self.success(&format!("Wrote {}", path.display())))
            .collect();

        lines.push(self.info(&format!(
            "Ranked {} item(s), {} featured, {} dropped",
            run.ranking.entries.len(),
            run.ranking.featured_count(config),
            run.dropped_count()
        )));

        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn trait_value_json(value: &TraitValue) -> Value {
    match value {
        TraitValue::Text(s) => Value::String(s.clone()),
        TraitValue::Integer(i) => json!(i),
        TraitValue::Float(f) => serde_json::Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        TraitValue::Bool(b) => Value::Bool(*b),
    }
}
