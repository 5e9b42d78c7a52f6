//! End-to-end tests for the rarity pipeline
//!
//! These run aggregation, scoring, ranking and report rendering together.

use rarity_domain::{compute_rarity, render_rankings, render_statistics, Item, LinkTemplate, RarityError, TraitConfig};

fn color_collection() -> Vec<Item> {
    let mut items = Vec::new();
    for (i, color) in ["A", "A", "A", "A", "A", "B", "B", "B", "C", "C"].iter().enumerate() {
        let n = i + 1;
        items.push(Item::new(format!("0x{:02}", n), format!("Swatch #{}", n)).with_attribute("Color", *color));
    }
    items
}

#[test]
fn test_single_trait_collection() {
    let items = color_collection();
    let config = TraitConfig::default();
    let run = compute_rarity(&items, &config).unwrap();

    assert_eq!(run.table.score("Color", &"A".into()), Some(2.0));
    assert_eq!(run.table.score("Color", &"C".into()), Some(5.0));
    assert!((run.table.score("Color", &"B".into()).unwrap() - 10.0 / 3.0).abs() < 1e-12);

    let rank_c = run.ranking.assignment.rank_of_id("0x09").unwrap();
    let rank_a = run.ranking.assignment.rank_of_id("0x01").unwrap();
    assert!(rank_c < rank_a);

    let rankings = render_rankings(&run.ranking, &LinkTemplate::default());
    let first = rankings.lines().next().unwrap();
    assert_eq!(
        first,
        "Rank 01 - Swatch #09 | Rarest trait = Color - C | Link: https://ethscriptions.com/ethscriptions/0x09"
    );
    assert_eq!(rankings.lines().count(), 10);

    let statistics = render_statistics(&run.statistics);
    assert!(statistics.contains("Color - B | rarity score = 3.33 | frequency = 3 / 10"));
    assert!(statistics.starts_with("-"));
    assert!(!statistics.contains("FEATURED"));
}

#[test]
fn test_featured_item_pinned_to_top() {
    let items = vec![
        Item::new("f", "Guest #1").with_attribute("Featured Artist", "Alice"),
        Item::new("a", "Shade #2").with_attribute("Hat", "Cap").with_attribute("Eyes", "Red"),
        Item::new("b", "Shade #3").with_attribute("Hat", "Cap"),
    ];
    let config = TraitConfig::default();
    let run = compute_rarity(&items, &config).unwrap();

    assert_eq!(run.ranking.width(), 1);
    assert_eq!(run.ranking.assignment.rank_for(&items[0], &config), Some(1));
    assert_eq!(run.ranking.assignment.rank_of_id("a"), Some(2));
    assert_eq!(run.ranking.assignment.rank_of_id("b"), Some(3));

    let rankings = render_rankings(&run.ranking, &LinkTemplate::default());
    let ranks: Vec<&str> = rankings.lines().map(|line| &line[..6]).collect();
    assert_eq!(ranks, vec!["Rank 1", "Rank 2", "Rank 3"]);

    let statistics = render_statistics(&run.statistics);
    assert!(statistics.contains("Featured Artist - Alice | frequency = 1 / 3 (excluded from scoring)"));
}

#[test]
fn test_attributeless_item_is_dropped() {
    let mut items = color_collection();
    items.push(Item::new("0x11", "Swatch #11"));
    let config = TraitConfig::default();
    let run = compute_rarity(&items, &config).unwrap();

    assert_eq!(run.dropped_count(), 1);
    assert_eq!(run.ranking.assignment.rank_of_id("0x11"), None);
    assert!(!render_rankings(&run.ranking, &LinkTemplate::default()).contains("Swatch #11"));

    // N counts every item, including the dropped one
    assert_eq!(run.table.score("Color", &"A".into()), Some(11.0 / 5.0));
}

#[test]
fn test_empty_collection() {
    let result = compute_rarity(&[], &TraitConfig::default());
    assert!(matches!(result, Err(RarityError::EmptyCollection)));
}
