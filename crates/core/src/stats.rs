#![allow(missing_docs)]

//! Read-only analytics and text reports over gardens and the registry.

use std::{collections::BTreeMap, fmt::Write as _};

use serde::Serialize;

use crate::{
    models::{Garden, Plant, PlantType},
    registry::GardenManager,
};

/// Smallest column width that still fits the column titles.
pub const MIN_COLUMN_WIDTH: usize = 4;

/// Layout settings for rendered reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStyle {
    /// Width every column is padded to.
    pub column_width: usize,
    /// Text shown where a plant has no value for a column.
    pub placeholder: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            column_width: 15,
            placeholder: "-".to_string(),
        }
    }
}

impl ReportStyle {
    /// Pads each cell to the column width. Cells are cut to `width - 1`
    /// characters so neighbouring columns stay separated.
    fn row(&self, cells: &[&str]) -> String {
        let width = self.column_width;
        let mut line = String::from(" ");
        for cell in cells {
            let cell: String = cell.chars().take(width.saturating_sub(1)).collect();
            let _ = write!(line, "{cell:<width$}");
        }
        line.trim_end().to_string()
    }

    fn rule(&self, columns: usize) -> String {
        format!(" {}", "-".repeat(columns * self.column_width.saturating_sub(1)))
    }
}

/// One plant as it appears in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantRow {
    pub name: String,
    pub age: u64,
    pub plant_type: PlantType,
    pub color: Option<String>,
    pub prize_points: Option<u32>,
    pub score: u64,
}

impl From<&Plant> for PlantRow {
    fn from(plant: &Plant) -> Self {
        Self {
            name: plant.name().to_string(),
            age: plant.age(),
            plant_type: plant.plant_type(),
            color: plant.color().map(str::to_string),
            prize_points: plant.prize_points(),
            score: plant.score(),
        }
    }
}

/// Aggregate figures for a single garden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GardenSummary {
    pub owner: String,
    pub garden: String,
    pub plants: Vec<PlantRow>,
    pub added_plants: usize,
    pub total_growth: u64,
    pub plant_types: BTreeMap<PlantType, usize>,
    pub score: u64,
}

/// Statistics view borrowing a garden. Never mutates it.
#[derive(Debug, Clone)]
pub struct GardenStats<'a> {
    garden: &'a Garden,
    style: ReportStyle,
}

impl<'a> GardenStats<'a> {
    pub fn new(garden: &'a Garden) -> Self {
        Self::with_style(garden, ReportStyle::default())
    }

    pub fn with_style(garden: &'a Garden, style: ReportStyle) -> Self {
        Self { garden, style }
    }

    pub fn garden(&self) -> &'a Garden {
        self.garden
    }

    /// Rows for every plant in insertion order.
    pub fn plant_rows(&self) -> Vec<PlantRow> {
        self.garden.plants().iter().map(PlantRow::from).collect()
    }

    /// Plant table: column titles, a rule, then one line per plant.
    pub fn display_plants_list(&self) -> String {
        let style = &self.style;
        let mut lines = vec![
            style.row(&["Name", "Age", "Color", "Points"]),
            style.rule(4),
        ];
        for plant in self.garden.plants() {
            let age = format!("{} days", plant.age());
            let points = plant
                .prize_points()
                .map(|points| points.to_string())
                .unwrap_or_else(|| style.placeholder.clone());
            lines.push(style.row(&[
                plant.name(),
                age.as_str(),
                plant.color().unwrap_or(style.placeholder.as_str()),
                points.as_str(),
            ]));
        }
        lines.join("\n")
    }

    pub fn stats_added_plants(&self) -> usize {
        self.garden.len()
    }

    pub fn stats_total_growth(&self) -> u64 {
        self.garden.total_growth()
    }

    /// Count per plant type. All three types are always present.
    pub fn stats_plant_types(&self) -> BTreeMap<PlantType, usize> {
        let mut counts: BTreeMap<PlantType, usize> =
            PlantType::ALL.into_iter().map(|kind| (kind, 0)).collect();
        for plant in self.garden.plants() {
            *counts.entry(plant.plant_type()).or_default() += 1;
        }
        counts
    }

    pub fn stats_score(&self) -> u64 {
        self.garden.calculate_score()
    }

    pub fn summary(&self) -> GardenSummary {
        GardenSummary {
            owner: self.garden.owner().to_string(),
            garden: self.garden.name().to_string(),
            plants: self.plant_rows(),
            added_plants: self.stats_added_plants(),
            total_growth: self.stats_total_growth(),
            plant_types: self.stats_plant_types(),
            score: self.stats_score(),
        }
    }

    /// Full garden report: header, plant list, then the aggregate lines.
    pub fn generate_report(&self) -> String {
        let owner = self.garden.owner();
        let types = self
            .stats_plant_types()
            .into_iter()
            .map(|(kind, count)| format!("{count} {kind}"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut report = String::new();
        let _ = writeln!(report, " {owner}'s Garden Report ({})", self.garden.name());
        let _ = writeln!(report);
        let _ = writeln!(report, " Plants in garden");
        let _ = writeln!(report);
        let _ = writeln!(report, "{}", self.display_plants_list());
        let _ = writeln!(report);
        let _ = writeln!(report, " {owner}'s Garden Stats");
        let _ = writeln!(report, " Plants added: {}", self.stats_added_plants());
        let _ = writeln!(report, " Total growth: {} day(s)", self.stats_total_growth());
        let _ = writeln!(report, " Plant types: {types}");
        let _ = writeln!(report, " Garden score: {}", self.stats_score());
        report
    }
}

/// Score line for one registered garden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkRow {
    pub owner: String,
    pub garden: String,
    pub plants: usize,
    pub score: u64,
}

/// Scores of every registered garden in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkReport {
    pub rows: Vec<NetworkRow>,
    pub total_gardens: usize,
}

impl NetworkReport {
    pub fn from_manager(manager: &GardenManager) -> Self {
        let rows = manager
            .gardens()
            .iter()
            .map(|garden| NetworkRow {
                owner: garden.owner().to_string(),
                garden: garden.name().to_string(),
                plants: garden.len(),
                score: garden.calculate_score(),
            })
            .collect::<Vec<_>>();
        Self {
            total_gardens: rows.len(),
            rows,
        }
    }

    pub fn render(&self, style: &ReportStyle) -> String {
        let mut report = String::new();
        let _ = writeln!(report, " Garden Network Report");
        let _ = writeln!(report);
        let _ = writeln!(report, "{}", style.row(&["Owner", "Garden", "Score"]));
        let _ = writeln!(report, "{}", style.rule(3));
        for row in &self.rows {
            let score = row.score.to_string();
            let line = style.row(&[row.owner.as_str(), row.garden.as_str(), score.as_str()]);
            let _ = writeln!(report, "{line}");
        }
        let _ = writeln!(report);
        let _ = writeln!(report, " Total gardens managed: {}", self.total_gardens);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlantBlueprint;

    fn alice_network() -> GardenManager {
        let mut manager = GardenManager::new();
        manager.create_garden("Wonderland", "Alice").unwrap();
        manager.create_garden("Greenhouse", "Bob").unwrap();
        manager
            .add_plant("Alice", PlantBlueprint::from_tag("Plant", "Oak Tree", 101).unwrap())
            .unwrap();
        manager
            .add_plant(
                "Alice",
                PlantBlueprint::from_tag("FloweringPlant", "Rose", 26)
                    .unwrap()
                    .color("Red"),
            )
            .unwrap();
        manager
            .add_plant(
                "Alice",
                PlantBlueprint::from_tag("PrizeFlower", "Sunflower", 51)
                    .unwrap()
                    .color("Yellow")
                    .prize_points(10),
            )
            .unwrap();
        manager
            .add_plant(
                "Bob",
                PlantBlueprint::from_tag("FloweringPlant", "Tulip", 12)
                    .unwrap()
                    .color("Pink"),
            )
            .unwrap();
        manager.grow_garden("Alice", 1).unwrap();
        manager
    }

    #[test]
    fn plant_list_uses_placeholders() {
        let manager = alice_network();
        let stats = GardenStats::new(manager.get_garden_by_owner("Alice").unwrap());
        let expected = [
            " Name           Age            Color          Points",
            " --------------------------------------------------------",
            " Oak Tree       102 days       -              -",
            " Rose           27 days        Red            -",
            " Sunflower      52 days        Yellow         10",
        ]
        .join("\n");
        assert_eq!(stats.display_plants_list(), expected);
    }

    #[test]
    fn custom_style_changes_layout() {
        let manager = alice_network();
        let style = ReportStyle {
            column_width: 12,
            placeholder: "n/a".to_string(),
        };
        let stats = GardenStats::with_style(manager.get_garden_by_owner("Alice").unwrap(), style);
        let list = stats.display_plants_list();
        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines[1], format!(" {}", "-".repeat(44)));
        assert_eq!(lines[2], " Oak Tree    102 days    n/a         n/a");
    }

    #[test]
    fn long_cells_keep_columns_apart() {
        let mut garden = Garden::new("Wild", "Eve");
        garden.add_plant(Plant::new("Chrysanthemum Supreme", 3));
        let list = GardenStats::new(&garden).display_plants_list();
        assert_eq!(
            list.lines().nth(2),
            Some(" Chrysanthemum  3 days         -              -")
        );

        let style = ReportStyle::default();
        let line = style.row(&["Maximiliana-Rosalind", "Everblooming Orchard", "7"]);
        assert_eq!(line, " Maximiliana-Ro Everblooming O 7");
    }

    #[test]
    fn aggregates_reflect_garden() {
        let manager = alice_network();
        let stats = GardenStats::new(manager.get_garden_by_owner("Alice").unwrap());
        assert_eq!(stats.stats_added_plants(), 3);
        assert_eq!(stats.stats_total_growth(), 1);
        assert_eq!(stats.stats_score(), 60);

        let types = stats.stats_plant_types();
        assert_eq!(types[&PlantType::Plant], 1);
        assert_eq!(types[&PlantType::FloweringPlant], 1);
        assert_eq!(types[&PlantType::PrizeFlower], 1);
    }

    #[test]
    fn plant_types_always_has_every_key() {
        let garden = Garden::new("Bare", "Dana");
        let types = GardenStats::new(&garden).stats_plant_types();
        assert_eq!(types.len(), 3);
        assert!(types.values().all(|count| *count == 0));
    }

    #[test]
    fn report_is_stable_between_calls() {
        let manager = alice_network();
        let stats = GardenStats::new(manager.get_garden_by_owner("Alice").unwrap());
        let first = stats.generate_report();
        assert_eq!(first, stats.generate_report());
        assert!(first.starts_with(" Alice's Garden Report (Wonderland)\n"));
        assert!(first.contains(" Plants added: 3\n"));
        assert!(first.contains(" Total growth: 1 day(s)\n"));
        assert!(first.contains(" Plant types: 1 Plant, 1 FloweringPlant, 1 PrizeFlower\n"));
        assert!(first.contains(" Garden score: 60\n"));
    }

    #[test]
    fn report_tracks_mutations() {
        let mut manager = alice_network();
        let before = GardenStats::new(manager.get_garden_by_owner("Alice").unwrap())
            .generate_report();
        manager.grow_garden("Alice", 2).unwrap();
        let after = GardenStats::new(manager.get_garden_by_owner("Alice").unwrap())
            .generate_report();
        assert_ne!(before, after);
        assert!(after.contains(" Total growth: 3 day(s)\n"));
    }

    #[test]
    fn network_report_lists_gardens_in_registration_order() {
        let manager = alice_network();
        let report = manager.generate_network_report();
        assert_eq!(report.total_gardens, 2);
        assert_eq!(report.rows[0].owner, "Alice");
        assert_eq!(report.rows[0].score, 60);
        assert_eq!(report.rows[1].owner, "Bob");
        assert_eq!(report.rows[1].score, 20);

        let text = report.render(&ReportStyle::default());
        let expected = concat!(
            " Garden Network Report\n",
            "\n",
            " Owner          Garden         Score\n",
            " ------------------------------------------\n",
            " Alice          Wonderland     60\n",
            " Bob            Greenhouse     20\n",
            "\n",
            " Total gardens managed: 2\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn summary_serializes_type_counts_by_name() {
        let manager = alice_network();
        let summary = GardenStats::new(manager.get_garden_by_owner("Bob").unwrap()).summary();
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["plant_types"]["FloweringPlant"], 1);
        assert_eq!(value["plant_types"]["PrizeFlower"], 0);
        assert_eq!(value["plants"][0]["color"], "Pink");
        assert_eq!(value["score"], 20);
    }
}
