//! Fixed demo sequence exercising the registry and its reports.

use anyhow::Result;
use crossterm::style::Stylize;
use garden_core::{
    config::{AppConfig, ReportFormat},
    GardenManager, GardenStats,
};

struct Planting {
    owner: &'static str,
    tag: &'static str,
    name: &'static str,
    age: i64,
    color: Option<&'static str>,
    prize_points: Option<u32>,
}

const PLANTINGS: &[Planting] = &[
    Planting {
        owner: "Alice",
        tag: "Plant",
        name: "Oak Tree",
        age: 101,
        color: None,
        prize_points: None,
    },
    Planting {
        owner: "Alice",
        tag: "FloweringPlant",
        name: "Rose",
        age: 26,
        color: Some("Red"),
        prize_points: None,
    },
    Planting {
        owner: "Alice",
        tag: "PrizeFlower",
        name: "Sunflower",
        age: 51,
        color: Some("Yellow"),
        prize_points: Some(10),
    },
    Planting {
        owner: "Bob",
        tag: "FloweringPlant",
        name: "Tulip",
        age: 12,
        color: Some("Pink"),
        prize_points: None,
    },
    Planting {
        owner: "Bob",
        tag: "Plant",
        name: "Thistle",
        age: -3,
        color: None,
        prize_points: None,
    },
    Planting {
        owner: "Alice",
        tag: "Succulent",
        name: "Aloe",
        age: 8,
        color: None,
        prize_points: None,
    },
    Planting {
        owner: "Carol",
        tag: "Plant",
        name: "Fern",
        age: 10,
        color: None,
        prize_points: None,
    },
];

/// Run the demo, printing reports to stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    banner(config, "Garden Management System Demo");

    let mut manager = GardenManager::new();
    populate(&mut manager);

    if let Some(garden) = manager.get_garden_by_owner("Alice") {
        let stats = GardenStats::with_style(garden, config.report.style());
        match config.report.format {
            ReportFormat::Text => println!("{}", stats.generate_report()),
            ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&stats.summary())?),
        }
    }

    let network = manager.generate_network_report();
    match config.report.format {
        ReportFormat::Text => println!("{}", network.render(&config.report.style())),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&network)?),
    }

    Ok(())
}

/// Register the demo gardens, plant them, bloom and grow them, and walk the error paths.
fn populate(manager: &mut GardenManager) {
    // Rejections below are reported by the registry itself; the demo carries on.
    let _ = manager.create_garden("Wonderland", "Alice");
    let _ = manager.create_garden("Greenhouse", "Bob");
    let _ = manager.create_garden("Looking Glass", "Alice");

    for planting in PLANTINGS {
        let _ = manager.add_plant_tagged(
            planting.owner,
            planting.tag,
            planting.name,
            planting.age,
            planting.color,
            planting.prize_points,
        );
    }

    if let Some(garden) = manager.get_garden_by_owner("Alice") {
        for plant in garden.plants() {
            plant.bloom();
        }
    }

    let _ = manager.grow_garden("Alice", 1);
    let _ = manager.grow_garden("Bob", -2);
    let _ = manager.grow_garden("Carol", 1);
}

fn banner(config: &AppConfig, title: &str) {
    let title = format!("🌱 {title} 🌱");
    if config.report.color {
        println!("\n {}\n", title.as_str().bold().white());
    } else {
        println!("\n {title}\n");
    }
}
