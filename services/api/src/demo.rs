use crate::infra::{parse_phase, parse_profile};
use clap::{ArgGroup, Args};
use estate_pipeline::config::AppConfig;
use estate_pipeline::error::AppError;
use estate_pipeline::workflows::pipeline::PipelinePhase;
use estate_pipeline::workflows::roster::UnitRosterImporter;
use estate_pipeline::workflows::scoring::{
    BuildingProfile, BuildingSummary, EnergyClass, RentalConfiguration, RentalStrategy, Room,
    ScoringProfile, TrafficLightEngine, UnitFinancials, UnitPhysicalAttributes, UnitProfile,
    VacancyStatus,
};
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "roster"])))]
pub(crate) struct AssessArgs {
    /// Building profile as JSON
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Unit roster CSV export, one unit per row
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Building identifier used with --roster
    #[arg(long)]
    pub(crate) building_id: Option<String>,
    /// City for units whose roster row leaves it blank
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Building-wide renovation budget used with --roster
    #[arg(long, default_value_t = 0.0)]
    pub(crate) building_renovation: f64,
    /// Pipeline phase whose scoring profile applies
    #[arg(long, value_parser = parse_phase)]
    pub(crate) phase: Option<PipelinePhase>,
    /// Explicit scoring profile (pre_check, live_preview, full); wins over --phase
    #[arg(long, value_parser = parse_profile)]
    pub(crate) profile: Option<ScoringProfile>,
    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference year for building ages (defaults to the configured or current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = TrafficLightEngine::from_config(&config.scoring);

    let building = match (args.input, args.roster) {
        (Some(path), _) => {
            let file = File::open(path)?;
            serde_json::from_reader::<_, BuildingProfile>(file)?
        }
        (None, Some(path)) => UnitRosterImporter::building_from_path(
            path,
            args.building_id,
            args.city,
            args.building_renovation,
        )?,
        // clap enforces one source
        (None, None) => BuildingProfile::default(),
    };

    let profile = args
        .profile
        .or_else(|| args.phase.map(PipelinePhase::scoring_profile))
        .unwrap_or(engine.profile());
    let summary = engine
        .assess_building_with_profile(&building, profile)
        .summary(profile);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        render_building_summary(&summary);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let mut scoring = config.scoring;
    if args.year.is_some() {
        scoring.reference_year = args.year;
    }
    let engine = TrafficLightEngine::from_config(&scoring);
    let building = sample_building();

    println!("Traffic-light scoring demo");
    println!(
        "Building {} with {} units, reference year {}",
        building.id,
        building.units.len(),
        engine.current_year()
    );

    for phase in [PipelinePhase::PreCheck, PipelinePhase::PurchaseDecision] {
        let profile = phase.scoring_profile();
        println!("\n== {} ({} profile) ==", phase.label(), profile);
        let summary = engine
            .assess_building_with_profile(&building, profile)
            .summary(profile);
        render_building_summary(&summary);
    }

    Ok(())
}

fn render_building_summary(summary: &BuildingSummary) {
    println!(
        "Building {} | {} units | profile {}",
        summary.building_id, summary.unit_count, summary.profile
    );
    println!(
        "Total investment {:.0} | aggregate gross yield {:.2}%",
        summary.total_investment, summary.aggregate_yield
    );

    println!("\nAxis overview (weighted | worst case)");
    for entry in &summary.axes {
        let weighted = match &entry.weighted {
            Some(score) => format!("{:.1} {}", score.value, score.status_label),
            None => "n/a".to_string(),
        };
        let marker = if entry.diverges { "  <- views disagree" } else { "" };
        println!(
            "- {}: {} | {:.1} {}{}",
            entry.axis_label,
            weighted,
            entry.worst_case.value,
            entry.worst_case.status_label,
            marker
        );
        if !entry.red_units.is_empty() {
            println!("  red units: {}", entry.red_units.join(", "));
        }
    }

    println!("\nUnits");
    for unit in &summary.units {
        let scores: Vec<String> = unit
            .scores
            .iter()
            .map(|score| {
                format!(
                    "{} {:.1} {}",
                    score.axis_label, score.value, score.status_label
                )
            })
            .collect();
        let rent = match unit.monthly_rent {
            Some(rent) => format!("rent {rent:.0}/month"),
            None => "rent not determined".to_string(),
        };
        println!(
            "- {}: {} | {} | gross yield {:.2}%",
            unit.unit_id,
            scores.join(", "),
            rent,
            unit.gross_yield
        );
    }
}

fn sample_building() -> BuildingProfile {
    let unit = |id: &str, price: f64, class: EnergyClass, year: i32, rental| UnitProfile {
        id: id.to_string(),
        financials: UnitFinancials {
            living_area_sqm: 72.0,
            purchase_price: price,
            renovation_budget: price * 0.08,
            furnishing_budget: 6_000.0,
            hoa_fees_landlord: 160.0,
            hoa_fees_reserve: 45.0,
        },
        attributes: UnitPhysicalAttributes {
            energy_class: Some(class),
            construction_year: Some(year),
            city: String::new(),
            heating_type: Some("District Heating".to_string()),
            energy_consumption_kwh: Some(95.0),
        },
        rental,
    };

    BuildingProfile {
        id: "Lindenstrasse 12".to_string(),
        city: Some("Berlin".to_string()),
        renovation_budget: 45_000.0,
        units: vec![
            unit(
                "WE-01",
                235_000.0,
                EnergyClass::B,
                2012,
                RentalConfiguration {
                    planned_rent: Some(1_050.0),
                    ..RentalConfiguration::default()
                },
            ),
            unit(
                "WE-02",
                198_000.0,
                EnergyClass::C,
                2012,
                RentalConfiguration {
                    strategy: RentalStrategy::SharedRooms,
                    rooms: vec![
                        Room {
                            name: "Room 1".to_string(),
                            size_sqm: 14.0,
                            rent: 420.0,
                        },
                        Room {
                            name: "Room 2".to_string(),
                            size_sqm: 17.5,
                            rent: 480.0,
                        },
                    ],
                    ..RentalConfiguration::default()
                },
            ),
            unit(
                "WE-03",
                254_000.0,
                EnergyClass::G,
                1962,
                RentalConfiguration {
                    vacancy_status: VacancyStatus::Rented,
                    current_rent: Some(690.0),
                    ..RentalConfiguration::default()
                },
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_pipeline::workflows::scoring::effective_monthly_rent;

    #[test]
    fn sample_building_scores_every_unit_under_both_demo_profiles() {
        let engine = TrafficLightEngine::new(ScoringProfile::PreCheck, 2025);
        let building = sample_building();

        for phase in [PipelinePhase::PreCheck, PipelinePhase::PurchaseDecision] {
            let profile = phase.scoring_profile();
            let summary = engine
                .assess_building_with_profile(&building, profile)
                .summary(profile);
            assert_eq!(summary.unit_count, 3);
            assert_eq!(summary.axes.len(), 4);
            assert!(summary.axes.iter().all(|entry| entry.weighted.is_some()));
        }
    }

    #[test]
    fn shared_room_sample_earns_room_rents() {
        let building = sample_building();
        assert_eq!(effective_monthly_rent(&building.units[1].rental), Some(900.0));
    }
}
