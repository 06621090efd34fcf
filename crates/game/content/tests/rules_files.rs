use std::fs;

use facility_content::{ContentFactory, RulesLoader};
use facility_core::{Faction, RoleId, RulesError};
use tempfile::TempDir;

const CUSTOM_RULES: &str = r#"
replenish_tickets = 3

[[teams]]
faction = "foundation_forces"
max_wave_size = 10
leader = "ntf_captain"
member = "ntf_sergeant"

[[teams]]
faction = "chaos_insurgency"
max_wave_size = 7
leader = "chaos_repressor"
member = "chaos_rifleman"
"#;

#[test]
fn loads_rules_from_data_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rules.toml"), CUSTOM_RULES).unwrap();

    let rules = ContentFactory::new(dir.path()).load_rules().unwrap();

    assert_eq!(rules.replenish_tickets, 3);
    assert_eq!(rules.max_wave_size(Faction::ChaosInsurgency), 7);
    assert_eq!(
        rules.team(Faction::FoundationForces).unwrap().member,
        RoleId::NtfSergeant
    );
}

#[test]
fn rejects_leader_from_another_faction() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(&path, CUSTOM_RULES.replace("chaos_repressor", "scientist")).unwrap();

    let err = RulesLoader::load(&path).unwrap_err();

    assert!(err.to_string().contains("rules.toml"));
    assert!(err.to_string().contains("scientist"));
}

#[test]
fn rejects_table_missing_a_spawnable_faction() {
    let only_foundation = CUSTOM_RULES
        .split("[[teams]]")
        .take(2)
        .collect::<Vec<_>>()
        .join("[[teams]]");

    let err = RulesLoader::from_toml_str(&only_foundation).unwrap_err();

    assert_eq!(
        err.downcast_ref::<RulesError>(),
        Some(&RulesError::MissingTeam(Faction::ChaosInsurgency))
    );
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = RulesLoader::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}
