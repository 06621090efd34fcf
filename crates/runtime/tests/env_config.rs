use std::path::PathBuf;

use facility_runtime::RuntimeConfig;

// Environment variables are process-wide, so every case lives in one test.
#[test]
fn reads_settings_from_environment() {
    // SAFETY: this test binary has no other threads touching the environment.
    unsafe {
        std::env::set_var("RESPAWN_RULES_PATH", "/etc/facility/rules.toml");
        std::env::set_var("WAVE_EVENT_CAPACITY", "16");
    }
    let config = RuntimeConfig::from_env();
    assert_eq!(
        config.rules_path,
        Some(PathBuf::from("/etc/facility/rules.toml"))
    );
    assert_eq!(config.event_capacity, 16);

    unsafe {
        std::env::set_var("RESPAWN_RULES_PATH", "");
        std::env::set_var("WAVE_EVENT_CAPACITY", "not-a-number");
    }
    let config = RuntimeConfig::from_env();
    assert_eq!(config.rules_path, None);
    assert_eq!(config.event_capacity, RuntimeConfig::DEFAULT_EVENT_CAPACITY);

    unsafe {
        std::env::set_var("WAVE_EVENT_CAPACITY", "0");
    }
    assert_eq!(RuntimeConfig::from_env().event_capacity, 1);
}
