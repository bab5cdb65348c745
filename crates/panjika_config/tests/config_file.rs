//! Loading configuration files from disk.

use std::io::Write;

use panjika_config::{
    ConfigError, ObserverOverrides, default_observer, load_config, load_or_default,
    resolve_observer,
};
use panjika_vedic_base::Ayanamsha;

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("write config");
    file
}

#[test]
fn full_file_round_trips_into_runtime_values() {
    let file = write_config(
        r#"
        [observer]
        display_name = "Kolkata"
        latitude = 22.5726
        longitude = 88.3639
        altitude_m = 9.0
        timezone = "Asia/Kolkata"

        [almanac]
        refraction_arcmin = 35.0
        ayanamsha = { kind = "fixed", degrees = 24.0 }

        [eclipse]
        lunar_threshold_deg = 0.6
        step_minutes = 2.0

        [hijri]
        day_offset = 1
        "#,
    );
    let cfg = load_config(file.path()).unwrap();
    let obs = resolve_observer(&cfg.observer);
    assert_eq!(obs.name, "Kolkata");
    assert_eq!(obs.location.altitude_m, 9.0);

    let settings = cfg.settings().unwrap();
    assert_eq!(settings.ayanamsha, Ayanamsha::Fixed(24.0));
    assert_eq!(settings.rise_set.refraction_arcmin, 35.0);
    assert_eq!(settings.eclipse.lunar_threshold_deg, 0.6);
    assert_eq!(settings.eclipse.solar_threshold_deg, 0.5);
    assert_eq!(cfg.hijri.converter().unwrap().day_offset, 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let file = write_config("[observer\nlatitude = ");
    let cfg = load_or_default(file.path());
    assert_eq!(resolve_observer(&cfg.observer), default_observer());
}

#[test]
fn invalid_zone_in_file_falls_back_to_default_observer() {
    let file = write_config("[observer]\ntimezone = \"Asia/Atlantis\"\n");
    let cfg = load_config(file.path()).unwrap();
    assert_eq!(resolve_observer(&cfg.observer), default_observer());
}

#[test]
fn command_line_overrides_win_over_the_file() {
    let file = write_config("[observer]\ndisplay_name = \"Dhaka\"\nlatitude = 23.81\nlongitude = 90.41\ntimezone = \"Asia/Dhaka\"\n");
    let mut cfg = load_config(file.path()).unwrap();
    cfg.observer.apply(&ObserverOverrides {
        name: Some("Sylhet".into()),
        latitude: Some(24.8949),
        longitude: Some(91.8687),
        timezone: None,
    });
    let obs = resolve_observer(&cfg.observer);
    assert_eq!(obs.name, "Sylhet");
    assert_eq!(obs.zone, chrono_tz::Asia::Dhaka);
    assert_eq!(obs.location.latitude_deg, 24.8949);
}
