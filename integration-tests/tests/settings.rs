use approx::assert_relative_eq;
use descent_solvers::{descent, scalar};
use integration_tests::settings::Settings;

#[test]
fn empty_file_gives_defaults() {
    let settings: Settings = toml::from_str("").unwrap();
    assert_eq!(settings, Settings::default());

    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn loads_from_toml() {
    let text = r#"
        [scalar]
        tolerance = 1e-4
        max_iters = 50

        [inexact]
        rho = 0.1
        sigma = 0.7

        [descent]
        tolerance = 1e-8
        line_search_tolerance = 1e-6

        [rmsprop]
        step_size = 0.05
    "#;

    let settings: Settings = toml::from_str(text).unwrap();

    assert_relative_eq!(settings.scalar.tolerance(), 1e-4);
    assert_eq!(settings.scalar.max_iters(), Some(50));
    assert_relative_eq!(settings.inexact.rho(), 0.1);
    assert_relative_eq!(settings.inexact.sigma(), 0.7);
    assert_relative_eq!(settings.inexact.expand(), 1.5);
    assert_relative_eq!(settings.descent.tolerance(), 1e-8);
    assert_eq!(settings.descent.max_iters(), None);
    assert_eq!(settings.descent.line_search_tolerance(), Some(1e-6));
    assert_relative_eq!(settings.rmsprop.step_size(), 0.05);
    assert_relative_eq!(settings.rmsprop.beta(), 0.999);
    assert_relative_eq!(settings.momentum.beta(), 0.9);
}

#[test]
fn json_round_trip_preserves_settings() {
    let settings = Settings {
        scalar: scalar::Config::new(1e-3).unwrap().with_max_iters(10),
        descent: descent::Config::new(1e-5).unwrap().with_max_iters(100),
        ..Settings::default()
    };

    let json = serde_json::to_string(&settings).unwrap();
    let loaded: Settings = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn out_of_range_values_are_caught_when_solving() {
    let settings: Settings = toml::from_str("[descent]\ntolerance = -1.0\n").unwrap();

    let bowl = integration_tests::objectives::Bowl::elongated();
    let result = descent::fletcher_reeves::minimize_unobserved(&bowl, [1.0, 1.0], &settings.descent);

    assert!(matches!(
        result,
        Err(descent::Error::InvalidConfig(descent::ConfigError::Tolerance))
    ));
}
