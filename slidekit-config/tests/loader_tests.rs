//! Config loading tests: file formats, env resolution order and defaults

use std::collections::HashMap;
use std::fs;

use slidekit_config::{OptionsSource, SlidekitConfig};
use slidekit_model::{
    CarouselKind, CarouselOptions, InitialSlidePolicy, LayoutMode,
};
use tempfile::TempDir;

const HERO_TOML: &str = r#"
[defaults]
autoplay = true
delay_ms = 4000

[carousels.hero]
layout = "portrait-one"
initial = "center"
"#;

fn lookup(
    vars: &[(&str, String)],
) -> impl Fn(&str) -> Option<String> + use<> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn toml_file_with_overrides() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("slidekit.toml");
    fs::write(&path, HERO_TOML).expect("write config");

    let config = SlidekitConfig::load_from_file(&path).expect("load");
    assert!(config.defaults.autoplay);
    assert_eq!(config.defaults.delay_ms, 4_000);

    let hero = config.options_for("hero");
    assert_eq!(hero.layout, LayoutMode::PortraitOne);
    assert_eq!(hero.initial, InitialSlidePolicy::Center);
    // Entries replace the defaults wholesale.
    assert!(!hero.autoplay);

    assert_eq!(config.options_for("unknown"), config.defaults);
}

#[test]
fn json_file_accepts_layout_aliases() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("carousels.json");
    fs::write(
        &path,
        r#"{ "carousels": { "offers": { "layout": "landscape", "kind": "roller" } } }"#,
    )
    .expect("write config");

    let config = SlidekitConfig::load_from_file(&path).expect("load");
    let offers = config.options_for("offers");
    assert_eq!(offers.layout, LayoutMode::Fixed);
    assert_eq!(offers.kind, CarouselKind::Roller);
}

#[test]
fn extensionless_file_tries_toml_then_json() {
    let dir = TempDir::new().expect("tempdir");
    let toml_path = dir.path().join("carousel-config");
    fs::write(&toml_path, HERO_TOML).expect("write config");
    assert!(SlidekitConfig::load_from_file(&toml_path).is_ok());

    let json_path = dir.path().join("other-config");
    fs::write(&json_path, r#"{ "defaults": { "layout": "auto" } }"#)
        .expect("write config");
    let config = SlidekitConfig::load_from_file(&json_path).expect("load");
    assert_eq!(config.defaults.layout, LayoutMode::Auto);

    let broken = dir.path().join("broken");
    fs::write(&broken, "defaults = [").expect("write config");
    let err = SlidekitConfig::load_from_file(&broken).unwrap_err();
    let text = format!("{err:#}");
    assert!(text.contains("toml error"), "{text}");
    assert!(text.contains("json error"), "{text}");
}

#[test]
fn unknown_layout_is_rejected_in_files() {
    let raw = r#"{ "defaults": { "layout": "zigzag" } }"#;
    let err = SlidekitConfig::parse_json(raw).unwrap_err();
    assert!(err.to_string().contains("invalid carousel config json"));
}

#[test]
fn env_path_wins_over_inline_json() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, HERO_TOML).expect("write config");

    let vars = lookup(&[
        ("SLIDEKIT_CONFIG_PATH", path.display().to_string()),
        (
            "SLIDEKIT_CONFIG_JSON",
            r#"{ "defaults": { "layout": "auto" } }"#.to_string(),
        ),
    ]);
    let (config, source) =
        SlidekitConfig::load_with(vars, dir.path()).expect("load");
    assert_eq!(source, OptionsSource::EnvPath(path));
    assert_eq!(config.defaults.delay_ms, 4_000);
}

#[test]
fn inline_json_is_used_when_no_path_is_set() {
    let dir = TempDir::new().expect("tempdir");
    let vars = lookup(&[
        ("SLIDEKIT_CONFIG_PATH", "  ".to_string()),
        (
            "SLIDEKIT_CONFIG_JSON",
            r#"{ "defaults": { "layout": "auto-align" } }"#.to_string(),
        ),
    ]);
    let (config, source) =
        SlidekitConfig::load_with(vars, dir.path()).expect("load");
    assert_eq!(source, OptionsSource::EnvInline);
    assert_eq!(config.defaults.layout, LayoutMode::AutoAlign);
}

#[test]
fn invalid_inline_json_reports_the_variable() {
    let dir = TempDir::new().expect("tempdir");
    let vars = lookup(&[("SLIDEKIT_CONFIG_JSON", "{".to_string())]);
    let err = SlidekitConfig::load_with(vars, dir.path()).unwrap_err();
    assert!(err.to_string().contains("SLIDEKIT_CONFIG_JSON"));
}

#[test]
fn default_files_are_discovered_in_order() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir(dir.path().join("config")).expect("config dir");
    fs::write(
        dir.path().join("config/slidekit.toml"),
        "[defaults]\nlayout = \"auto\"\n",
    )
    .expect("write config");

    let (config, source) =
        SlidekitConfig::load_with(lookup(&[]), dir.path()).expect("load");
    assert_eq!(
        source,
        OptionsSource::File(dir.path().join("config/slidekit.toml"))
    );
    assert_eq!(config.defaults.layout, LayoutMode::Auto);

    fs::write(dir.path().join("slidekit.json"), r#"{ "defaults": {} }"#)
        .expect("write config");
    let (config, source) =
        SlidekitConfig::load_with(lookup(&[]), dir.path()).expect("load");
    assert_eq!(source, OptionsSource::File(dir.path().join("slidekit.json")));
    assert_eq!(config.defaults, CarouselOptions::default());
}

#[test]
fn defaults_without_any_source() {
    let dir = TempDir::new().expect("tempdir");
    let (config, source) =
        SlidekitConfig::load_with(lookup(&[]), dir.path()).expect("load");
    assert_eq!(source, OptionsSource::Default);
    assert_eq!(config, SlidekitConfig::default());
}
