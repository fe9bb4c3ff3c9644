use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn stylesheet_is_configured_for_the_linked_asset() {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let manifest = std::fs::read_to_string(manifest_dir.join("Cargo.toml")).unwrap();

    let style_file = manifest
        .lines()
        .find_map(|line| line.trim().strip_prefix("style-file = "))
        .map(|value| value.trim_matches('"'))
        .expect("style-file missing from [package.metadata.leptos]");
    assert!(manifest_dir.join(style_file).is_file(), "{style_file} does not exist");

    // The shell links /pkg/<output-name>.css.
    assert!(manifest.contains("output-name = \"ats\""));
    assert!(manifest.contains("site-pkg-dir = \"pkg\""));
}
