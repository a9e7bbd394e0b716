//! End-to-end run of the truck-brands binary on a saved page

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

const PAGE: &str = r#"<html><body>
<h2><span class="mw-headline" id="North_America">North America</span></h2>
<p>Manufacturers based in North America.</p>
<div class="div-col"><table class="multicol" role="presentation"><tbody><tr><td><ul>
<li><a href="/wiki/Mack_Trucks" title="Mack Trucks">Mack</a> (<a href="/wiki/United_States" title="United States">United States</a>)</li>
<li><a href="/wiki/Freightliner" title="Freightliner Trucks">Freightliner</a></li>
</ul></td></tr></tbody></table></div>
</body></html>"#;

fn truck_brands(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_truck-brands"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_export_from_saved_page() {
    let dir = tempdir().unwrap();
    let page = dir.path().join("page.html");
    let csv = dir.path().join("out").join("brands.csv");
    fs::write(&page, PAGE).unwrap();

    let output = truck_brands(
        dir.path(),
        &[
            "--input",
            page.to_str().unwrap(),
            "--output",
            csv.to_str().unwrap(),
            "--format",
            "json",
        ],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        ",Brand,Company name,Country,Continent\n\
         0,Freightliner,Freightliner Trucks,,North America\n\
         1,Mack,Mack Trucks,United States,North America\n"
    );

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["brands"], 2);
    assert_eq!(summary["continents"][0]["continent"], "North America");
}

#[test]
fn test_missing_input_file_fails() {
    let dir = tempdir().unwrap();
    let output = truck_brands(
        dir.path(),
        &["--input", dir.path().join("absent.html").to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}
