//! Build script for tapgate-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates node.toml at compile time

use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// GPIO driven by PIO for the LED matrix
const MATRIX_DATA_PIN: i64 = 7;

/// Allowed keys per section
const SECTIONS: &[(&str, &[&str])] = &[
    ("buttons", &["channel_a", "channel_b"]),
    ("status_led", &["red", "green", "blue"]),
    ("buzzer", &["pin"]),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate node.toml with the full TOML parser
///
/// The firmware parses the same file with a small line parser; catching
/// mistakes here keeps it from falling back to default wiring at runtime.
fn validate_config() {
    println!("cargo:rerun-if-changed=node.toml");

    let path = Path::new("node.toml");
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read node.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in node.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let errors = check_node(&config);
    if !errors.is_empty() {
        fail("Invalid node configuration", &errors);
    }

    println!("cargo:warning=node.toml validated successfully");
}

/// Collect every problem in the node config
fn check_node(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();
    let mut used: BTreeMap<i64, String> = BTreeMap::new();

    let Some(root) = config.as_table() else {
        return vec!["node.toml must be a table".to_string()];
    };

    for (name, section) in root {
        let Some(allowed) = SECTIONS.iter().find(|(s, _)| s == name).map(|(_, k)| *k) else {
            errors.push(format!("unknown section [{}]", name));
            continue;
        };
        let Some(table) = section.as_table() else {
            errors.push(format!("[{}] must be a table", name));
            continue;
        };

        for (key, value) in table {
            if !allowed.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", name, key));
                continue;
            }
            let role = format!("{}.{}", name, key);
            match value.as_str().and_then(pin_number) {
                Some(MATRIX_DATA_PIN) => {
                    errors.push(format!("{} uses gpio7 (LED matrix data)", role));
                }
                Some(pin) => {
                    if let Some(other) = used.insert(pin, role.clone()) {
                        errors.push(format!("{} and {} both use gpio{}", other, role, pin));
                    }
                }
                None => errors.push(format!("{} must be \"gpioN\" with N in 0..=29", role)),
            }
        }
    }

    errors
}

/// Pin number of a `[!^]gpioN` string
fn pin_number(s: &str) -> Option<i64> {
    let num = s.trim_start_matches(['!', '^']).strip_prefix("gpio")?;
    let pin: i64 = num.parse().ok()?;
    (0..=29).contains(&pin).then_some(pin)
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let line = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
