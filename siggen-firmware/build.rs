//! Build script for siggen-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml configuration at compile time
fn validate_config() {
    // Re-run if board.toml changes
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the siggen-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    // Validate required sections exist
    validate_required_sections(&config);

    // Validate section contents
    validate_dds(&config);
    validate_console(&config);
    validate_startup(&config);

    println!("cargo:warning=board.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Panic with a box-drawn list of validation errors
fn fail_validation(title: &str, errors: &[String]) {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validate that required sections exist
fn validate_required_sections(config: &toml::Value) {
    let mut errors = Vec::new();

    if config.get("dds").is_none() {
        errors.push("Missing [dds] section".to_string());
    }
    if config.get("console").is_none() {
        errors.push("Missing [console] section".to_string());
    }
    if config.get("startup").is_none() {
        errors.push("Missing [startup] section".to_string());
    }

    if !errors.is_empty() {
        fail_validation("Missing required sections in board.toml", &errors);
    }
}

/// Validate synthesizer parameters
fn validate_dds(config: &toml::Value) {
    let dds = match config.get("dds") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    let mut errors = Vec::new();

    if let Some(toml::Value::Integer(osc)) = dds.get("osc_hz") {
        // AD9850 reference clock tops out at 125 MHz
        if *osc < 1 || *osc > 125_000_000 {
            errors.push("[dds] osc_hz must be 1-125000000".to_string());
        }
    }

    if let Some(toml::Value::Integer(width)) = dds.get("pulse_width_ns") {
        if *width < 0 || *width > 1_000_000 {
            errors.push("[dds] pulse_width_ns must be 0-1000000".to_string());
        }
    }

    // Pin numbers are a wiring record; check them anyway so the file
    // cannot silently disagree with physical reality
    let mut pins = Vec::new();
    for key in ["data_pin", "w_clk_pin", "fq_ud_pin", "reset_pin"] {
        if let Some(toml::Value::Integer(pin)) = dds.get(key) {
            if *pin < 0 || *pin > 29 {
                errors.push(format!("[dds] {} must be a GPIO number 0-29", key));
            } else {
                pins.push((key, *pin));
            }
        }
    }
    for (i, (key_a, pin_a)) in pins.iter().enumerate() {
        for (key_b, pin_b) in &pins[i + 1..] {
            if pin_a == pin_b {
                errors.push(format!("[dds] {} and {} share GPIO {}", key_a, key_b, pin_a));
            }
        }
    }

    if !errors.is_empty() {
        fail_validation("Invalid [dds] configuration", &errors);
    }
}

/// Validate console parameters
fn validate_console(config: &toml::Value) {
    let console = match config.get("console") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    let mut errors = Vec::new();

    if let Some(toml::Value::Integer(baud)) = console.get("baud") {
        if *baud < 300 || *baud > 921_600 {
            errors.push("[console] baud must be 300-921600".to_string());
        }
    }

    if !errors.is_empty() {
        fail_validation("Invalid [console] configuration", &errors);
    }
}

/// Validate startup settings against the synthesizer parameters
fn validate_startup(config: &toml::Value) {
    let startup = match config.get("startup") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    let osc_hz = config
        .get("dds")
        .and_then(|d| d.get("osc_hz"))
        .and_then(|v| v.as_integer())
        .unwrap_or(125_000_000);

    let mut errors = Vec::new();

    if let Some(toml::Value::Integer(freq)) = startup.get("frequency_hz") {
        if *freq < 0 {
            errors.push("[startup] frequency_hz must not be negative".to_string());
        } else if *freq > osc_hz / 2 {
            errors.push(format!(
                "[startup] frequency_hz exceeds Nyquist limit ({} Hz)",
                osc_hz / 2
            ));
        }
    }

    if let Some(toml::Value::Integer(phase)) = startup.get("phase_cdeg") {
        if *phase < 0 || *phase >= 36_000 {
            errors.push("[startup] phase_cdeg must be 0-35999".to_string());
        }
    }

    if !errors.is_empty() {
        fail_validation("Invalid [startup] configuration", &errors);
    }
}
