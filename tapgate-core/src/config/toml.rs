//! Minimal TOML parser for `node.toml`
//!
//! Handles only the subset the node configuration needs. It does NOT
//! support the full TOML spec.
//!
//! Supported features:
//! - [section] headers
//! - Key = value pairs (basic or literal strings)
//! - Comments (# ...), including trailing comments
//!
//! Pins are written as `"gpioN"`, with `!` for active-low and `^` for the
//! internal pull-up: `"!^gpio5"` is a button to ground.

use super::hardware::{NodeConfig, PinConfig};

/// Highest GPIO number on the RP2040
const MAX_GPIO: u8 = 29;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong shape
    InvalidValue,
    /// Pin string is not `gpioN` with N in 0..=29
    InvalidPin,
    /// Key not known in its section
    UnknownKey,
    /// Two roles assigned the same GPIO
    PinConflict,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Buttons,
    StatusLed,
    Buzzer,
}

/// Parse `node.toml` into a [`NodeConfig`]
///
/// Keys that are not present keep their default assignment.
pub fn parse_config(input: &str) -> Result<NodeConfig, ParseError> {
    let mut config = NodeConfig::default();
    let mut section = Section::Root;

    for raw in input.lines() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let header = header.strip_suffix(']').ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = split_assignment(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    if config.find_conflict().is_some() {
        return Err(ParseError::PinConflict);
    }

    Ok(config)
}

/// Parse section header like "buttons" or "status_led"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "buttons" => Ok(Section::Buttons),
        "status_led" => Ok(Section::StatusLed),
        "buzzer" => Ok(Section::Buzzer),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Cut a line at the first `#` outside a quoted string
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    for (i, c) in line.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), _) if c == q => quote = None,
            (None, '#') => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Split `key = value`; both sides must be non-empty
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    (!key.is_empty() && !value.is_empty()).then_some((key, value))
}

/// Unquote a basic (`"..."`) or literal (`'...'`) string
fn parse_string(value: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q)?.strip_suffix(q))
        // Bare words are accepted for hand-edited files
        .unwrap_or(value)
}

/// Parse a pin string like "gpio11", "!gpio12", "^gpio4"
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let mut s = parse_string(value);
    let mut inverted = false;
    let mut pull_up = false;

    // Modifiers may come in any order
    loop {
        if let Some(rest) = s.strip_prefix('!') {
            inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let num = s.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    let pin: u8 = num.parse().map_err(|_| ParseError::InvalidPin)?;
    if pin > MAX_GPIO {
        return Err(ParseError::InvalidPin);
    }

    Ok(PinConfig {
        pin,
        inverted,
        pull_up,
    })
}

/// Store one key/value in the config
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut NodeConfig,
) -> Result<(), ParseError> {
    let target = match (section, key) {
        (Section::Buttons, "channel_a") => &mut config.channel_a,
        (Section::Buttons, "channel_b") => &mut config.channel_b,
        (Section::StatusLed, "red") => &mut config.status_led.red,
        (Section::StatusLed, "green") => &mut config.status_led.green,
        (Section::StatusLed, "blue") => &mut config.status_led.blue,
        (Section::Buzzer, "pin") => &mut config.buzzer,
        _ => return Err(ParseError::UnknownKey),
    };
    *target = parse_pin(value)?;
    Ok(())
}
