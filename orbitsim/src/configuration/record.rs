//! Text persistence of initial conditions
//!
//! One configuration per line. Bodies are separated by `:`, and each body is
//! `position|velocity|mass` with comma-joined vector components:
//!
//! ```text
//! -100,0,0|34.7,53.3,0|1000000000000000:0,0,0|0,0,0|1000000000000000
//! ```
//!
//! Floats are written in Rust's shortest round-trip form, so a reloaded body is
//! numerically identical to the saved one.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::SimError;
use crate::simulation::states::Body;
use crate::simulation::vector::{vec3_from_components, NVec3};

const BODY_SEP: char = ':';
const FIELD_SEP: char = '|';
const COMPONENT_SEP: char = ',';

fn encode_vec(v: &NVec3) -> String {
    format!("{}{COMPONENT_SEP}{}{COMPONENT_SEP}{}", v.x, v.y, v.z)
}

/// Serialize bodies into a single record line (no trailing newline)
pub fn encode_record(bodies: &[Body]) -> String {
    bodies
        .iter()
        .map(|b| format!("{}{FIELD_SEP}{}{FIELD_SEP}{}", encode_vec(&b.x), encode_vec(&b.v), b.mass()))
        .collect::<Vec<_>>()
        .join(&BODY_SEP.to_string())
}

fn malformed(reason: String) -> SimError {
    SimError::MalformedParameterRecord { reason }
}

fn parse_number(s: &str, body: usize) -> Result<f64, SimError> {
    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|_| malformed(format!("body {body}: `{s}` is not a number")))?;
    if !value.is_finite() {
        return Err(malformed(format!("body {body}: `{s}` is not finite")));
    }
    Ok(value)
}

fn parse_vec(s: &str, body: usize, field: &str) -> Result<NVec3, SimError> {
    let components = s
        .split(COMPONENT_SEP)
        .map(|c| parse_number(c, body))
        .collect::<Result<Vec<_>, _>>()?;
    vec3_from_components(&components).ok_or_else(|| {
        malformed(format!("body {body}: {field} has {} components, expected 2 or 3", components.len()))
    })
}

/// Parse one record line into bodies
///
/// Structural problems and NaN / infinite numbers give
/// [`SimError::MalformedParameterRecord`]; a well-formed body with a zero or
/// negative mass gives [`SimError::InvalidMass`].
pub fn parse_record(line: &str) -> Result<Vec<Body>, SimError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(malformed("empty record".into()));
    }

    line.split(BODY_SEP)
        .enumerate()
        .map(|(i, body)| {
            let fields: Vec<&str> = body.split(FIELD_SEP).collect();
            let [x, v, m] = fields.as_slice() else {
                return Err(malformed(format!("body {i}: expected 3 fields, found {}", fields.len())));
            };
            Body::new(parse_vec(x, i, "position")?, parse_vec(v, i, "velocity")?, parse_number(m, i)?)
        })
        .collect()
}

/// Load the record on line `index` (1-based) of `path`
pub fn load_record(path: &Path, index: usize) -> Result<Vec<Body>, SimError> {
    let text = fs::read_to_string(path)?;
    let lines: Vec<&str> = text.lines().collect();
    let line = index
        .checked_sub(1)
        .and_then(|i| lines.get(i))
        .ok_or(SimError::MissingRecord { index, available: lines.len() })?;
    parse_record(line)
}

/// Append `bodies` as a new record at the end of `path`, creating it if needed.
/// Returns the 1-based index of the written record.
pub fn append_record(path: &Path, bodies: &[Body]) -> Result<usize, SimError> {
    let existing = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if !existing.is_empty() && !existing.ends_with('\n') {
        writeln!(file)?;
    }
    writeln!(file, "{}", encode_record(bodies))?;

    Ok(existing.lines().count() + 1)
}
