//! Scenario types and the definition-file parser.
//!
//! # File format
//!
//! Line-oriented, three record kinds distinguished by the first character:
//!
//! ```text
//! # comment lines and blanks are ignored
//! ! 0.0 50.0 0.0 20.0          bounds: MinX MaxX MinY MaxY
//! * 0 28e9 400e6               band:   id centralFrequency bandwidth
//! 0 10.0 5.0 3.0 0 23.0 I      station: id x y z bandId txPower kind
//! ```
//!
//! Station `kind` is `I` (isotropic antenna) or `H` (directional panel).

use std::io::{BufRead, BufReader};
use std::path::Path;

use nt_core::{BandId, StationId, Vec3};

use crate::error::{ScenarioError, ScenarioResult};

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Rectangular spatial bounds of the site, in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// `true` if the horizontal projection of `p` lies inside the bounds.
    pub fn contains(&self, p: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    /// Centre of the rectangle at ground level.
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
            0.0,
        )
    }
}

// ── Band ──────────────────────────────────────────────────────────────────────

/// One frequency band stations can operate in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Band {
    pub id:           BandId,
    pub center_hz:    f64,
    pub bandwidth_hz: f64,
}

// ── Station ───────────────────────────────────────────────────────────────────

/// Antenna arrangement of a base station.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StationKind {
    Isotropic,
    Directional,
}

impl StationKind {
    fn from_flag(lineno: usize, tok: &str) -> ScenarioResult<Self> {
        match tok {
            "I" => Ok(StationKind::Isotropic),
            "H" => Ok(StationKind::Directional),
            other => Err(ScenarioError::parse(
                lineno,
                format!("invalid station kind {other:?}: expected \"I\" or \"H\""),
            )),
        }
    }
}

/// A fixed base-station record.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id:           StationId,
    pub position:     Vec3,
    pub band:         BandId,
    pub tx_power_dbm: f64,
    pub kind:         StationKind,
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Aggregate of all scenario records, in file order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub stations: Vec<Station>,
    pub bands:    Vec<Band>,
    pub bounds:   Bounds,
}

impl Scenario {
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn band(&self, id: BandId) -> Option<&Band> {
        self.bands.iter().find(|b| b.id == id)
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Load a scenario from a definition file on disk.
pub fn load_scenario(path: &Path) -> ScenarioResult<Scenario> {
    let file = std::fs::File::open(path)?;
    let scenario = parse_scenario(BufReader::new(file))?;
    log::info!(
        "loaded scenario from {}: {} stations, {} bands",
        path.display(),
        scenario.stations.len(),
        scenario.bands.len(),
    );
    Ok(scenario)
}

/// Like [`load_scenario`] but accepts any `BufRead` source.
pub fn parse_scenario<R: BufRead>(reader: R) -> ScenarioResult<Scenario> {
    let mut scenario = Scenario::default();

    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('!') {
            let [min_x, max_x, min_y, max_y] = fields::<4>(lineno, rest)?;
            scenario.bounds = Bounds {
                min_x: parse(lineno, min_x)?,
                max_x: parse(lineno, max_x)?,
                min_y: parse(lineno, min_y)?,
                max_y: parse(lineno, max_y)?,
            };
        } else if let Some(rest) = line.strip_prefix('*') {
            let [id, center, bandwidth] = fields::<3>(lineno, rest)?;
            scenario.bands.push(Band {
                id:           BandId(parse(lineno, id)?),
                center_hz:    parse(lineno, center)?,
                bandwidth_hz: parse(lineno, bandwidth)?,
            });
        } else {
            let [id, x, y, z, band, tx_power, kind] = fields::<7>(lineno, line)?;
            scenario.stations.push(Station {
                id:           StationId(parse(lineno, id)?),
                position:     Vec3::new(parse(lineno, x)?, parse(lineno, y)?, parse(lineno, z)?),
                band:         BandId(parse(lineno, band)?),
                tx_power_dbm: parse(lineno, tx_power)?,
                kind:         StationKind::from_flag(lineno, kind)?,
            });
        }
    }

    Ok(scenario)
}

// ── Field helpers ─────────────────────────────────────────────────────────────

fn fields<const N: usize>(lineno: usize, line: &str) -> ScenarioResult<[&str; N]> {
    let toks: Vec<&str> = line.split_whitespace().collect();
    toks.as_slice().try_into().map_err(|_| {
        ScenarioError::parse(
            lineno,
            format!("expected {N} fields, found {}: {line:?}", toks.len()),
        )
    })
}

fn parse<T: std::str::FromStr>(lineno: usize, tok: &str) -> ScenarioResult<T> {
    tok.parse().map_err(|_| {
        ScenarioError::parse(
            lineno,
            format!("invalid {}: {tok:?}", std::any::type_name::<T>()),
        )
    })
}
