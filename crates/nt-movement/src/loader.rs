//! Movement definition file: parsing and serialization.
//!
//! # File format
//!
//! Line-oriented and section-delimited.  A line consisting of one of the
//! four literal headers switches the active section; subsequent lines are
//! parsed according to that section's field layout until the next header or
//! end of file.  `#`-comment lines and blank lines are skipped everywhere.
//!
//! ```text
//! WAYPOINTS
//! # id  x  y  z
//! 0  1.0  2.0  1.5
//! 1  9.0  2.0  1.5
//!
//! SPAWN_POINTS
//! 0
//! 1
//!
//! LEGAL_PATHS
//! # from  to  hop0 hop1 ... hopN   (variable length)
//! 0  1  0 1
//!
//! SPEED_INTERVAL
//! 0.8  1.4
//! ```
//!
//! Parsing is strict: a line with missing fields, trailing garbage, or an
//! unparsable number fails the whole load with a
//! [`MovementError::Parse`] tagged by its 1-based line number.  Content
//! before any section header is likewise an error.  A repeated
//! `SPEED_INTERVAL` line overwrites the previous one (last occurrence wins).

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use nt_core::WaypointId;

use crate::error::{MovementError, MovementResult};
use crate::graph::{LegalPath, MovementGraph, SpeedInterval, Waypoint};

// ── Sections ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq)]
enum Section {
    None,
    Waypoints,
    SpawnPoints,
    LegalPaths,
    SpeedInterval,
}

impl Section {
    fn from_header(line: &str) -> Option<Section> {
        match line {
            "WAYPOINTS"      => Some(Section::Waypoints),
            "SPAWN_POINTS"   => Some(Section::SpawnPoints),
            "LEGAL_PATHS"    => Some(Section::LegalPaths),
            "SPEED_INTERVAL" => Some(Section::SpeedInterval),
            _                => None,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a movement graph from a definition file on disk.
pub fn load_graph(path: &Path) -> MovementResult<MovementGraph> {
    let file = std::fs::File::open(path)?;
    let graph = parse_graph(BufReader::new(file))?;
    log::info!(
        "loaded movement graph from {}: {} waypoints, {} spawn points, {} legal paths",
        path.display(),
        graph.waypoints.len(),
        graph.spawn_points.len(),
        graph.legal_paths.len(),
    );
    Ok(graph)
}

/// Like [`load_graph`] but accepts any `BufRead` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded definitions.
pub fn parse_graph<R: BufRead>(reader: R) -> MovementResult<MovementGraph> {
    let mut graph = MovementGraph::default();
    let mut section = Section::None;

    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(next) = Section::from_header(line) {
            section = next;
            continue;
        }

        match section {
            Section::None => {
                return Err(MovementError::parse(
                    lineno,
                    format!("content before any section header: {line:?}"),
                ));
            }
            Section::Waypoints => {
                let [id, x, y, z] = fields::<4>(lineno, line)?;
                graph.waypoints.push(Waypoint {
                    id:       WaypointId(parse(lineno, id)?),
                    position: nt_core::Vec3::new(
                        parse(lineno, x)?,
                        parse(lineno, y)?,
                        parse(lineno, z)?,
                    ),
                });
            }
            Section::SpawnPoints => {
                let [id] = fields::<1>(lineno, line)?;
                graph.spawn_points.push(WaypointId(parse(lineno, id)?));
            }
            Section::LegalPaths => {
                // `from to hop0 hop1 ... hopN` — hop list length is variable
                // and consumed to end of line.
                let mut it = line.split_whitespace();
                let from = WaypointId(parse_next(lineno, &mut it, "from")?);
                let to   = WaypointId(parse_next(lineno, &mut it, "to")?);
                let hops = it
                    .map(|tok| Ok(WaypointId(parse(lineno, tok)?)))
                    .collect::<MovementResult<Vec<_>>>()?;
                graph.legal_paths.push(LegalPath { from, to, hops });
            }
            Section::SpeedInterval => {
                let [min, max] = fields::<2>(lineno, line)?;
                graph.speed = SpeedInterval {
                    min_mps: parse(lineno, min)?,
                    max_mps: parse(lineno, max)?,
                };
            }
        }
    }

    Ok(graph)
}

/// Serialize `graph` back to the definition format.
///
/// Output is canonical: sections in fixed order, no comments, one record per
/// line.  Parsing the output yields a graph equal to the input.
pub fn write_graph<W: Write>(graph: &MovementGraph, mut out: W) -> MovementResult<()> {
    writeln!(out, "WAYPOINTS")?;
    for wp in &graph.waypoints {
        let p = wp.position;
        writeln!(out, "{} {} {} {}", wp.id.0, p.x, p.y, p.z)?;
    }

    writeln!(out, "SPAWN_POINTS")?;
    for sp in &graph.spawn_points {
        writeln!(out, "{}", sp.0)?;
    }

    writeln!(out, "LEGAL_PATHS")?;
    for path in &graph.legal_paths {
        write!(out, "{} {}", path.from.0, path.to.0)?;
        for hop in &path.hops {
            write!(out, " {}", hop.0)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "SPEED_INTERVAL")?;
    writeln!(out, "{} {}", graph.speed.min_mps, graph.speed.max_mps)?;
    Ok(())
}

// ── Field helpers ─────────────────────────────────────────────────────────────

/// Split `line` into exactly `N` whitespace-separated fields.
fn fields<const N: usize>(lineno: usize, line: &str) -> MovementResult<[&str; N]> {
    let toks: Vec<&str> = line.split_whitespace().collect();
    toks.as_slice().try_into().map_err(|_| {
        MovementError::parse(
            lineno,
            format!("expected {N} fields, found {}: {line:?}", toks.len()),
        )
    })
}

fn parse<T: std::str::FromStr>(lineno: usize, tok: &str) -> MovementResult<T> {
    tok.parse().map_err(|_| {
        MovementError::parse(
            lineno,
            format!("invalid {}: {tok:?}", std::any::type_name::<T>()),
        )
    })
}

fn parse_next<'a, T: std::str::FromStr>(
    lineno: usize,
    it: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> MovementResult<T> {
    let tok = it
        .next()
        .ok_or_else(|| MovementError::parse(lineno, format!("missing {what} field")))?;
    parse(lineno, tok)
}
