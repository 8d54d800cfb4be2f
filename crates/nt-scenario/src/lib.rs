//! `nt-scenario` — scenario definition file: station placement, frequency
//! bands, and the spatial bounds of the site.
//!
//! The scenario is loaded once at startup and is a read-only input: station
//! positions feed the terminal–station distance computation, the bounds feed
//! the random-walk mobility fallback.  Any malformed line is a fatal
//! configuration error — there is no partial scenario.

pub mod error;
pub mod scenario;


pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Band, Bounds, Scenario, Station, StationKind, load_scenario, parse_scenario};
