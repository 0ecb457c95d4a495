//! Release version strings show up in a few sibling formats that all
//! need to land in the same Version record.

mod common;
mod version;

use nom::combinator::all_consuming;

use tracing::{event, instrument, Level};

use crate::models::Version;

use anyhow::{anyhow, Result};

/// Parse a version string, failing if it does not match any accepted
/// format
pub fn parse_version(input: &str) -> Result<Version> {
    match try_parse_version(input) {
        Some(version) => Ok(version),
        None => Err(anyhow!("invalid version string: {}", input)),
    }
}

/// Attempt to parse a version string, yielding None if it does not
/// match any accepted format.  The whole input must match; trailing
/// garbage is rejected.
///
/// Accepted formats:
/// - X.Y.Z (e.g. "0.3.2")
/// - X.Y.Z-P (e.g. "0.3.2-1", a patch release)
/// - X.Y.Z-N-gHASH (e.g. "0.3.2-5-gabc123", git describe from a plain tag)
/// - X.Y.Z-P-N-gHASH (e.g. "0.3.2-1-1-ga7a46bc", git describe from a patch tag)
///
/// Each may carry a leading "v".
#[instrument]
pub fn try_parse_version(input: &str) -> Option<Version> {
    match all_consuming(version::version)(input) {
        Ok((_, version)) => {
            event!(Level::DEBUG, "parsed version: {:?}", version);
            Some(version)
        }
        Err(_) => None,
    }
}
