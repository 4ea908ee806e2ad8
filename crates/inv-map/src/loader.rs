//! Text map loader.
//!
//! # Map format
//!
//! One line per city; whitespace-separated fields.  The first field is the
//! city name, each following field is `direction=destination` with the
//! direction one of `north`, `west`, `south`, `east`:
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! ```
//!
//! Destinations are **not** checked against the set of city names — forward
//! references and intentionally dangling names are legal and expected.
//! Blank lines are skipped.  A duplicate city name replaces the earlier
//! definition (last line wins).

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::{City, CityMap, Link, MapError, MapResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`CityMap`] from a map file.
pub fn parse_map_file(path: &Path) -> MapResult<CityMap> {
    let file = std::fs::File::open(path)?;
    parse_map_reader(file)
}

/// Like [`parse_map_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded map strings.
pub fn parse_map_reader<R: Read>(reader: R) -> MapResult<CityMap> {
    let mut map = CityMap::new();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else {
            continue; // blank line
        };

        let links = fields.map(parse_link).collect::<MapResult<Vec<Link>>>()?;
        map.insert(City::new(name, links));
    }

    Ok(map)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Parse one `direction=destination` token.
///
/// The token must split on `=` into exactly two non-empty parts; the first
/// part must be a recognized cardinal symbol.
fn parse_link(token: &str) -> MapResult<Link> {
    let mut parts = token.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(dir), Some(dest), None) if !dir.is_empty() && !dest.is_empty() => {
            Ok(Link { direction: dir.parse()?, to: dest.to_string() })
        }
        _ => Err(MapError::MalformedLink { token: token.to_string() }),
    }
}
