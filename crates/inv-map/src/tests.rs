//! Unit tests for inv-map.

use std::io::Cursor;

use inv_core::SimRng;

use crate::{City, CityMap, Direction, Link, MapError, MapReport, parse_map_reader};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse(text: &str) -> Result<CityMap, MapError> {
    parse_map_reader(Cursor::new(text))
}

fn link(direction: Direction, to: &str) -> Link {
    Link::new(direction, to)
}

// ── Direction ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod direction_tests {
    use super::*;

    #[test]
    fn parses_all_four_tokens() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("west".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!("south".parse::<Direction>().unwrap(), Direction::South);
        assert_eq!("east".parse::<Direction>().unwrap(), Direction::East);
    }

    #[test]
    fn rejects_unknown_token_by_name() {
        let err = "up".parse::<Direction>().unwrap_err();
        match err {
            MapError::UnknownDirection { token } => assert_eq!(token, "up"),
            other => panic!("expected UnknownDirection, got {other:?}"),
        }
    }

    #[test]
    fn rejects_mixed_case() {
        assert!("North".parse::<Direction>().is_err());
    }

    #[test]
    fn display_round_trips_the_token() {
        for d in [Direction::North, Direction::West, Direction::South, Direction::East] {
            assert_eq!(d.as_str().parse::<Direction>().unwrap(), d);
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn loads_cities_with_links() {
        let map = parse("Foo north=Bar west=Baz\nBar south=Foo\n").unwrap();
        assert_eq!(map.len(), 2);
        let foo = map.get("Foo").unwrap();
        assert_eq!(
            foo.links,
            vec![link(Direction::North, "Bar"), link(Direction::West, "Baz")]
        );
        assert!(foo.occupant.is_none());
    }

    #[test]
    fn city_with_no_links_is_valid() {
        let map = parse("Lonely\n").unwrap();
        assert!(map.get("Lonely").unwrap().links.is_empty());
    }

    #[test]
    fn dangling_destination_is_tolerated() {
        // Scenario C precondition: `Bar` exists nowhere in the description.
        let map = parse("Foo north=Bar\n").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Foo").unwrap().links, vec![link(Direction::North, "Bar")]);
    }

    #[test]
    fn missing_equals_fails_with_the_token() {
        // Scenario D.
        let err = parse("Foo north-Bar\n").unwrap_err();
        match err {
            MapError::MalformedLink { token } => assert_eq!(token, "north-Bar"),
            other => panic!("expected MalformedLink, got {other:?}"),
        }
    }

    #[test]
    fn empty_destination_fails() {
        assert!(matches!(
            parse("Foo north=\n").unwrap_err(),
            MapError::MalformedLink { .. }
        ));
    }

    #[test]
    fn extra_equals_fails() {
        assert!(matches!(
            parse("Foo north=Bar=Baz\n").unwrap_err(),
            MapError::MalformedLink { .. }
        ));
    }

    #[test]
    fn unknown_direction_fails() {
        assert!(matches!(
            parse("Foo upward=Bar\n").unwrap_err(),
            MapError::UnknownDirection { .. }
        ));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let map = parse("Foo north=Bar\n\n   \nBar south=Foo\n").unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn duplicate_city_name_last_wins() {
        let map = parse("Foo north=Bar\nFoo south=Baz\n").unwrap();
        assert_eq!(map.get("Foo").unwrap().links, vec![link(Direction::South, "Baz")]);
    }
}

// ── CityMap ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod map_tests {
    use super::*;

    #[test]
    fn remove_missing_city_is_a_noop() {
        let mut map = parse("Foo\n").unwrap();
        map.remove("Nowhere");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn random_city_name_on_empty_map_errors() {
        let map = CityMap::new();
        let mut rng = SimRng::new(0);
        assert!(matches!(
            map.random_city_name(&mut rng).unwrap_err(),
            MapError::EmptyMap
        ));
    }

    #[test]
    fn random_city_name_returns_an_existing_key() {
        let map = parse("A\nB\nC\n").unwrap();
        let mut rng = SimRng::new(9);
        for _ in 0..50 {
            let name = map.random_city_name(&mut rng).unwrap();
            assert!(map.contains(&name));
        }
    }

    #[test]
    fn random_city_name_eventually_covers_all_cities() {
        let map = parse("A\nB\nC\n").unwrap();
        let mut rng = SimRng::new(1);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(map.random_city_name(&mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn prune_removes_only_dangling_links() {
        let mut map = parse("Foo north=Bar west=Gone east=Baz\nBar south=Foo\nBaz\n").unwrap();
        map.prune_dangling_links();
        assert_eq!(
            map.get("Foo").unwrap().links,
            vec![link(Direction::North, "Bar"), link(Direction::East, "Baz")],
            "surviving links keep their relative order"
        );
        assert_eq!(map.get("Bar").unwrap().links, vec![link(Direction::South, "Foo")]);
    }

    #[test]
    fn prune_is_idempotent() {
        let mut map = parse("Foo north=Bar west=Gone\nBar south=Foo east=Lost\n").unwrap();
        map.prune_dangling_links();
        let once: Vec<City> = {
            let mut cities: Vec<City> = map.iter().cloned().collect();
            cities.sort_by(|a, b| a.name.cmp(&b.name));
            cities
        };
        map.prune_dangling_links();
        let mut twice: Vec<City> = map.iter().cloned().collect();
        twice.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            once.iter().map(|c| (&c.name, &c.links)).collect::<Vec<_>>(),
            twice.iter().map(|c| (&c.name, &c.links)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn self_link_survives_pruning() {
        // Degenerate but legal: tolerated, not sanitized.
        let mut map = parse("Loop north=Loop\n").unwrap();
        map.prune_dangling_links();
        assert_eq!(map.get("Loop").unwrap().links, vec![link(Direction::North, "Loop")]);
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn report_is_sorted_by_name() {
        let map = parse("Zed\nAlpha north=Zed\nMid\n").unwrap();
        let report = MapReport::from_map(&map);
        let names: Vec<&str> = report.cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zed"]);
    }

    #[test]
    fn display_echoes_map_format() {
        let map = parse("Foo north=Bar east=Baz\n").unwrap();
        let report = MapReport::from_map(&map);
        assert_eq!(report.to_string(), "Foo north=Bar east=Baz\n");
    }

    #[test]
    fn city_display_matches_report_line() {
        let map = parse("Foo north=Bar\n").unwrap();
        assert_eq!(map.get("Foo").unwrap().to_string(), "Foo north=Bar");
    }
}
