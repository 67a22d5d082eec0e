//! Mapping OSM nodes to ActivityStreams Places.

use crate::config::NAME_KEY;
use crate::error::{MakePlacesError, Result};
use crate::types::{OsmNode, Place};

/// Build a Place from one OSM node.
///
/// # Arguments
/// * `node` - The node and its direct child tags
///
/// # Returns
/// A Place with `latitude`, `longitude` and `name` set only when the
/// source carries them, and `updated` copied from `timestamp`.
///
/// # Errors
/// * `MissingNodeId` if the node has no `id` attribute
/// * `InvalidCoordinate` if `lat` or `lon` is not a finite decimal number
pub fn make_place(node: &OsmNode<'_>) -> Result<Place> {
    let node_id = node.id.ok_or_else(|| MakePlacesError::MissingNodeId {
        position: node.position.clone(),
    })?;

    let mut place = Place::new(node_id);
    place.latitude = parse_coordinate(node.lat, "lat", node_id)?;
    place.longitude = parse_coordinate(node.lon, "lon", node_id)?;
    place.updated = node.timestamp.map(str::to_string);
    place.name = node.tag_value(NAME_KEY).map(str::to_string);

    Ok(place)
}

fn parse_coordinate(
    value: Option<&str>,
    attribute: &'static str,
    node_id: &str,
) -> Result<Option<f64>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let invalid = |source| MakePlacesError::InvalidCoordinate {
        node_id: node_id.to_string(),
        attribute,
        value: raw.to_string(),
        source,
    };
    match raw.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(Some(parsed)),
        // NaN and infinities would serialize as JSON null
        Ok(_) => Err(invalid(None)),
        Err(source) => Err(invalid(Some(source))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tag;

    fn node<'a>(id: Option<&'a str>, lat: Option<&'a str>, lon: Option<&'a str>) -> OsmNode<'a> {
        OsmNode {
            id,
            lat,
            lon,
            timestamp: None,
            tags: vec![Tag {
                key: Some("amenity"),
                value: Some("cafe"),
            }],
            position: "1:1".to_string(),
        }
    }

    #[test]
    fn test_make_place_full() {
        let mut source = node(Some("123"), Some("40.7"), Some("-74.0"));
        source.timestamp = Some("2024-01-01T00:00:00Z");
        source.tags.push(Tag {
            key: Some("name"),
            value: Some("Test Place"),
        });

        let place = make_place(&source).unwrap();
        assert_eq!(place.id, "https://places.pub/osm/n123");
        assert_eq!(place.latitude, Some(40.7));
        assert_eq!(place.longitude, Some(-74.0));
        assert_eq!(place.updated.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(place.name.as_deref(), Some("Test Place"));
    }

    #[test]
    fn test_make_place_without_optional_fields() {
        let place = make_place(&node(Some("5"), None, None)).unwrap();
        assert_eq!(place.latitude, None);
        assert_eq!(place.longitude, None);
        assert_eq!(place.updated, None);
        assert_eq!(place.name, None);
    }

    #[test]
    fn test_make_place_trims_coordinates() {
        let place = make_place(&node(Some("5"), Some(" 51.5 "), Some("-0.1"))).unwrap();
        assert_eq!(place.latitude, Some(51.5));
        assert_eq!(place.longitude, Some(-0.1));
    }

    #[test]
    fn test_make_place_missing_id() {
        let err = make_place(&node(None, Some("1.0"), None)).unwrap_err();
        assert!(matches!(err, MakePlacesError::MissingNodeId { .. }));
    }

    #[test]
    fn test_make_place_invalid_latitude() {
        let err = make_place(&node(Some("8"), Some("north"), None)).unwrap_err();
        match err {
            MakePlacesError::InvalidCoordinate {
                node_id,
                attribute,
                value,
                ..
            } => {
                assert_eq!(node_id, "8");
                assert_eq!(attribute, "lat");
                assert_eq!(value, "north");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_make_place_invalid_longitude() {
        let err = make_place(&node(Some("8"), Some("1.0"), Some(""))).unwrap_err();
        assert!(matches!(
            err,
            MakePlacesError::InvalidCoordinate {
                attribute: "lon",
                ..
            }
        ));
    }

    #[test]
    fn test_make_place_rejects_non_finite_coordinates() {
        for (lat, lon, attribute) in [
            (Some("NaN"), None, "lat"),
            (Some("1.0"), Some("inf"), "lon"),
            (Some("-infinity"), None, "lat"),
        ] {
            let err = make_place(&node(Some("1"), lat, lon)).unwrap_err();
            match err {
                MakePlacesError::InvalidCoordinate {
                    attribute: got,
                    source,
                    ..
                } => {
                    assert_eq!(got, attribute);
                    assert!(source.is_none());
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
