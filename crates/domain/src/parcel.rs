// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ValidationError;
use crate::shapes::{Position, as_position};
use geo::Polygon;
use geojson::GeoJson;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The outer boundary ring of a parcel polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParcelBoundary {
    ring: Vec<Position>,
}

impl ParcelBoundary {
    /// Creates a boundary from ring positions.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the ring has fewer than three distinct
    /// positions.
    pub fn new(ring: Vec<Position>) -> Result<Self, ValidationError> {
        let boundary: Self = Self { ring };
        if boundary.edge_count() < 3 {
            return Err(ValidationError::invalid_format(
                "A parcel boundary needs at least three positions",
            ));
        }
        Ok(boundary)
    }

    /// Parses a boundary from JSON.
    ///
    /// Objects are read as `GeoJSON`: a `Polygon` or `MultiPolygon` geometry,
    /// or a `Feature`/`FeatureCollection` carrying one. The outer ring of the
    /// first polygon is used. Arrays are read as polygon coordinates
    /// (`[[[lon, lat], ...]]`, outer ring first) or a bare ring
    /// (`[[lon, lat], ...]`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the geometry is not polygonal, no ring can
    /// be read, or the ring is too short.
    pub fn from_json(raw: &Value) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(_) => Self::from_geojson(raw),
            Value::Array(rings) => Self::from_coordinate_array(rings),
            _ => Err(ValidationError::invalid_format(
                "Boundary must be a GeoJSON object or a list of positions",
            )),
        }
    }

    fn from_geojson(raw: &Value) -> Result<Self, ValidationError> {
        let geojson: GeoJson = GeoJson::from_json_value(raw.clone()).map_err(|err| {
            ValidationError::invalid_format(format!("Boundary is not valid GeoJSON: {err}"))
        })?;

        let geometry: geojson::Geometry = match geojson {
            GeoJson::Geometry(geometry) => Some(geometry),
            GeoJson::Feature(feature) => feature.geometry,
            GeoJson::FeatureCollection(collection) => collection
                .features
                .into_iter()
                .find_map(|feature| feature.geometry),
        }
        .ok_or_else(|| ValidationError::invalid_format("Boundary feature has no geometry"))?;

        let geometry: geo::Geometry<f64> = geometry.try_into().map_err(|err| {
            ValidationError::invalid_format(format!("Boundary geometry is unreadable: {err}"))
        })?;

        let polygon: Polygon<f64> = match geometry {
            geo::Geometry::Polygon(polygon) => polygon,
            geo::Geometry::MultiPolygon(multi_polygon) => {
                let first: Option<Polygon<f64>> = multi_polygon.0.into_iter().next();
                first.ok_or_else(|| {
                    ValidationError::invalid_format("Boundary multipolygon is empty")
                })?
            }
            _ => {
                return Err(ValidationError::invalid_format(
                    "Boundary geometry must be a Polygon or MultiPolygon",
                ));
            }
        };

        Self::new(
            polygon
                .exterior()
                .coords()
                .map(|coord| [coord.x, coord.y])
                .collect(),
        )
    }

    fn from_coordinate_array(rings: &[Value]) -> Result<Self, ValidationError> {
        let ring_values: &[Value] = match rings.first() {
            Some(Value::Array(first)) if first.first().is_some_and(Value::is_array) => first,
            _ => rings,
        };

        let ring: Vec<Position> = ring_values
            .iter()
            .map(as_position)
            .collect::<Option<Vec<Position>>>()
            .ok_or_else(|| {
                ValidationError::invalid_format("Boundary positions must be [longitude, latitude]")
            })?;

        Self::new(ring)
    }

    /// Returns the ring positions as stored.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.ring
    }

    /// Returns the number of boundary segments.
    ///
    /// A closed ring repeats its first position at the end; that repetition
    /// does not start a segment of its own.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        match (self.ring.first(), self.ring.last()) {
            (Some(first), Some(last)) if self.ring.len() > 1 && first == last => {
                self.ring.len() - 1
            }
            _ => self.ring.len(),
        }
    }
}
