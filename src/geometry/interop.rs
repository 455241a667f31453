//! Conversions to and from `geo_types`, so decoded values can be handed to
//! georust algorithms and geo values can be stored as WKB.
//!
//! Two conversions are lossy:
//! - `geo_types::Polygon::new` closes open rings, so a polygon with an
//!   unclosed ring does not survive a trip through geo-types unchanged.
//! - geo-types has no polygon without an exterior. A `Polygon` with no
//!   rings becomes one with an empty exterior, which converts back as a
//!   single empty ring.

use super::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

impl From<Point> for geo_types::Coord<f64> {
    fn from(p: Point) -> Self {
        geo_types::Coord { x: p.x, y: p.y }
    }
}

impl From<geo_types::Coord<f64>> for Point {
    fn from(c: geo_types::Coord<f64>) -> Self {
        Point::new(c.x, c.y)
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(p: Point) -> Self {
        geo_types::Point::new(p.x, p.y)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(p: geo_types::Point<f64>) -> Self {
        Point::new(p.x(), p.y())
    }
}

fn to_geo_line(points: Vec<Point>) -> geo_types::LineString<f64> {
    geo_types::LineString::new(points.into_iter().map(geo_types::Coord::from).collect())
}

fn from_geo_line(line: geo_types::LineString<f64>) -> Vec<Point> {
    line.0.into_iter().map(Point::from).collect()
}

impl From<LineString> for geo_types::LineString<f64> {
    fn from(line: LineString) -> Self {
        to_geo_line(line.0)
    }
}

impl From<geo_types::LineString<f64>> for LineString {
    fn from(line: geo_types::LineString<f64>) -> Self {
        LineString(from_geo_line(line))
    }
}

impl From<Polygon> for geo_types::Polygon<f64> {
    fn from(polygon: Polygon) -> Self {
        let mut rings = polygon.0.into_iter().map(|ring| to_geo_line(ring.0));
        let exterior = rings
            .next()
            .unwrap_or_else(|| geo_types::LineString::new(Vec::new()));
        geo_types::Polygon::new(exterior, rings.collect())
    }
}

impl From<geo_types::Polygon<f64>> for Polygon {
    fn from(polygon: geo_types::Polygon<f64>) -> Self {
        let (exterior, interiors) = polygon.into_inner();
        std::iter::once(exterior)
            .chain(interiors)
            .map(|ring| LinearRing(from_geo_line(ring)))
            .collect()
    }
}

impl From<MultiPoint> for geo_types::MultiPoint<f64> {
    fn from(mp: MultiPoint) -> Self {
        geo_types::MultiPoint(mp.0.into_iter().map(geo_types::Point::from).collect())
    }
}

impl From<geo_types::MultiPoint<f64>> for MultiPoint {
    fn from(mp: geo_types::MultiPoint<f64>) -> Self {
        mp.0.into_iter().map(Point::from).collect()
    }
}

impl From<MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(mls: MultiLineString) -> Self {
        geo_types::MultiLineString(mls.0.into_iter().map(geo_types::LineString::from).collect())
    }
}

impl From<geo_types::MultiLineString<f64>> for MultiLineString {
    fn from(mls: geo_types::MultiLineString<f64>) -> Self {
        mls.0.into_iter().map(LineString::from).collect()
    }
}

impl From<MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(mp: MultiPolygon) -> Self {
        geo_types::MultiPolygon(mp.0.into_iter().map(geo_types::Polygon::from).collect())
    }
}

impl From<geo_types::MultiPolygon<f64>> for MultiPolygon {
    fn from(mp: geo_types::MultiPolygon<f64>) -> Self {
        mp.0.into_iter().map(Polygon::from).collect()
    }
}

impl From<GeometryCollection> for geo_types::GeometryCollection<f64> {
    fn from(gc: GeometryCollection) -> Self {
        geo_types::GeometryCollection(gc.0.into_iter().map(geo_types::Geometry::from).collect())
    }
}

impl From<geo_types::GeometryCollection<f64>> for GeometryCollection {
    fn from(gc: geo_types::GeometryCollection<f64>) -> Self {
        gc.0.into_iter().map(Geometry::from).collect()
    }
}

impl From<Geometry> for geo_types::Geometry<f64> {
    fn from(geom: Geometry) -> Self {
        match geom {
            Geometry::Point(g) => geo_types::Geometry::Point(g.into()),
            Geometry::LineString(g) => geo_types::Geometry::LineString(g.into()),
            Geometry::Polygon(g) => geo_types::Geometry::Polygon(g.into()),
            Geometry::MultiPoint(g) => geo_types::Geometry::MultiPoint(g.into()),
            Geometry::MultiLineString(g) => geo_types::Geometry::MultiLineString(g.into()),
            Geometry::MultiPolygon(g) => geo_types::Geometry::MultiPolygon(g.into()),
            Geometry::GeometryCollection(g) => geo_types::Geometry::GeometryCollection(g.into()),
        }
    }
}

// WKB has no Line, Rect or Triangle; they map to their general shapes.
impl From<geo_types::Geometry<f64>> for Geometry {
    fn from(geom: geo_types::Geometry<f64>) -> Self {
        match geom {
            geo_types::Geometry::Point(g) => Geometry::Point(g.into()),
            geo_types::Geometry::Line(line) => {
                Geometry::LineString(LineString(vec![line.start.into(), line.end.into()]))
            }
            geo_types::Geometry::LineString(g) => Geometry::LineString(g.into()),
            geo_types::Geometry::Polygon(g) => Geometry::Polygon(g.into()),
            geo_types::Geometry::MultiPoint(g) => Geometry::MultiPoint(g.into()),
            geo_types::Geometry::MultiLineString(g) => Geometry::MultiLineString(g.into()),
            geo_types::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.into()),
            geo_types::Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.into()),
            geo_types::Geometry::Rect(rect) => Geometry::Polygon(rect.to_polygon().into()),
            geo_types::Geometry::Triangle(tri) => Geometry::Polygon(tri.to_polygon().into()),
        }
    }
}
