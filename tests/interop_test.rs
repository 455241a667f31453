//! geo-types interop: WKB decoded here feeds georust types and back.

use geowkb::{Geometry, GeometryCollection, LinearRing, MultiPolygon, Point, Polygon, Wkb};

fn square(x0: f64, y0: f64, size: f64) -> Polygon {
    Polygon::from(vec![LinearRing::from(vec![
        Point::new(x0, y0),
        Point::new(x0 + size, y0),
        Point::new(x0 + size, y0 + size),
        Point::new(x0, y0 + size),
        Point::new(x0, y0),
    ])])
}

#[test]
fn test_decoded_wkb_to_geo_types() {
    let buf = MultiPolygon::from(vec![square(0.0, 0.0, 1.0), square(5.0, 5.0, 2.0)])
        .to_wkb()
        .unwrap();

    let geo: geo_types::Geometry<f64> = Geometry::from_wkb(&buf).unwrap().into();
    match geo {
        geo_types::Geometry::MultiPolygon(mp) => {
            assert_eq!(mp.0.len(), 2);
            let corner = mp.0[1].exterior().0[2];
            assert_eq!(corner, geo_types::Coord { x: 7.0, y: 7.0 });
        }
        other => panic!("unexpected geometry {:?}", other),
    }
}

#[test]
fn test_geo_types_to_wkb_and_back() {
    let ring = vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)];
    let polygon: geo_types::Polygon<f64> = geo_types::Polygon::new(ring.into(), vec![]);
    let members = vec![
        geo_types::Geometry::Point(geo_types::Point::new(1.0, 2.0)),
        geo_types::Geometry::Polygon(polygon),
    ];
    let geo = geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection(members));

    let geom = Geometry::from(geo.clone());
    let buf = geom.to_wkb().unwrap();
    let decoded = Geometry::from_wkb(&buf).unwrap();
    assert_eq!(decoded, geom);

    let back: geo_types::Geometry<f64> = decoded.into();
    assert_eq!(back, geo);
}

#[test]
fn test_triangle_is_stored_as_polygon() {
    let tri = geo_types::Triangle::new(
        geo_types::Coord { x: 0.0, y: 0.0 },
        geo_types::Coord { x: 1.0, y: 0.0 },
        geo_types::Coord { x: 0.0, y: 1.0 },
    );
    let geom = Geometry::from(geo_types::Geometry::Triangle(tri));
    let buf = geom.to_wkb().unwrap();
    assert_eq!(buf[1], 0x03);

    let gc = GeometryCollection::from(vec![geom]);
    let buf = gc.to_wkb().unwrap();
    assert_eq!(GeometryCollection::from_wkb(&buf).unwrap(), gc);
}
