//! Multi-geometries: every member carries its own header on the wire.

use serde::{Deserialize, Serialize};

use super::line::LineString;
use super::point::Point;
use super::polygon::Polygon;
use crate::error::Result;
use crate::protocol::{
    decode_sequence, encode_sequence, sequence_len, Cardinality, Decoder, Encoder, Headered, Kind,
    Payload, Wkb, COUNT_SIZE,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint(pub Vec<Point>);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString(pub Vec<LineString>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon(pub Vec<Polygon>);

super::sequence_newtype!(MultiPoint, Point);
super::sequence_newtype!(MultiLineString, LineString);
super::sequence_newtype!(MultiPolygon, Polygon);

macro_rules! headered_collection {
    ($name:ident, $member:ty, $kind:expr, $cardinality:expr) => {
        impl Payload for $name {
            const MIN_SIZE: usize = COUNT_SIZE;

            fn decode_payload(decoder: &mut Decoder<'_>) -> Result<Self> {
                decode_sequence::<Headered<$member>>(decoder, $cardinality).map(Self)
            }

            fn encode_payload(&self, encoder: &mut Encoder) -> Result<()> {
                encode_sequence::<Headered<$member>>(&self.0, $cardinality, encoder)
            }

            fn payload_len(&self) -> usize {
                sequence_len::<Headered<$member>>(&self.0)
            }
        }

        impl Wkb for $name {
            const KIND: Kind = $kind;
        }
    };
}

headered_collection!(MultiPoint, Point, Kind::MultiPoint, Cardinality::NonEmpty);
headered_collection!(
    MultiLineString,
    LineString,
    Kind::MultiLineString,
    Cardinality::AllowEmpty
);
headered_collection!(
    MultiPolygon,
    Polygon,
    Kind::MultiPolygon,
    Cardinality::NonEmpty
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WkbError;
    use crate::geometry::LinearRing;

    #[test]
    fn test_multipoint_invalid() {
        let cases: Vec<(WkbError, Vec<u8>)> = vec![
            // no payload
            (
                WkbError::InvalidStorage,
                vec![0x01, 0x04, 0x00, 0x00, 0x00, 0x00],
            ),
            // invalid type
            (
                WkbError::UnsupportedValue,
                vec![0x01, 0x42, 0x00, 0x00, 0x00, 0x00],
            ),
            // one point announced, none present
            (
                WkbError::InvalidStorage,
                vec![0x01, 0x04, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
            ),
            // zero points
            (
                WkbError::InvalidStorage,
                vec![0x01, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
            ),
        ];

        for (expected, buf) in cases {
            let result = MultiPoint::from_wkb(&buf);
            assert_eq!(result, Err(expected), "buf {:02x?}", buf);
        }
    }

    #[test]
    fn test_multipoint_members_are_headered() {
        let mp = MultiPoint::from(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        let buf = mp.to_wkb().unwrap();
        assert_eq!(buf.len(), 5 + 4 + 2 * (5 + 16));
        assert_eq!(&buf[9..14], &[0x01, 0x01, 0x00, 0x00, 0x00]);
        assert_eq!(&buf[30..35], &[0x01, 0x01, 0x00, 0x00, 0x00]);
        assert_eq!(MultiPoint::from_wkb(&buf).unwrap(), mp);
    }

    #[test]
    fn test_multipoint_wrong_member_tag() {
        let mp = MultiPoint::from(vec![Point::new(1.0, 2.0)]);
        let mut buf = mp.to_wkb().unwrap();
        buf[10] = Kind::LineString as u8;
        assert_eq!(MultiPoint::from_wkb(&buf), Err(WkbError::UnsupportedValue));
    }

    #[test]
    fn test_multilinestring_roundtrip() {
        let mls = MultiLineString::from(vec![
            LineString::from(vec![Point::new(10.0, 10.0), Point::new(20.0, 20.0)]),
            LineString::from(vec![
                Point::new(40.0, 40.0),
                Point::new(30.0, 30.0),
                Point::new(40.0, 20.0),
            ]),
        ]);
        let buf = mls.to_wkb().unwrap();
        assert_eq!(buf.len(), mls.encoded_len());
        assert_eq!(MultiLineString::from_wkb(&buf).unwrap(), mls);

        let empty = MultiLineString::default();
        let buf = empty.to_wkb().unwrap();
        assert_eq!(MultiLineString::from_wkb(&buf).unwrap(), empty);
    }

    #[test]
    fn test_multipolygon_invalid() {
        let cases: Vec<(WkbError, Vec<u8>)> = vec![
            (
                WkbError::UnsupportedValue,
                vec![0x01, 0x42, 0x00, 0x00, 0x00],
            ),
            (
                WkbError::InvalidStorage,
                vec![0x01, 0x06, 0x00, 0x00, 0x00],
            ),
            (
                WkbError::InvalidStorage,
                vec![0x01, 0x06, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
            ),
            // invalid member type
            (
                WkbError::UnsupportedValue,
                vec![
                    0x01, 0x06, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x42, 0x00, 0x00,
                    0x00,
                ],
            ),
            // LineString member
            (
                WkbError::UnsupportedValue,
                vec![
                    0x01, 0x06, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x02, 0x00, 0x00,
                    0x00, 0x00, 0x00, 0x00, 0x00,
                ],
            ),
            // no member payload
            (
                WkbError::InvalidStorage,
                vec![
                    0x01, 0x06, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x03, 0x00, 0x00,
                    0x00,
                ],
            ),
        ];

        for (expected, buf) in cases {
            let result = MultiPolygon::from_wkb(&buf);
            assert_eq!(result, Err(expected), "buf {:02x?}", buf);
        }
    }

    #[test]
    fn test_encode_rejects_empty() {
        let empty = MultiPoint::from(Vec::new());
        assert_eq!(empty.to_wkb(), Err(WkbError::InvalidStorage));
        let empty = MultiPolygon::from(Vec::new());
        assert_eq!(empty.to_wkb(), Err(WkbError::InvalidStorage));

        // Nested empty ring list is caught as well
        let mp = MultiPolygon::from(vec![Polygon::from(Vec::<LinearRing>::new())]);
        assert_eq!(mp.to_wkb(), Err(WkbError::InvalidStorage));
    }
}
