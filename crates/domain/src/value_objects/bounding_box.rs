//! Bounding box used to frame a route on a map

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Smallest latitude/longitude rectangle enclosing a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// South-west corner
    pub south_west: Coordinate,
    /// North-east corner
    pub north_east: Coordinate,
}

impl BoundingBox {
    /// Compute the box enclosing all points, or `None` for an empty slice
    #[must_use]
    pub fn enclosing(points: &[Coordinate]) -> Option<Self> {
        let first = points.first()?;
        let init = (
            first.latitude(),
            first.longitude(),
            first.latitude(),
            first.longitude(),
        );
        let (min_lat, min_lon, max_lat, max_lon) =
            points.iter().fold(init, |(s, w, n, e), p| {
                (
                    s.min(p.latitude()),
                    w.min(p.longitude()),
                    n.max(p.latitude()),
                    e.max(p.longitude()),
                )
            });

        Some(Self {
            south_west: Coordinate::new_unchecked(min_lat, min_lon),
            north_east: Coordinate::new_unchecked(max_lat, max_lon),
        })
    }

    /// Check whether a point lies inside the box (edges included)
    #[must_use]
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.south_west.latitude()..=self.north_east.latitude()).contains(&point.latitude())
            && (self.south_west.longitude()..=self.north_east.longitude())
                .contains(&point.longitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_box() {
        assert!(BoundingBox::enclosing(&[]).is_none());
    }

    #[test]
    fn single_point_is_degenerate_box() {
        let p = Coordinate::berlin();
        let bbox = BoundingBox::enclosing(&[p]).unwrap();
        assert_eq!(bbox.south_west, p);
        assert_eq!(bbox.north_east, p);
    }

    #[test]
    fn encloses_all_points() {
        let points = [
            Coordinate::new_unchecked(52.5, 13.4),
            Coordinate::new_unchecked(52.3, 13.1),
            Coordinate::new_unchecked(52.6, 13.2),
        ];
        let bbox = BoundingBox::enclosing(&points).unwrap();
        assert_eq!(bbox.south_west, Coordinate::new_unchecked(52.3, 13.1));
        assert_eq!(bbox.north_east, Coordinate::new_unchecked(52.6, 13.4));
        assert!(points.iter().all(|p| bbox.contains(p)));
        assert!(!bbox.contains(&Coordinate::london()));
    }
}
