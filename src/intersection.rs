// src/intersection.rs

use glam::DVec2;
use crate::geometry::Segment;

pub struct SegmentIntersection;

impl SegmentIntersection {
    /// Exact intersection point of two segments, if any.
    ///
    /// Parallel and collinear pairs report no intersection, as does any pair
    /// with a non-finite coordinate.
    pub fn intersects_at(a: &Segment, b: &Segment) -> Option<DVec2> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }

        let r = a.end - a.begin;
        let s = b.end - b.begin;
        let qp = b.begin - a.begin;

        let denominator = r.perp_dot(s);
        if denominator == 0.0 {
            return None;
        }

        let t = qp.perp_dot(s) / denominator;
        let u = qp.perp_dot(r) / denominator;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(a.begin + r * t)
        } else {
            None
        }
    }

    /// Nearest intersection of `ray` with `segments`, scanned in order.
    ///
    /// Only a strictly closer hit replaces the current one, so on equal
    /// distance the earlier segment wins. Without any hit the ray's far end
    /// is returned.
    pub fn nearest_hit(ray: &Segment, segments: &[Segment]) -> DVec2 {
        let mut nearest = ray.end;
        let mut nearest_distance_sq = nearest.distance_squared(ray.begin);

        for segment in segments {
            if let Some(p) = Self::intersects_at(ray, segment) {
                let distance_sq = p.distance_squared(ray.begin);
                if distance_sq < nearest_distance_sq {
                    nearest = p;
                    nearest_distance_sq = distance_sq;
                }
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(DVec2::new(x0, y0), DVec2::new(x1, y1))
    }

    #[test]
    fn crossing_segments_meet() {
        let p = SegmentIntersection::intersects_at(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 10.0, 10.0, 0.0));
        assert_eq!(p, Some(DVec2::new(5.0, 5.0)));
    }

    #[test]
    fn touching_at_endpoint_counts() {
        let p = SegmentIntersection::intersects_at(&seg(0.0, 0.0, 10.0, 0.0), &seg(10.0, -5.0, 10.0, 5.0));
        assert_eq!(p, Some(DVec2::new(10.0, 0.0)));
    }

    #[test]
    fn disjoint_parallel_and_collinear_do_not_meet() {
        assert_eq!(SegmentIntersection::intersects_at(&seg(0.0, 0.0, 1.0, 0.0), &seg(2.0, -1.0, 2.0, 1.0)), None);
        assert_eq!(SegmentIntersection::intersects_at(&seg(0.0, 0.0, 10.0, 0.0), &seg(0.0, 1.0, 10.0, 1.0)), None);
        assert_eq!(SegmentIntersection::intersects_at(&seg(0.0, 0.0, 10.0, 0.0), &seg(5.0, 0.0, 15.0, 0.0)), None);
    }

    #[test]
    fn zero_length_segment_never_hits() {
        assert_eq!(SegmentIntersection::intersects_at(&seg(0.0, 0.0, 10.0, 0.0), &seg(5.0, 0.0, 5.0, 0.0)), None);
    }

    #[test]
    fn non_finite_segments_are_ignored() {
        assert_eq!(SegmentIntersection::intersects_at(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, f64::NAN, 10.0, 0.0)), None);
        assert_eq!(SegmentIntersection::intersects_at(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 10.0, f64::INFINITY, 0.0)), None);
    }

    #[test]
    fn nearest_hit_picks_closest_wall() {
        let ray = seg(0.0, 0.0, 100.0, 0.0);
        let walls = [seg(50.0, -1.0, 50.0, 1.0), seg(20.0, -1.0, 20.0, 1.0), seg(80.0, -1.0, 80.0, 1.0)];
        assert_eq!(SegmentIntersection::nearest_hit(&ray, &walls), DVec2::new(20.0, 0.0));

        assert_eq!(SegmentIntersection::nearest_hit(&ray, &[]), DVec2::new(100.0, 0.0));
    }
}
