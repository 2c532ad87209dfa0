use ordered_float::OrderedFloat;

use crate::core::geometry::distance_sq;
use crate::core::Point;
use crate::interaction::HoverHit;

use super::ChartEngine;

/// Pixel radius around the cursor searched for data points.
const HOVER_RADIUS_PX: f64 = 20.0;

impl ChartEngine {
    pub(super) fn update_hover(&mut self, px: Point) {
        self.hover = self.compute_hover(px);
    }

    /// Nearest rendered data point across all datasets within the hover
    /// radius, restricted to the visible plot rectangle. Distance ties keep
    /// the first dataset in declaration order.
    fn compute_hover(&self, px: Point) -> Option<HoverHit> {
        let transform = self.transform().ok()?;
        let area = transform.area();
        if !area.contains(px) {
            return None;
        }

        let radius_sq = HOVER_RADIUS_PX * HOVER_RADIUS_PX;
        self.config
            .datasets
            .iter()
            .enumerate()
            .flat_map(|(dataset_index, dataset)| {
                dataset
                    .data
                    .iter()
                    .enumerate()
                    .filter(|(_, point)| point.is_finite())
                    .filter_map(move |(point_index, &point)| {
                        let projected = transform.data_to_px(point);
                        if !area.contains(projected) {
                            return None;
                        }
                        let dist_sq = distance_sq(px, projected);
                        if dist_sq > radius_sq {
                            return None;
                        }
                        Some((
                            OrderedFloat(dist_sq),
                            HoverHit {
                                dataset_index,
                                point_index,
                                point,
                                px: projected,
                            },
                        ))
                    })
            })
            // `min_by_key` keeps the first minimum, so earlier datasets win ties.
            .min_by_key(|(dist_sq, _)| *dist_sq)
            .map(|(_, hit)| hit)
    }
}
