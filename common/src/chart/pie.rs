use super::ChartPoint;
use std::f64::consts::TAU;

/// One slice of a pie chart: the x label and the y magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    /// Passed through as projected, ties and negatives included.
    pub value: f64,
}

impl PieSlice {
    pub fn is_drawable(&self) -> bool {
        self.value > 0.0
    }
}

pub fn pie_slices(points: &[ChartPoint]) -> Vec<PieSlice> {
    points
        .iter()
        .map(|point| PieSlice {
            label: point.label(),
            value: point.magnitude(),
        })
        .collect()
}

/// Start and end angle (radians, clockwise from 12 o'clock) of each slice.
///
/// Only positive values take up room; other slices get `None`.
pub fn slice_angles(slices: &[PieSlice]) -> Vec<Option<(f64, f64)>> {
    let total: f64 = slices
        .iter()
        .filter(|slice| slice.is_drawable())
        .map(|slice| slice.value)
        .sum();

    let mut start = 0.0;
    slices
        .iter()
        .map(|slice| {
            if !slice.is_drawable() || total <= 0.0 {
                return None;
            }
            let end = start + slice.value / total * TAU;
            let span = (start, end);
            start = end;
            Some(span)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::CellValue;

    fn point(label: &str, y: CellValue) -> ChartPoint {
        ChartPoint {
            x: Some(label.into()),
            y: Some(y),
        }
    }

    #[test]
    fn negative_and_text_values_pass_through() {
        let slices = pie_slices(&[
            point("a", CellValue::from(3_i64)),
            point("b", CellValue::from(-2_i64)),
            point("c", CellValue::from("n/a")),
        ]);

        let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![3.0, -2.0, 0.0]);
    }

    #[test]
    fn angles_cover_the_circle_with_positive_slices_only() {
        let slices = pie_slices(&[
            point("a", CellValue::from(1_i64)),
            point("b", CellValue::from(-5_i64)),
            point("c", CellValue::from(1_i64)),
        ]);

        let angles = slice_angles(&slices);

        assert_eq!(angles[1], None);
        let (a_start, a_end) = angles[0].unwrap();
        let (c_start, c_end) = angles[2].unwrap();
        assert_eq!(a_start, 0.0);
        assert!((a_end - TAU / 2.0).abs() < 1e-9);
        assert_eq!(c_start, a_end);
        assert!((c_end - TAU).abs() < 1e-9);
    }

    #[test]
    fn nothing_drawable_yields_no_angles() {
        let slices = pie_slices(&[point("a", CellValue::from(0_i64))]);
        assert_eq!(slice_angles(&slices), vec![None]);
    }
}
