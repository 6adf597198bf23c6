//! Grid configuration.

use crate::geom::Point;
use crate::weights::Weights;

/// Everything needed to build a fresh [`Grid`](crate::Grid).
///
/// The default is the classic 20 × 50 board with the start at row 10,
/// column 15, the goal at row 10, column 35 and random weights in 1..=10.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub goal: Point,
    pub weights: Weights,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            start: Point::at(10, 15),
            goal: Point::at(10, 35),
            weights: Weights::default(),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: GridConfig = serde_json::from_str(r#"{ "rows": 5, "cols": 6 }"#).unwrap();
        assert_eq!(cfg.rows, 5);
        assert_eq!(cfg.cols, 6);
        assert_eq!(cfg.start, GridConfig::default().start);
        assert_eq!(cfg.weights, Weights::Random { min: 1, max: 10 });
    }

    #[test]
    fn weights_round_trip() {
        let cfg = GridConfig {
            weights: Weights::Uniform(3),
            ..GridConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
