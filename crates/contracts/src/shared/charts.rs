use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Pie,
    Donut,
    Bar,
}

/// One slice (pie/donut) or one bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub value_text: String,
    pub color: String,
}

/// Chart specification issued by the backend and drawn by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    /// Sum of the non-negative point values.
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.value.max(0.0)).sum()
    }

    /// Largest point value, 0 when empty.
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    /// Share of each point in the total, in `[0, 1]`. All zero when the total is zero.
    pub fn shares(&self) -> Vec<f64> {
        let total = self.total();
        self.points
            .iter()
            .map(|p| {
                if total > 0.0 {
                    p.value.max(0.0) / total
                } else {
                    0.0
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, value: f64) -> ChartPoint {
        ChartPoint {
            label: label.into(),
            value,
            value_text: value.to_string(),
            color: "#000".into(),
        }
    }

    #[test]
    fn test_shares_ignore_negative_values() {
        let spec = ChartSpec {
            id: "mix".into(),
            title: "Mix".into(),
            kind: ChartKind::Pie,
            points: vec![point("a", 30.0), point("b", 10.0), point("c", -5.0)],
        };
        assert_eq!(spec.total(), 40.0);
        assert_eq!(spec.shares(), vec![0.75, 0.25, 0.0]);
        assert_eq!(spec.max_value(), 30.0);
    }

    #[test]
    fn test_shares_of_empty_chart() {
        let spec = ChartSpec {
            id: "empty".into(),
            title: "Empty".into(),
            kind: ChartKind::Donut,
            points: vec![point("a", 0.0)],
        };
        assert_eq!(spec.shares(), vec![0.0]);
    }
}
