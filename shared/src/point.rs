/// 2D arena coordinates shared between server and client.
/// `radius` travels with entities (cells, food, viruses) but plays no part in
/// point-to-point distance.

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, ts_rs::TS)]
#[ts(export, export_to = "../../client/src/shared/generated/")]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub radius: Option<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, radius: None }
    }

    /// Point carrying the radius of the entity centered on it.
    pub fn with_radius(x: f64, y: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            radius: Some(radius),
        }
    }

    /// Same coordinates, radius dropped.
    pub fn coords(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Shorthand constructor matching the client's `point(x, y)`
pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}
