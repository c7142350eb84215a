use crate::clusterer::Point;
use crate::error::{ClusterError, Result};
use serde::{Deserialize, Serialize};

/// One student travelling on one day, as produced by the run-expansion step.
///
/// Coordinates stay in their original text form so they can be written back
/// out unchanged; [`StudentRun::point`] parses them for clustering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRun {
    #[serde(default)]
    pub run_id: String,
    pub day: String,
    pub time_window_start: String,
    pub time_window_end: String,
    #[serde(alias = "record_id")]
    pub student_id: String,
    #[serde(alias = "lat")]
    pub home_lat: String,
    #[serde(alias = "lng")]
    pub home_lng: String,
    #[serde(alias = "destination_id")]
    pub university_id: String,
}

impl StudentRun {
    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            day: self.day.clone(),
            window_start: self.time_window_start.clone(),
            window_end: self.time_window_end.clone(),
            destination_id: self.university_id.clone(),
        }
    }

    pub fn point(&self) -> Result<Point> {
        let lat = parse_coordinate(&self.student_id, "home_lat", &self.home_lat)?;
        let lng = parse_coordinate(&self.student_id, "home_lng", &self.home_lng)?;
        Ok(Point::new(lat, lng))
    }
}

fn parse_coordinate(record_id: &str, field: &'static str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ClusterError::InvalidCoordinate {
            record_id: record_id.to_string(),
            field,
            value: raw.to_string(),
        }),
    }
}

/// Day, arrival window and destination shared by every member of a group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GroupKey {
    pub day: String,
    pub window_start: String,
    pub window_end: String,
    pub destination_id: String,
}

impl GroupKey {
    /// Identifier for the 1-based cluster `number` within this group,
    /// e.g. `Mon_08:00-09:00_U01_C03`
    pub fn cluster_id(&self, number: usize) -> String {
        format!(
            "{}_{}-{}_{}_C{:02}",
            self.day, self.window_start, self.window_end, self.destination_id, number
        )
    }
}
