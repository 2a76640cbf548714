use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::AXIS_COUNT;
use crate::error::{ChartError, ChartResult};

/// One immutable `(data, labels)` pair: the chart's desired state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    data: [f64; AXIS_COUNT],
    labels: [String; AXIS_COUNT],
}

impl ChartSnapshot {
    pub fn new(data: Vec<f64>, labels: Vec<String>) -> ChartResult<Self> {
        let arity_error = ChartError::Configuration {
            data_len: data.len(),
            labels_len: labels.len(),
        };
        let data: [f64; AXIS_COUNT] = data.try_into().map_err(|_| arity_error.clone())?;
        let labels: [String; AXIS_COUNT] = labels.try_into().map_err(|_| arity_error)?;
        Ok(Self { data, labels })
    }

    pub fn from_slices<L: AsRef<str>>(data: &[f64], labels: &[L]) -> ChartResult<Self> {
        if data.len() != AXIS_COUNT || labels.len() != AXIS_COUNT {
            return Err(ChartError::Configuration {
                data_len: data.len(),
                labels_len: labels.len(),
            });
        }
        Ok(Self {
            data: std::array::from_fn(|axis| data[axis]),
            labels: std::array::from_fn(|axis| labels[axis].as_ref().to_owned()),
        })
    }

    /// Parses the page-data payload served to the host (`radarData` and
    /// `radarLabels`; other fields are ignored).
    pub fn from_page_data_json(input: &str) -> ChartResult<Self> {
        let payload: PageDataPayload = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse page data payload: {e}"))
        })?;
        Self::new(payload.radar_data, payload.radar_labels)
    }

    #[must_use]
    pub fn data(&self) -> &[f64; AXIS_COUNT] {
        &self.data
    }

    #[must_use]
    pub fn labels(&self) -> &[String; AXIS_COUNT] {
        &self.labels
    }

    /// Value equality of the data vectors; `NaN` equals `NaN`.
    #[must_use]
    pub fn has_same_data(&self, data: &[f64; AXIS_COUNT]) -> bool {
        data_equals(&self.data, data)
    }
}

#[must_use]
pub fn data_equals(left: &[f64; AXIS_COUNT], right: &[f64; AXIS_COUNT]) -> bool {
    left.iter()
        .zip(right)
        .all(|(l, r)| OrderedFloat(*l) == OrderedFloat(*r))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageDataPayload {
    radar_data: Vec<f64>,
    radar_labels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{ChartSnapshot, data_equals};
    use crate::error::ChartError;

    fn labels() -> Vec<String> {
        ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|label| (*label).to_owned())
            .collect()
    }

    #[test]
    fn wrong_arity_reports_both_lengths() {
        let err = ChartSnapshot::new(vec![1.0; 5], labels()).expect_err("5 data points");
        assert_eq!(
            err,
            ChartError::Configuration {
                data_len: 5,
                labels_len: 6
            }
        );

        let mut seven = labels();
        seven.push("G".to_owned());
        let err = ChartSnapshot::from_slices(&[0.0; 6], &seven).expect_err("7 labels");
        assert!(err.is_configuration());
    }

    #[test]
    fn nan_data_compares_equal_to_itself() {
        let data = [f64::NAN, 1.0, 2.0, 3.0, 4.0, 5.0];
        assert!(data_equals(&data, &data));
        assert!(!data_equals(&data, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]));
    }

    #[test]
    fn page_data_payload_ignores_unrelated_fields() {
        let json = r#"{
            "radarLabels": ["Health", "Intelligence", "Extroversion", "Attractiveness", "Interests", "Personality"],
            "radarData": [5, 6, 7, 8, 9, 4],
            "carouselItems": []
        }"#;
        let snapshot = ChartSnapshot::from_page_data_json(json).expect("valid payload");
        assert_eq!(snapshot.data(), &[5.0, 6.0, 7.0, 8.0, 9.0, 4.0]);
        assert_eq!(snapshot.labels()[0], "Health");
    }

    #[test]
    fn page_data_payload_with_short_data_is_a_configuration_error() {
        let json = r#"{"radarLabels": ["a","b","c"], "radarData": [1, 2, 3]}"#;
        let err = ChartSnapshot::from_page_data_json(json).expect_err("arity");
        assert!(err.is_configuration());
    }

    #[test]
    fn malformed_payload_is_invalid_data() {
        let err = ChartSnapshot::from_page_data_json("{").expect_err("malformed");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}
