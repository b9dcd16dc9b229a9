use serde::{Deserialize, Serialize};

/// Sheets v4 `ValueRange`, used for both `values.get` and `values.update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    pub range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    /// Absent when every cell in the range is empty.
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UpdateValuesResponse {
    pub spreadsheet_id: String,
    pub updated_range: Option<String>,
    #[serde(default)]
    pub updated_rows: u32,
    #[serde(default)]
    pub updated_cells: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_without_values() {
        let parsed: ValueRange =
            serde_json::from_str(r#"{"range":"Names!A2:D1000","majorDimension":"ROWS"}"#).unwrap();
        assert!(parsed.values.is_empty());
        assert_eq!(parsed.major_dimension.as_deref(), Some("ROWS"));
    }

    #[test]
    fn test_value_range_ragged_rows() {
        let parsed: ValueRange = serde_json::from_str(
            r#"{"range":"Names!A2:D1000","values":[["Alice","B","2022-09-08"],["Bob","A"]]}"#,
        )
        .unwrap();
        assert_eq!(parsed.values.len(), 2);
        assert_eq!(parsed.values[0].len(), 3);
        assert_eq!(parsed.values[1], vec!["Bob", "A"]);
    }

    #[test]
    fn test_update_body_serializes_camel_case() {
        let body = ValueRange {
            range: "Names!A2:D1000".to_string(),
            major_dimension: Some("ROWS".to_string()),
            values: vec![vec!["Alice".to_string(), "B".to_string()]],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["majorDimension"], "ROWS");
        assert_eq!(json["values"][0][1], "B");
    }
}
