use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spreadsheet {
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sheet {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    #[serde(default)]
    pub sheet_id: i64,
    pub title: String,
}

impl Spreadsheet {
    pub fn titles(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.properties.title.clone()).collect()
    }

    pub fn sheet_id(&self, title: &str) -> Option<i64> {
        self.sheets.iter().find(|s| s.properties.title == title).map(|s| s.properties.sheet_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchUpdate {
    pub requests: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValueRange {
    pub values: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    #[serde(default)]
    pub updated_range: Option<String>,
    #[serde(default)]
    pub updated_rows: u64,
    #[serde(default)]
    pub updated_cells: u64,
}

pub fn add_sheet_request(title: &str) -> Value {
    json!({ "addSheet": { "properties": { "title": title } } })
}

/// Makes the text of a single row bold. `row` is zero-based.
pub fn bold_row_request(sheet_id: i64, row: u32) -> Value {
    json!({
        "repeatCell": {
            "range": { "sheetId": sheet_id, "startRowIndex": row, "endRowIndex": row + 1 },
            "cell": { "userEnteredFormat": { "textFormat": { "bold": true } } },
            "fields": "userEnteredFormat.textFormat.bold"
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn spreadsheet_tabs() {
        let json = include_str!("./test_assets/spreadsheet.json");
        let sheet: Spreadsheet = serde_json::from_str(json).unwrap();
        assert_eq!(sheet.titles(), vec!["Sheet1".to_string(), "2024-03-30".to_string()]);
        assert_eq!(sheet.sheet_id("2024-03-30"), Some(1402651225));
        assert_eq!(sheet.sheet_id("2024-03-31"), None);
    }

    #[test]
    fn header_format_request() {
        let request = bold_row_request(77, 0);
        assert_eq!(request["repeatCell"]["range"]["sheetId"], 77);
        assert_eq!(request["repeatCell"]["range"]["startRowIndex"], 0);
        assert_eq!(request["repeatCell"]["range"]["endRowIndex"], 1);
        assert_eq!(request["repeatCell"]["cell"]["userEnteredFormat"]["textFormat"]["bold"], true);
        assert_eq!(request["repeatCell"]["fields"], "userEnteredFormat.textFormat.bold");
    }

    #[test]
    fn update_response() {
        let json = r#"{"spreadsheetId":"1AbC","updatedRange":"'2024-03-31'!A1:K4","updatedRows":4,
            "updatedColumns":11,"updatedCells":44}"#;
        let response: UpdateValuesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.updated_cells, 44);
        assert_eq!(response.updated_rows, 4);
        assert_eq!(add_sheet_request("2024-03-31")["addSheet"]["properties"]["title"], "2024-03-31");
    }
}
