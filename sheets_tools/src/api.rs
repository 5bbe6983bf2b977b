use std::sync::Arc;

use log::*;
use reqwest::{Client, Method, Url};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    auth::fetch_access_token,
    data_objects::{add_sheet_request, bold_row_request, BatchUpdate, Spreadsheet, UpdateValuesResponse, ValueRange},
    ranges,
    AccessToken,
    SheetsApiError,
    SheetsConfig,
};

#[derive(Clone)]
pub struct SheetsApi {
    config: SheetsConfig,
    client: Arc<Client>,
    token: AccessToken,
}

impl SheetsApi {
    /// Creates a client and authenticates it. The access token is reused for every call made with this instance.
    pub async fn connect(config: SheetsConfig) -> Result<Self, SheetsApiError> {
        config.credentials.validate()?;
        let client = Client::builder().build().map_err(|e| SheetsApiError::Initialization(e.to_string()))?;
        let token = fetch_access_token(&client, &config.credentials).await?;
        info!("Authenticated with Google Sheets as {}", config.credentials.client_email);
        Ok(Self::with_token(config, Arc::new(client), token))
    }

    pub fn with_token(config: SheetsConfig, client: Arc<Client>, token: AccessToken) -> Self {
        Self { config, client, token }
    }

    async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        url: Url,
        params: &[(&str, &str)],
        body: Option<B>,
    ) -> Result<T, SheetsApiError> {
        trace!("Sending Sheets query: {method} {url}");
        let mut req = self.client.request(method, url).bearer_auth(self.token.token.reveal());
        if !params.is_empty() {
            req = req.query(params);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| SheetsApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("Sheets query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| SheetsApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| SheetsApiError::RestResponseError(e.to_string()))?;
            Err(SheetsApiError::QueryError { status, message })
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SheetsApiError> {
        let mut url =
            Url::parse(&self.config.base_url).map_err(|e| SheetsApiError::RestRequestError(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SheetsApiError::RestRequestError(format!("{} is not a valid base URL", self.config.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn spreadsheet_url(&self) -> Result<Url, SheetsApiError> {
        self.endpoint(&[&self.config.spreadsheet_id])
    }

    pub fn batch_update_url(&self) -> Result<Url, SheetsApiError> {
        self.endpoint(&[&format!("{}:batchUpdate", self.config.spreadsheet_id)])
    }

    pub fn values_url(&self, range: &str, action: Option<&str>) -> Result<Url, SheetsApiError> {
        let range = match action {
            Some(action) => format!("{range}:{action}"),
            None => range.to_string(),
        };
        self.endpoint(&[&self.config.spreadsheet_id, "values", &range])
    }

    pub async fn spreadsheet(&self) -> Result<Spreadsheet, SheetsApiError> {
        let url = self.spreadsheet_url()?;
        self.rest_query::<Spreadsheet, ()>(Method::GET, url, &[("fields", "sheets.properties")], None).await
    }

    pub async fn sheet_titles(&self) -> Result<Vec<String>, SheetsApiError> {
        let titles = self.spreadsheet().await?.titles();
        debug!("Spreadsheet has {} tabs: {}", titles.len(), titles.join(", "));
        Ok(titles)
    }

    pub async fn batch_update(&self, requests: Vec<Value>) -> Result<Value, SheetsApiError> {
        let url = self.batch_update_url()?;
        self.rest_query::<Value, BatchUpdate>(Method::POST, url, &[], Some(BatchUpdate { requests })).await
    }

    pub async fn add_sheet(&self, title: &str) -> Result<(), SheetsApiError> {
        self.batch_update(vec![add_sheet_request(title)]).await?;
        info!("Created tab '{title}'");
        Ok(())
    }

    /// Creates the tab if the spreadsheet does not have one with this title yet. Returns true if it was created.
    pub async fn ensure_sheet(&self, title: &str) -> Result<bool, SheetsApiError> {
        if self.sheet_titles().await?.iter().any(|t| t == title) {
            debug!("Tab '{title}' already exists");
            return Ok(false);
        }
        self.add_sheet(title).await?;
        Ok(true)
    }

    pub async fn clear_range(&self, range: &str) -> Result<(), SheetsApiError> {
        let url = self.values_url(range, Some("clear"))?;
        self.rest_query::<Value, Value>(Method::POST, url, &[], Some(Value::Object(Default::default()))).await?;
        debug!("Cleared {range}");
        Ok(())
    }

    /// Writes `rows` starting at `range`, with the values stored exactly as given.
    pub async fn update_values(
        &self,
        range: &str,
        rows: Vec<Vec<Value>>,
    ) -> Result<UpdateValuesResponse, SheetsApiError> {
        let url = self.values_url(range, None)?;
        let body = ValueRange { values: rows };
        let result = self
            .rest_query::<UpdateValuesResponse, ValueRange>(
                Method::PUT,
                url,
                &[("valueInputOption", "RAW")],
                Some(body),
            )
            .await?;
        debug!("Updated {} rows in {}", result.updated_rows, result.updated_range.as_deref().unwrap_or(range));
        Ok(result)
    }

    pub async fn sheet_id(&self, title: &str) -> Result<i64, SheetsApiError> {
        self.spreadsheet().await?.sheet_id(title).ok_or_else(|| SheetsApiError::SheetNotFound(title.to_string()))
    }

    pub async fn bold_header_row(&self, title: &str) -> Result<(), SheetsApiError> {
        let sheet_id = self.sheet_id(title).await?;
        self.batch_update(vec![bold_row_request(sheet_id, 0)]).await?;
        debug!("Formatted header row of '{title}'");
        Ok(())
    }

    /// Replaces the contents of the tab `title` with `rows` and bolds the first row. The tab is created if needed.
    ///
    /// Returns the number of cells written.
    pub async fn write_table(&self, title: &str, rows: Vec<Vec<Value>>) -> Result<u64, SheetsApiError> {
        self.ensure_sheet(title).await?;
        self.clear_range(&ranges::clear_range(title)).await?;
        let result = self.update_values(&ranges::anchor(title), rows).await?;
        info!("{} cells updated.", result.updated_cells);
        self.bold_header_row(title).await?;
        Ok(result.updated_cells)
    }
}
