use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::{Context, Result};
use crate::records::Table;

use super::request::RequestDescriptor;

impl RequestDescriptor {
    /// Issue the GET with a fresh blocking client.
    pub fn execute(&self) -> Result<Table> {
        let client = Client::builder()
            .build()
            .context("Failed to construct blocking HTTP client")?;
        self.execute_with(&client)
    }

    /// Issue the GET and shape the JSON body into a [`Table`].
    ///
    /// The status code is not inspected; transport and decoding failures are
    /// returned as they are.
    pub fn execute_with(&self, client: &Client) -> Result<Table> {
        log::debug!("GET {}", self.redacted_url());

        let response = client.get(self.url()).send()?;
        log::debug!(
            "`{}` request answered with status {}",
            self.category(),
            response.status()
        );

        let body: Value = response.json()?;
        Table::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::error::AppError;
    use crate::fetch::{QueryParams, RequestArgs, RequestDescriptor};

    fn candles_against(base: String) -> RequestDescriptor {
        RequestDescriptor::new(RequestArgs {
            api_key: "TESTKEY".to_string(),
            asset: "stock".to_string(),
            category: "candles".to_string(),
            date_ranged: true,
            start_date: Some("2023-01-01".to_string()),
            end_date: Some("2023-01-31".to_string()),
            base: Some(base),
            params: QueryParams::new()
                .with("symbol", "aapl")
                .with("resolution", "D"),
            ..RequestArgs::default()
        })
        .unwrap()
    }

    #[test]
    fn fetches_candles_into_a_table() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/stock/candles")
                .query_param("symbol", "AAPL")
                .query_param("resolution", "D")
                .query_param("from", "1672531200")
                .query_param("to", "1675123200")
                .query_param("token", "TESTKEY");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "o": [130.28, 126.89],
                    "c": [125.07, 126.36],
                    "t": [1672704000, 1672790400],
                    "s": "ok"
                }));
        });

        let table = candles_against(server.base_url()).execute().unwrap();

        mock.assert();
        assert_eq!(table.columns(), ["o", "c", "t", "s"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("c").unwrap(), vec![&json!(125.07), &json!(126.36)]);
    }

    #[test]
    fn error_statuses_are_still_decoded() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stock/candles");
            then.status(403)
                .header("content-type", "application/json")
                .json_body(json!({"error": "You don't have access to this resource."}));
        });

        let table = candles_against(server.base_url()).execute().unwrap();

        assert_eq!(table.columns(), ["error"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn non_json_bodies_propagate() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stock/candles");
            then.status(200).body("<html>rate limited</html>");
        });

        let err = candles_against(server.base_url())
            .execute()
            .expect_err("body is not JSON");
        assert!(matches!(err, AppError::Reqwest(_)), "unexpected error: {err}");
    }

    #[test]
    fn transport_failures_propagate() {
        let request = candles_against("http://127.0.0.1:1".to_string());
        let err = request.execute().expect_err("nothing listens on port 1");
        assert!(matches!(err, AppError::Reqwest(_)), "unexpected error: {err}");
    }
}
