// ====
// Binance USDⓈ-M Futures REST Connector
// ====
// Public market metadata + signed TRADE / USER_DATA endpoints
// Custom HMAC signing, no external Binance SDKs
// ====

use async_trait::async_trait;
use orderbot_common::{OrderParams, SymbolFilters};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use url::form_urlencoded;

use super::errors::ExchangeError;
use super::signer::RequestSigner;
use super::traits::FuturesExchange;
use super::types::*;
use super::utils::error_from_response;
use crate::config::{self, Credentials};

const PING_PATH: &str = "/fapi/v1/ping";
const TIME_PATH: &str = "/fapi/v1/time";
const EXCHANGE_INFO_PATH: &str = "/fapi/v1/exchangeInfo";
const ORDER_PATH: &str = "/fapi/v1/order";
const OPEN_ORDERS_PATH: &str = "/fapi/v1/openOrders";
const POSITION_RISK_PATH: &str = "/fapi/v2/positionRisk";

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Binance Futures Connector
///
/// One `reqwest::Client` per connector, so every call of a run shares the
/// same HTTP session.
pub struct BinanceFuturesConnector {
    /// HTTP client
    client: Client,
    /// Signs TRADE / USER_DATA requests; `None` for public-only use
    signer: Option<RequestSigner>,
    /// API base URL
    base_url: String,
    recv_window_ms: u64,
}

impl BinanceFuturesConnector {
    /// Create a connector able to trade
    pub fn new(
        settings: &config::Exchange,
        credentials: Credentials,
    ) -> Result<Self, ExchangeError> {
        Self::build(settings, Some(RequestSigner::new(credentials)))
    }

    /// Create a connector limited to unsigned endpoints
    pub fn public(settings: &config::Exchange) -> Result<Self, ExchangeError> {
        Self::build(settings, None)
    }

    fn build(
        settings: &config::Exchange,
        signer: Option<RequestSigner>,
    ) -> Result<Self, ExchangeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            signer,
            base_url: settings.base_url().to_string(),
            recv_window_ms: settings.recv_window_ms,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ====================================================================
    // MARKET DATA
    // ====================================================================

    /// Connectivity check; the endpoint answers `{}`
    pub async fn ping(&self) -> Result<(), ExchangeError> {
        let _: serde_json::Value = self.get_public(PING_PATH, &[]).await?;
        Ok(())
    }

    pub async fn server_time(&self) -> Result<ServerTime, ExchangeError> {
        self.get_public(TIME_PATH, &[]).await
    }

    pub async fn exchange_info(&self) -> Result<ExchangeInfo, ExchangeError> {
        self.get_public(EXCHANGE_INFO_PATH, &[]).await
    }

    // ====================================================================
    // INTERNAL
    // ====================================================================

    async fn get_public<T: DeserializeOwned>(
        &self,
        path: &'static str,
        params: &[(&str, String)],
    ) -> Result<T, ExchangeError> {
        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&encode_query(params));
        }
        debug!(%path, "GET");

        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    /// Append recvWindow + timestamp, sign, and send
    async fn send_signed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &'static str,
        mut params: Vec<(&str, String)>,
    ) -> Result<T, ExchangeError> {
        let signer = self
            .signer
            .as_ref()
            .ok_or(ExchangeError::MissingCredentials(path))?;

        params.push(("recvWindow", self.recv_window_ms.to_string()));
        params.push((
            "timestamp",
            chrono::Utc::now().timestamp_millis().to_string(),
        ));

        let query = encode_query(&params);
        let signature = signer.sign(&query)?;
        let url = format!("{}{}?{}&signature={}", self.base_url, path, query, signature);
        debug!(%method, %path, "signed request");

        let response = self
            .client
            .request(method, &url)
            .header(API_KEY_HEADER, signer.api_key())
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ExchangeError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl FuturesExchange for BinanceFuturesConnector {
    async fn symbol_filters(&self, symbol: &str) -> Result<SymbolFilters, ExchangeError> {
        let info = self.exchange_info().await?;
        let filters = info.tradable_symbol(symbol)?.symbol_filters()?;
        debug!(%symbol, ?filters, "symbol filters");
        Ok(filters)
    }

    async fn create_order(&self, params: &OrderParams) -> Result<OrderResponse, ExchangeError> {
        info!(
            symbol = %params.symbol,
            side = %params.side,
            order_type = %params.order_type,
            quantity = %params.quantity,
            "Submitting order"
        );
        self.send_signed(Method::POST, ORDER_PATH, params.to_query_pairs())
            .await
    }

    async fn open_orders(&self, symbol: &str) -> Result<Vec<OpenOrder>, ExchangeError> {
        self.send_signed(
            Method::GET,
            OPEN_ORDERS_PATH,
            vec![("symbol", symbol.to_string())],
        )
        .await
    }

    async fn position_information(
        &self,
        symbol: &str,
    ) -> Result<Vec<PositionRisk>, ExchangeError> {
        self.send_signed(
            Method::GET,
            POSITION_RISK_PATH,
            vec![("symbol", symbol.to_string())],
        )
        .await
    }
}

// ====================================================================
// HELPERS
// ====================================================================

fn encode_query(params: &[(&str, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish()
}
