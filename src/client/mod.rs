//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    AccountBalance, AddStoplistEntry, ApiId, CheckCost, CheckStatus, CostEstimate, DayLimit,
    RemoveStoplistEntry, Reply, SEND_SMS_MAX_PER_REQUEST, SendReport, SendSms, SenderList,
    Stoplist, ValidationError,
};
use crate::transport;

const DEFAULT_BASE_URL: &str = "https://sms.ru/";

const SEND_PATH: &str = "sms/send";
const STATUS_PATH: &str = "sms/status";
const COST_PATH: &str = "sms/cost";
const BALANCE_PATH: &str = "my/balance";
const LIMIT_PATH: &str = "my/limit";
const SENDERS_PATH: &str = "my/senders";
const STOPLIST_GET_PATH: &str = "stoplist/get";
const STOPLIST_ADD_PATH: &str = "stoplist/add";
const STOPLIST_DEL_PATH: &str = "stoplist/del";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsRuClient`].
///
/// Gateway refusals and unreadable bodies are not errors; they come back as
/// [`Reply::Failure`] / [`Reply::Malformed`] in the `Ok` position. This enum
/// covers everything before the line protocol:
/// - HTTP-level failures (transport failures or non-2xx status),
/// - configuration and validation failures.
pub enum SmsRuError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The configured base URL could not be parsed or joined with an endpoint path.
    #[error("invalid base url: {0}")]
    BaseUrl(#[source] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SmsRuClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct SmsRuClientBuilder {
    api_id: ApiId,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsRuClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_id: ApiId) -> Self {
        Self {
            api_id,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the base URL all endpoint paths are joined onto.
    ///
    /// Mostly useful for pointing tests at a fake gateway.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsRuClient`].
    pub fn build(self) -> Result<SmsRuClient, SmsRuError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsRuError::Transport(Box::new(err)))?;

        Ok(SmsRuClient {
            api_id: self.api_id,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Client for the legacy SMS.RU plain-text API.
///
/// Every operation issues one HTTP GET (batch sends over 100 messages issue
/// several, see [`SmsRuClient::send_sms`]) with the `api_id` credential in the
/// query string, then decodes the newline-delimited body into a [`Reply`].
///
/// The credential is immutable after construction and the client holds no
/// other state, so a single instance can be shared freely across tasks.
pub struct SmsRuClient {
    api_id: ApiId,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl SmsRuClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`SmsRuClient::builder`].
    pub fn new(api_id: ApiId) -> Self {
        Self {
            api_id,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_id: ApiId) -> SmsRuClientBuilder {
        SmsRuClientBuilder::new(api_id)
    }

    /// Send one message or an ordered batch through `sms/send`.
    ///
    /// Batches over 100 messages are split into successive physical requests
    /// of at most 100 each, and the successful replies are aggregated: ids
    /// concatenate in input order, the balance reflects the latest chunk. The
    /// first non-success chunk reply is returned as-is and stops the loop, so
    /// ids from chunks already sent are dropped in that case. Split the batch
    /// yourself if you need per-chunk results.
    pub async fn send_sms(&self, request: SendSms) -> Result<Reply<SendReport>, SmsRuError> {
        match &request {
            SendSms::Single(single) => {
                let body = self
                    .request(SEND_PATH, transport::encode_single_send_query(single))
                    .await?;
                Ok(transport::decode_send_sms_reply(request.messages(), &body))
            }
            SendSms::Batch(batch) => {
                let mut report = SendReport {
                    balance: String::new(),
                    sms_ids: Vec::new(),
                };
                for chunk in batch.messages().chunks(SEND_SMS_MAX_PER_REQUEST) {
                    let body = self
                        .request(
                            SEND_PATH,
                            transport::encode_batch_send_query(chunk, batch.options()),
                        )
                        .await?;
                    match transport::decode_send_sms_reply(chunk, &body) {
                        Reply::Success(part) => {
                            report.balance = part.balance;
                            report.sms_ids.extend(part.sms_ids);
                        }
                        other => return Ok(other),
                    }
                }
                Ok(Reply::Success(report))
            }
        }
    }

    /// Ask what sending the given text to the given number would cost.
    pub async fn check_cost(&self, request: CheckCost) -> Result<Reply<CostEstimate>, SmsRuError> {
        let body = self
            .request(COST_PATH, transport::encode_check_cost_query(&request))
            .await?;
        Ok(transport::decode_check_cost_reply(&body))
    }

    /// Query the delivery state of a previously sent message.
    ///
    /// The gateway reports the state through the status code itself: `"100"`
    /// decodes to `Success(())`, anything else (e.g. `"102"` while in transit)
    /// to [`Reply::Failure`]; use [`StatusCode::known`] to interpret it.
    ///
    /// [`StatusCode::known`]: crate::domain::StatusCode::known
    pub async fn check_status(&self, request: CheckStatus) -> Result<Reply<()>, SmsRuError> {
        let body = self
            .request(STATUS_PATH, transport::encode_check_status_query(&request))
            .await?;
        Ok(transport::decode_status_only_reply(&body))
    }

    /// Fetch the account balance.
    pub async fn balance(&self) -> Result<Reply<AccountBalance>, SmsRuError> {
        let body = self.request(BALANCE_PATH, Vec::new()).await?;
        Ok(transport::decode_balance_reply(&body))
    }

    /// Fetch the daily sending limit and today's usage.
    pub async fn limit(&self) -> Result<Reply<DayLimit>, SmsRuError> {
        let body = self.request(LIMIT_PATH, Vec::new()).await?;
        Ok(transport::decode_limit_reply(&body))
    }

    /// Fetch every sender number enabled for the account.
    pub async fn senders(&self) -> Result<Reply<SenderList>, SmsRuError> {
        let body = self.request(SENDERS_PATH, Vec::new()).await?;
        Ok(transport::decode_senders_reply(&body))
    }

    /// Block a number from receiving messages.
    pub async fn add_to_stoplist(
        &self,
        request: AddStoplistEntry,
    ) -> Result<Reply<()>, SmsRuError> {
        let body = self
            .request(
                STOPLIST_ADD_PATH,
                transport::encode_add_stoplist_query(&request),
            )
            .await?;
        Ok(transport::decode_status_only_reply(&body))
    }

    /// Unblock a previously stoplisted number.
    pub async fn remove_from_stoplist(
        &self,
        request: RemoveStoplistEntry,
    ) -> Result<Reply<()>, SmsRuError> {
        let body = self
            .request(
                STOPLIST_DEL_PATH,
                transport::encode_remove_stoplist_query(&request),
            )
            .await?;
        Ok(transport::decode_status_only_reply(&body))
    }

    /// Fetch the full stoplist.
    pub async fn stoplist(&self) -> Result<Reply<Stoplist>, SmsRuError> {
        let body = self.request(STOPLIST_GET_PATH, Vec::new()).await?;
        Ok(transport::decode_stoplist_reply(&body))
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, SmsRuError> {
        let mut base = Url::parse(&self.base_url).map_err(SmsRuError::BaseUrl)?;
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(path).map_err(SmsRuError::BaseUrl)
    }

    async fn request(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<String, SmsRuError> {
        let mut url = self.endpoint_url(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(ApiId::FIELD, self.api_id.as_str());
            for (key, value) in &params {
                pairs.append_pair(key, value);
            }
        }

        let response = self.http.get(url).await.map_err(SmsRuError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmsRuError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}
