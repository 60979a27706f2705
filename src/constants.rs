/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Base URL of the production Yonoma REST API.
///
/// Not used as an implicit default anywhere: pass it to `Config::new` when
/// targeting production.
pub const PRODUCTION_BASE_URL: &str = "https://api.yonoma.io/v1/";
/// User agent string used in HTTP requests to identify this client to the Yonoma API
pub const USER_AGENT: &str = concat!("yonoma-client/", env!("CARGO_PKG_VERSION"));
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default number of retries after a transport failure (no retries)
pub const DEFAULT_MAX_RETRY_COUNT: u32 = 0;
/// Default delay in seconds between transport retries
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 1;
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "YONOMA_API_KEY";
/// Environment variable holding the REST base URL
pub const ENV_BASE_URL: &str = "YONOMA_BASE_URL";
/// Environment variable holding the request timeout in seconds
pub const ENV_REST_TIMEOUT: &str = "YONOMA_REST_TIMEOUT";
/// Environment variable holding the maximum retry count
pub const ENV_MAX_RETRY_COUNT: &str = "YONOMA_MAX_RETRY_COUNT";
/// Environment variable holding the delay between retries in seconds
pub const ENV_RETRY_DELAY_SECS: &str = "YONOMA_RETRY_DELAY_SECS";
