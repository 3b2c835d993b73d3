/// User agent string sent with every request to identify this client to the Marketo API
pub const USER_AGENT: &str = concat!("marketo-client/", env!("CARGO_PKG_VERSION"));
/// Path of the OAuth2 identity endpoint, relative to the instance base URL
pub const IDENTITY_TOKEN_PATH: &str = "/identity/oauth/token";
/// Prefix shared by every REST endpoint
pub const REST_PREFIX: &str = "/rest/v1";
/// Seconds subtracted from `expires_in` so a token is renewed before the server rejects it
pub const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;
/// Longest lifetime accepted from the identity endpoint, longer values are capped
pub const MAX_TOKEN_LIFETIME_SECS: i64 = 86_400;
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// Largest page Marketo will return for list-type queries
pub const MAX_BATCH_SIZE: u32 = 300;
/// Largest number of records accepted by a single write call
pub const MAX_INPUT_RECORDS: usize = 300;
/// Marketo accepts at most this many activity type ids per activity query
pub const MAX_ACTIVITY_TYPE_IDS: usize = 10;
