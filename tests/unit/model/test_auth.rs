use chrono::{Duration, TimeZone, Utc};
use marketo_client::constants::{MAX_TOKEN_LIFETIME_SECS, TOKEN_EXPIRY_MARGIN_SECS};
use marketo_client::error::AppError;
use marketo_client::model::auth::{Token, TokenResponse};

fn token_reply() -> TokenResponse {
    serde_json::from_str(
        r#"{"access_token": "0f9cc479-30ae-4d7a-b850-53bd9d44de45:sj","token_type": "bearer","expires_in": 3599,"scope": "apiuser@example.com"}"#,
    )
    .unwrap()
}

#[test]
fn token_reply_parses_all_fields() {
    let reply = token_reply();
    assert_eq!(
        reply.access_token.as_deref(),
        Some("0f9cc479-30ae-4d7a-b850-53bd9d44de45:sj")
    );
    assert_eq!(reply.token_type.as_deref(), Some("bearer"));
    assert_eq!(reply.expires_in, Some(3599));
    assert_eq!(reply.scope.as_deref(), Some("apiuser@example.com"));
    assert!(reply.error.is_none());
}

#[test]
fn token_expiry_subtracts_safety_margin() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    let token = Token::from_response(token_reply(), now).unwrap();

    assert_eq!(token.access_token, "0f9cc479-30ae-4d7a-b850-53bd9d44de45:sj");
    assert_eq!(token.token_type, "bearer");
    assert_eq!(
        token.expires_at,
        now + Duration::seconds(3599 - TOKEN_EXPIRY_MARGIN_SECS)
    );
    assert!(!token.is_expired_at(now));
    assert!(!token.is_expired_at(token.expires_at - Duration::seconds(1)));
    assert!(token.is_expired_at(token.expires_at));
}

#[test]
fn short_lived_token_is_not_given_negative_lifetime() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    let reply = TokenResponse {
        access_token: Some("abc".to_string()),
        expires_in: Some(10),
        ..TokenResponse::default()
    };
    let token = Token::from_response(reply, now).unwrap();
    assert_eq!(token.expires_at, now);
    assert!(token.is_expired_at(now));
    // token type falls back to bearer
    assert_eq!(token.token_type, "bearer");
}

#[test]
fn missing_access_token_is_an_auth_error() {
    let reply = TokenResponse {
        token_type: Some("bearer".to_string()),
        expires_in: Some(3599),
        ..TokenResponse::default()
    };
    match Token::from_response(reply, Utc::now()) {
        Err(AppError::Auth(msg)) => assert!(msg.contains("access_token")),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn oauth_error_description_is_reported() {
    let reply: TokenResponse = serde_json::from_str(
        r#"{"error":"unauthorized","error_description":"Bad client credentials"}"#,
    )
    .unwrap();
    match Token::from_response(reply, Utc::now()) {
        Err(AppError::Auth(msg)) => assert_eq!(msg, "Bad client credentials"),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn authorization_header_uses_bearer_scheme() {
    let token = Token {
        access_token: "abc:sj".to_string(),
        token_type: "bearer".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
    };
    assert_eq!(token.authorization_header(), "Bearer abc:sj");
    assert!(!token.is_expired());
    let secs = token.seconds_until_expiry();
    assert!(secs > 3500 && secs <= 3600);
}

#[test]
fn oversized_lifetime_is_capped() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    for expires_in in [10_000_000_000_000, 10_000_000_000_000_000, i64::MAX] {
        let reply = TokenResponse {
            expires_in: Some(expires_in),
            ..token_reply()
        };
        let token = Token::from_response(reply, now).unwrap();
        assert_eq!(
            token.expires_at,
            now + Duration::seconds(MAX_TOKEN_LIFETIME_SECS)
        );
    }
}

#[test]
fn negative_lifetime_expires_immediately() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    for expires_in in [-1, i64::MIN] {
        let reply = TokenResponse {
            expires_in: Some(expires_in),
            ..token_reply()
        };
        let token = Token::from_response(reply, now).unwrap();
        assert_eq!(token.expires_at, now);
        assert!(token.is_expired_at(now));
    }
}
