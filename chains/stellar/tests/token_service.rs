//! Token service behavior against a mocked Horizon endpoint.

use bridgekit_core::chains::ChainSymbol;
use bridgekit_core::client::CoreApiClient;
use bridgekit_core::config::{NodeRpcUrls, SdkOptions};
use bridgekit_core::token_service::{
    ApproveParams, GetNativeTokenBalanceParams, GetTokenBalanceParams, Token, TokenService,
};
use bridgekit_error::SdkError;
use bridgekit_stellar::SrbTokenService;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT: &str = "GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37";
const ISSUER: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";

fn service(horizon_url: &str) -> SrbTokenService {
    let urls = NodeRpcUrls::new().with_url(ChainSymbol::Stlr, horizon_url);
    let options = SdkOptions::new("https://core.api.invalid");
    let api = Arc::new(CoreApiClient::new(&options).unwrap());
    SrbTokenService::new(urls, options, api)
}

fn usd_token(origin: Option<&str>) -> Token {
    Token {
        symbol: "USD".to_string(),
        chain_symbol: ChainSymbol::Srb,
        token_address: "CA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUWDA".to_string(),
        origin_token_address: origin.map(str::to_string),
        decimals: 7,
    }
}

async fn mount_account(server: &MockServer, account: &str, balances: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{account}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "account_id": account,
            "balances": balances,
        })))
        .mount(server)
        .await;
}

async fn mount_not_found(server: &MockServer, account: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{account}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "type": "https://stellar.org/horizon-errors/not_found",
            "title": "Resource Missing",
            "status": 404,
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn token_balance_for_missing_account_is_zero() {
    let server = MockServer::start().await;
    mount_not_found(&server, ACCOUNT).await;

    let service = service(&server.uri());
    let params = GetTokenBalanceParams {
        account: ACCOUNT.to_string(),
        token: usd_token(Some(&format!("USD:{ISSUER}"))),
    };
    assert_eq!(service.get_token_balance(&params).await.unwrap(), "0");
}

#[tokio::test]
async fn token_balance_without_origin_address_is_a_config_error() {
    let server = MockServer::start().await;
    let service = service(&server.uri());
    let params = GetTokenBalanceParams {
        account: ACCOUNT.to_string(),
        token: usd_token(None),
    };
    let err = service.get_token_balance(&params).await.unwrap_err();
    assert!(matches!(err, SdkError::Config(_)));
    assert!(err.to_string().contains("origin token address missing"));
}

#[tokio::test]
async fn token_balance_with_malformed_origin_address_is_a_config_error() {
    let server = MockServer::start().await;
    let service = service(&server.uri());
    for bad in ["USDGISSUER", "USD:GISSUER:EXTRA"] {
        let params = GetTokenBalanceParams {
            account: ACCOUNT.to_string(),
            token: usd_token(Some(bad)),
        };
        let err = service.get_token_balance(&params).await.unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }
}

#[tokio::test]
async fn token_balance_converts_matching_trustline() {
    let server = MockServer::start().await;
    mount_account(
        &server,
        ACCOUNT,
        serde_json::json!([
            {"asset_type": "native", "balance": "103.5"},
            {"asset_type": "credit_alphanum4", "balance": "12.345678",
             "asset_code": "USD", "asset_issuer": ISSUER},
        ]),
    )
    .await;

    let service = service(&server.uri());
    let params = GetTokenBalanceParams {
        account: ACCOUNT.to_string(),
        token: usd_token(Some(&format!("USD:{ISSUER}"))),
    };
    assert_eq!(service.get_token_balance(&params).await.unwrap(), "123456780");
}

#[tokio::test]
async fn token_balance_matches_long_asset_codes() {
    let server = MockServer::start().await;
    mount_account(
        &server,
        ACCOUNT,
        serde_json::json!([
            {"asset_type": "credit_alphanum12", "balance": "2.5",
             "asset_code": "LONGCODE", "asset_issuer": ISSUER},
        ]),
    )
    .await;

    let service = service(&server.uri());
    let mut token = usd_token(Some(&format!("LONGCODE:{ISSUER}")));
    token.symbol = "LONGCODE".to_string();
    let params = GetTokenBalanceParams { account: ACCOUNT.to_string(), token };
    assert_eq!(service.get_token_balance(&params).await.unwrap(), "25000000");
}

#[tokio::test]
async fn token_balance_with_unmatched_issuer_is_zero() {
    let server = MockServer::start().await;
    mount_account(
        &server,
        ACCOUNT,
        serde_json::json!([
            {"asset_type": "credit_alphanum4", "balance": "12.345678",
             "asset_code": "USD", "asset_issuer": ISSUER},
        ]),
    )
    .await;

    let service = service(&server.uri());
    let params = GetTokenBalanceParams {
        account: ACCOUNT.to_string(),
        token: usd_token(Some("USD:GSOMEOTHERISSUER")),
    };
    assert_eq!(service.get_token_balance(&params).await.unwrap(), "0");
}

#[tokio::test]
async fn token_balance_ignores_native_and_pool_lines() {
    let server = MockServer::start().await;
    mount_account(
        &server,
        ACCOUNT,
        serde_json::json!([
            {"asset_type": "native", "balance": "103.5"},
            {"asset_type": "liquidity_pool_shares", "balance": "9.9"},
        ]),
    )
    .await;

    let service = service(&server.uri());
    let params = GetTokenBalanceParams {
        account: ACCOUNT.to_string(),
        token: usd_token(Some(&format!("USD:{ISSUER}"))),
    };
    assert_eq!(service.get_token_balance(&params).await.unwrap(), "0");
}

#[tokio::test]
async fn token_balance_propagates_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT}")))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = service(&server.uri());
    let params = GetTokenBalanceParams {
        account: ACCOUNT.to_string(),
        token: usd_token(Some(&format!("USD:{ISSUER}"))),
    };
    let err = service.get_token_balance(&params).await.unwrap_err();
    assert!(matches!(err, SdkError::RpcRequestFailed { status: 503, .. }));
}

#[tokio::test]
async fn token_balance_fails_without_configured_endpoint() {
    let urls = NodeRpcUrls::new();
    let options = SdkOptions::new("https://core.api.invalid");
    let api = Arc::new(CoreApiClient::new(&options).unwrap());
    let service = SrbTokenService::new(urls, options, api);

    let params = GetTokenBalanceParams {
        account: ACCOUNT.to_string(),
        token: usd_token(Some(&format!("USD:{ISSUER}"))),
    };
    let err = service.get_token_balance(&params).await.unwrap_err();
    assert!(matches!(err, SdkError::NodeRpcUrlNotConfigured(_)));
}

#[tokio::test]
async fn native_balance_converts_with_native_decimals() {
    let server = MockServer::start().await;
    mount_account(
        &server,
        ACCOUNT,
        serde_json::json!([
            {"asset_type": "credit_alphanum4", "balance": "1.0",
             "asset_code": "USD", "asset_issuer": ISSUER},
            {"asset_type": "native", "balance": "5.5"},
        ]),
    )
    .await;

    let service = service(&server.uri());
    let params = GetNativeTokenBalanceParams {
        account: ACCOUNT.to_string(),
        chain_symbol: ChainSymbol::Srb,
    };
    assert_eq!(service.get_native_token_balance(&params).await.unwrap(), "55000000");
}

#[tokio::test]
async fn native_balance_without_native_line_is_zero() {
    let server = MockServer::start().await;
    mount_account(
        &server,
        ACCOUNT,
        serde_json::json!([
            {"asset_type": "credit_alphanum4", "balance": "1.0",
             "asset_code": "USD", "asset_issuer": ISSUER},
        ]),
    )
    .await;

    let service = service(&server.uri());
    let params = GetNativeTokenBalanceParams {
        account: ACCOUNT.to_string(),
        chain_symbol: ChainSymbol::Srb,
    };
    assert_eq!(service.get_native_token_balance(&params).await.unwrap(), "0");
}

#[tokio::test]
async fn native_balance_propagates_account_not_found() {
    let server = MockServer::start().await;
    mount_not_found(&server, ACCOUNT).await;

    let service = service(&server.uri());
    let params = GetNativeTokenBalanceParams {
        account: ACCOUNT.to_string(),
        chain_symbol: ChainSymbol::Srb,
    };
    let err = service.get_native_token_balance(&params).await.unwrap_err();
    assert!(err.is_account_not_found());
}

#[tokio::test]
async fn approval_surface_is_unsupported() {
    let server = MockServer::start().await;
    let service = service(&server.uri());
    assert!(!service.supports_approvals());

    let params = ApproveParams {
        owner: ACCOUNT.to_string(),
        token: usd_token(Some(&format!("USD:{ISSUER}"))),
        spender: "CBSPENDER".to_string(),
    };
    assert!(matches!(
        service.get_allowance(&params).await.unwrap_err(),
        SdkError::MethodNotSupported
    ));
    assert!(matches!(
        service.approve(&params).await.unwrap_err(),
        SdkError::MethodNotSupported
    ));
    assert!(matches!(
        service.build_raw_transaction_approve(&params).await.unwrap_err(),
        SdkError::MethodNotSupported
    ));
}
