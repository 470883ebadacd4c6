//! HTTP handler functions for the Ezrelo API.

use std::panic;

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use ezrelo_address::{AddressError, NormalizedAddress};
use ezrelo_server_models::{
    ApiError, ApiHealth, ApiVerificationFailure, ApiVerifiedAddress, METHOD_NOT_ALLOWED,
    VerifyAddressRequest,
};

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/verify-address`
///
/// Normalizes a free-text US address. A fault inside the normalizer still
/// answers (500) with the original address.
pub async fn verify_address(body: web::Json<VerifyAddressRequest>) -> HttpResponse {
    let address = body.into_inner().address.unwrap_or_default();

    verify_with(address, ezrelo_address::verify)
}

/// Runs `verifier` on `address` and maps the outcome to a response.
fn verify_with(
    address: String,
    verifier: fn(&str) -> Result<NormalizedAddress, AddressError>,
) -> HttpResponse {
    match panic::catch_unwind(|| verifier(&address)) {
        Ok(Ok(result)) => {
            log::debug!(
                "Verified address {address:?} -> {:?} (changed: {})",
                result.normalized,
                result.changed
            );
            HttpResponse::Ok().json(ApiVerifiedAddress::new(address, result))
        }
        Ok(Err(e @ AddressError::Empty)) => {
            HttpResponse::BadRequest().json(ApiError::new(e.to_string()))
        }
        Err(_) => {
            log::error!("Address verification failed for {address:?}");
            HttpResponse::InternalServerError().json(ApiVerificationFailure::new(address))
        }
    }
}

/// Any method other than `POST` on `/api/verify-address`.
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ApiError::new(METHOD_NOT_ALLOWED))
}

/// Maps unreadable `verify-address` bodies (not JSON, `address` not a
/// string) to the same 400 as a missing address.
pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected verify-address payload: {err}");
    let response =
        HttpResponse::BadRequest().json(ApiError::new(AddressError::Empty.to_string()));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use super::verify_with;

    async fn post(body: Value) -> (StatusCode, Value) {
        let app = test::init_service(App::new().configure(crate::configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/verify-address")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn verifies_free_form_address() {
        let (status, body) =
            post(json!({ "address": "123 Main Street Springfield IL 62704" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "verifiedAddress": "123 Main St, Springfield, IL 62704",
                "original": "123 Main Street Springfield IL 62704",
                "verified": true,
                "uspsFormatted": true,
            })
        );
    }

    #[actix_web::test]
    async fn canonical_address_is_not_reformatted() {
        let (status, body) =
            post(json!({ "address": "123 Main St, Springfield, IL 62704" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["uspsFormatted"], json!(false));
        assert_eq!(
            body["verifiedAddress"],
            json!("123 Main St, Springfield, IL 62704")
        );
    }

    #[actix_web::test]
    async fn missing_address_is_rejected() {
        let (status, body) = post(json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Address is required" }));
    }

    #[actix_web::test]
    async fn blank_address_is_rejected() {
        let (status, body) = post(json!({ "address": "   " })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Address is required" }));
    }

    #[actix_web::test]
    async fn non_string_address_is_rejected() {
        let (status, body) = post(json!({ "address": 42 })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Address is required" }));
    }

    #[actix_web::test]
    async fn normalizer_fault_returns_original_address() {
        let resp = verify_with("123 Main St Springfield IL 62704".to_string(), |_| {
            panic!("normalizer fault")
        });

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({
                "error": "Address verification failed",
                "verifiedAddress": "123 Main St Springfield IL 62704",
            })
        );
    }

    #[actix_web::test]
    async fn other_methods_are_not_allowed() {
        let app = test::init_service(App::new().configure(crate::configure)).await;
        let req = test::TestRequest::get().uri("/api/verify-address").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }

    #[actix_web::test]
    async fn body_without_content_type_is_accepted() {
        let app = test::init_service(App::new().configure(crate::configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/verify-address")
            .set_payload(r#"{"address":"Main St IL 62704"}"#)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["verifiedAddress"], json!("Main St, IL 62704"));
    }

    #[actix_web::test]
    async fn health_reports_version() {
        let app = test::init_service(App::new().configure(crate::configure)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["healthy"], json!(true));
        assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
    }
}
