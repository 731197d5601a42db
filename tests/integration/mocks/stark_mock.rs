use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const RUG_CALCULATION_PATH: &str = "/ViewItem/RugCalculation";

/// Full endpoint URL on the mock server
pub fn endpoint_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), RUG_CALCULATION_PATH)
}

/// Build a RugCalculation response body
///
/// `values` are `(Type, Total)` pairs for `CalculationValues`.
pub fn calculation_response(carpet: f64, fabrication: f64, values: &[(&str, f64)]) -> Value {
    let values: Vec<Value> = values
        .iter()
        .map(|(value_type, total)| json!({"Type": value_type, "Total": total}))
        .collect();

    json!({
        "CalculationCharge": {
            "RetailCharge": {
                "CarpetCharge": carpet,
                "FabricationCharge": fabrication
            }
        },
        "CalculationValues": values
    })
}

/// Answer every RugCalculation request with the same body
///
/// # 参数
/// - `body`: JSON response body
/// - `latency_ms`: 响应延迟(毫秒)
pub async fn setup_stark_mock(body: Value, latency_ms: u64) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RUG_CALCULATION_PATH))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(latency_ms))
                .set_body_json(body),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

/// Answer every RugCalculation request with `status` and an empty body
pub async fn setup_stark_status_mock(status: u16) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RUG_CALCULATION_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(&mock_server)
        .await;

    mock_server
}

/// Price each padding/pristine combination from its request flags.
///
/// Base charges are 100 carpet + 20 fabrication; padding adds 15 and pristine
/// adds 10. The combination `failing` (if any) answers HTTP 500 instead.
pub async fn setup_stark_variant_mock(failing: Option<(bool, bool)>) -> MockServer {
    let mock_server = MockServer::start().await;

    for is_pristine in [false, true] {
        for is_padding in [false, true] {
            let response = if failing == Some((is_pristine, is_padding)) {
                ResponseTemplate::new(500)
            } else {
                let mut values = Vec::new();
                if is_padding {
                    values.push(("Padding", 15.0));
                }
                if is_pristine {
                    values.push(("Pristine", 10.0));
                }
                ResponseTemplate::new(200).set_body_json(calculation_response(100.0, 20.0, &values))
            };

            Mock::given(method("POST"))
                .and(path(RUG_CALCULATION_PATH))
                .and(body_partial_json(json!({
                    "IsPristineTreatment": is_pristine,
                    "IsAddingPadding": is_padding
                })))
                .respond_with(response)
                .mount(&mock_server)
                .await;
        }
    }

    mock_server
}
