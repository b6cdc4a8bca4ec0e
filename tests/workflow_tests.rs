// Workflow tests - investigation and resolution over HTTP
//
// Every responder id is routed to a canned reply by the stub, so these tests
// exercise the parallel fan-out, partial failure handling and the resolution
// path exactly as a deployment would.

mod support;

use axum::http::StatusCode;
use dispute_core::agent::AgentClient;
use dispute_core::config::defaults::{
    DEFAULT_CASE_MANAGER_ID, DEFAULT_EVIDENCE_CORRELATOR_ID, DEFAULT_MERCHANT_INTELLIGENCE_ID,
    DEFAULT_RESOLUTION_ID, DEFAULT_RISK_SCORING_ID,
};
use dispute_core::domain::{Decision, DisputeStatus, Priority, RiskLevel};
use dispute_core::inputs::ResolutionOrder;
use dispute_core::workflow::{
    EVIDENCE_LABEL, InvestigationRequest, MERCHANT_LABEL, RISK_LABEL, WorkflowError,
};
use serde_json::json;
use support::{Canned, StubBuilder, envelope};

// ============================================================================
// Canned responder replies
// ============================================================================

const MERCHANT_REPLY: &str = r#"{
  "decodedMerchantName": "Joe's Coffee Shop",
  "merchantType": "Coffee Shop",
  "merchantLocation": "123 Main St, San Francisco, CA",
  "isSubscription": false,
  "customerHistory": {
    "previousTransactions": 12,
    "firstTransactionDate": "2024-01-15",
    "averageAmount": 6.5,
    "frequency": "weekly"
  },
  "contextualNote": "You visit this coffee shop about once a week."
}"#;

fn evidence_reply(overall: f64) -> String {
    format!(
        r#"```json
{{
  "gpsCorrelation": {{
    "matched": true,
    "customerLocationAtTime": "Within 0.2 miles of merchant location",
    "transactionLocation": "123 Main St, San Francisco, CA",
    "distanceInMiles": 0.15,
    "correlationScore": 92
  }},
  "deviceCorrelation": {{
    "matched": true,
    "transactionDeviceId": "device-abc123",
    "knownDevices": ["device-abc123"],
    "correlationScore": 95
  }},
  "familyUsageIndicators": {{
    "potentialFamilyUse": false,
    "authorizedUsers": [],
    "usagePattern": "No family usage pattern detected",
    "confidence": 85
  }},
  "overallCorrelationScore": {overall},
  "evidenceSummary": "GPS location matches merchant location.",
  "fraudIndicators": [],
  "legitimacyIndicators": ["Transaction made from known device"]
}}
```"#
    )
}

const CASE_SUMMARY_REPLY: &str = r#"Summary follows.
{
  "summary": "Customer does not recognize a coffee shop charge.",
  "recommendedNextStep": "Show purchase history at this merchant.",
  "conversationPoints": ["Show decoded merchant name"],
  "requiresHumanReview": true,
  "confidenceScore": 88
}"#;

const RESOLUTION_REPLY: &str = r#"{
  "provisionalCreditProcessed": true,
  "provisionalCreditAmount": 6.5,
  "chargebackFiled": true,
  "chargebackReasonCode": "10.4",
  "outcomeMessage": "We've issued a provisional credit of $6.50.",
  "nextSteps": ["Provisional credit will appear within 1 business day"],
  "estimatedResolutionDate": "2026-03-15"
}"#;

fn investigation_request() -> InvestigationRequest {
    serde_json::from_value(json!({
        "customerId": "cust-001",
        "customerMessage": "I don't recognize this coffee charge",
        "transaction": {
            "id": "txn-001",
            "rawMerchantDescriptor": "SQ *JOES COFFEE",
            "amount": 6.5,
            "transactionDate": "2026-01-30",
            "deviceId": "device-abc123"
        },
        "customer": {
            "id": "cust-001",
            "firstName": "John",
            "lastName": "Doe",
            "email": "john.doe@example.com",
            "accountCreatedAt": "2024-01-01",
            "averageMonthlyDeposits": 3500.0,
            "currentBalance": 2450.0,
            "accountStatus": "excellent"
        },
        "deviceFingerprints": [
            { "deviceId": "device-abc123", "deviceType": "mobile", "lastUsed": "2026-01-30" }
        ]
    }))
    .expect("valid investigation request")
}

// ============================================================================
// Investigation
// ============================================================================

#[tokio::test]
async fn failed_risk_agent_is_recorded_and_investigation_continues() {
    let stub = StubBuilder::default()
        .reply(DEFAULT_MERCHANT_INTELLIGENCE_ID, envelope(MERCHANT_REPLY))
        .reply(DEFAULT_EVIDENCE_CORRELATOR_ID, envelope(&evidence_reply(85.0)))
        .reply(
            DEFAULT_RISK_SCORING_ID,
            Canned::Json(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to process agent request" }),
            ),
        )
        .spawn()
        .await;
    let client = AgentClient::from_config(stub.config());

    let assessment = client
        .investigate(&investigation_request(), false)
        .await
        .expect("investigation completes");

    assert!(assessment.merchant_intelligence.is_some());
    assert!(assessment.evidence_correlation.is_some());
    assert!(assessment.risk_assessment.is_none());
    assert_eq!(assessment.failed_agents.len(), 1);
    assert_eq!(assessment.failed_agents[0].label, RISK_LABEL);
    assert_eq!(
        assessment.failed_agents[0].error,
        "Failed to process agent request"
    );

    // Correlation 85 alone pushes the case to review.
    assert!(assessment.requires_human_review);
    assert_eq!(assessment.status, DisputeStatus::UnderReview);
    assert_eq!(assessment.fraud_likelihood_score, 15);
    assert_eq!(assessment.priority, Priority::Medium);
    assert_eq!(stub.recorded().len(), 3);
}

#[tokio::test]
async fn summarize_adds_case_manager_findings() {
    let stub = StubBuilder::default()
        .reply(DEFAULT_MERCHANT_INTELLIGENCE_ID, envelope(MERCHANT_REPLY))
        .reply(DEFAULT_EVIDENCE_CORRELATOR_ID, envelope(&evidence_reply(40.0)))
        .reply(DEFAULT_RISK_SCORING_ID, Canned::Text(StatusCode::OK, "no idea".into()))
        .reply(DEFAULT_CASE_MANAGER_ID, envelope(CASE_SUMMARY_REPLY))
        .spawn()
        .await;
    let client = AgentClient::from_config(stub.config());

    let assessment = client
        .investigate(&investigation_request(), true)
        .await
        .expect("investigation completes");

    let summary = assessment.case_summary.as_ref().expect("case summary");
    assert_eq!(summary.confidence_score, 88.0);
    assert_eq!(assessment.failed_agents.len(), 1);
    assert_eq!(assessment.failed_agents[0].label, RISK_LABEL);
    assert!(!assessment.requires_human_review);
    assert_eq!(assessment.status, DisputeStatus::Investigating);
    assert_eq!(assessment.fraud_likelihood_score, 60);

    let recorded = stub.recorded();
    let case_call = recorded
        .iter()
        .find(|call| call.body["agentId"] == DEFAULT_CASE_MANAGER_ID)
        .expect("case manager was called");
    let message = case_call.body["message"].as_str().unwrap_or_default();
    assert!(message.contains("Joe's Coffee Shop"));
    assert!(message.contains("Context Data:"));
}

#[tokio::test]
async fn unreachable_responders_leave_neutral_assessment() {
    let stub = StubBuilder::default()
        .fallback(Canned::Text(StatusCode::BAD_GATEWAY, "".into()))
        .spawn()
        .await;
    let client = AgentClient::from_config(stub.config());

    let assessment = client
        .investigate(&investigation_request(), false)
        .await
        .expect("investigation completes");

    let mut labels: Vec<_> = assessment
        .failed_agents
        .iter()
        .map(|failure| failure.label.as_str())
        .collect();
    labels.sort_unstable();
    let mut expected = vec![EVIDENCE_LABEL, MERCHANT_LABEL, RISK_LABEL];
    expected.sort_unstable();
    assert_eq!(labels, expected);
    assert!(
        assessment
            .failed_agents
            .iter()
            .all(|failure| failure.error == "agent API error: 502")
    );
    assert_eq!(assessment.fraud_likelihood_score, 50);
    assert!(!assessment.requires_human_review);
    assert_eq!(assessment.risk_level, None::<RiskLevel>);
}

#[tokio::test]
async fn investigation_rejects_missing_customer_message() {
    let stub = StubBuilder::default().spawn().await;
    let client = AgentClient::from_config(stub.config());
    let mut request = investigation_request();
    request.customer_message = "  ".into();

    let err = client
        .investigate(&request, false)
        .await
        .expect_err("blank message must be rejected");

    assert!(matches!(err, WorkflowError::MissingField("customerMessage")));
    assert!(stub.recorded().is_empty());
}

// ============================================================================
// Resolution
// ============================================================================

#[tokio::test]
async fn approval_round_trips_through_resolution_agent() {
    let stub = StubBuilder::default()
        .reply(DEFAULT_RESOLUTION_ID, envelope(RESOLUTION_REPLY))
        .spawn()
        .await;
    let client = AgentClient::from_config(stub.config().with_api_key("desk-key"));
    let order = ResolutionOrder {
        dispute_id: "dispute-1700000000000".into(),
        decision: Decision::Approve,
        provisional_credit_amount: Some(6.5),
        analyst_notes: Some("Customer confirmed card was lost".into()),
    };

    let resolved = client.resolve(&order).await.expect("resolution succeeds");

    assert_eq!(resolved.id, "dispute-1700000000000");
    assert_eq!(resolved.status, DisputeStatus::Approved);
    assert!(resolved.provisional_credit_granted);
    assert!(resolved.provisional_credit_date.is_some());
    assert_eq!(resolved.chargeback_reason_code.as_deref(), Some("10.4"));

    let recorded = stub.recorded();
    assert_eq!(recorded[0].authorization.as_deref(), Some("Bearer desk-key"));
    assert_eq!(recorded[0].body["agentId"], DEFAULT_RESOLUTION_ID);
    let message = recorded[0].body["message"].as_str().unwrap_or_default();
    assert!(message.contains("Decision: approve"));
    assert!(message.contains("Customer confirmed card was lost"));
}

#[tokio::test]
async fn resolution_agent_failure_fails_the_resolution() {
    let stub = StubBuilder::default()
        .reply(DEFAULT_RESOLUTION_ID, envelope("Sorry, something went wrong."))
        .spawn()
        .await;
    let client = AgentClient::from_config(stub.config());
    let order = ResolutionOrder {
        dispute_id: "dispute-1".into(),
        decision: Decision::Deny,
        provisional_credit_amount: None,
        analyst_notes: None,
    };

    let err = client.resolve(&order).await.expect_err("must fail");

    assert!(matches!(
        err,
        WorkflowError::Agent {
            agent: "Resolution Agent",
            ..
        }
    ));
}
