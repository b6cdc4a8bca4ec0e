use crate::agent::{AgentClient, AgentResult};
use crate::domain::Responder;
use crate::domain::inputs::CaseIntake;
use crate::domain::payloads::CaseSummary;
use crate::infrastructure::dispatch::Dispatcher;
use serde::Serialize;

pub fn case_manager_instruction(input: &CaseIntake) -> String {
    let merchant = finding_line("Merchant Intelligence", input.merchant_intelligence.as_ref());
    let evidence = finding_line("Evidence Analysis", input.evidence_correlation.as_ref());
    let risk = finding_line("Risk Assessment", input.risk_scoring.as_ref());

    format!(
        "You are conducting an empathetic dispute intake interview.\n\n\
         The customer says: \"{message}\"\n\n\
         {merchant}\n\
         {evidence}\n\
         {risk}\n\n\
         Provide a summary and recommend next steps.",
        message = input.customer_message,
    )
}

fn finding_line<T: Serialize>(label: &str, finding: Option<&T>) -> String {
    finding
        .and_then(|finding| serde_json::to_string(finding).ok())
        .map(|json| format!("{label}: {json}"))
        .unwrap_or_default()
}

impl<D: Dispatcher> AgentClient<D> {
    /// Summarise the intake conversation and recommend the next step.
    pub async fn case_summary(&self, input: &CaseIntake) -> AgentResult<CaseSummary> {
        self.call_responder(Responder::CaseManager, case_manager_instruction(input), input)
            .await
    }
}
