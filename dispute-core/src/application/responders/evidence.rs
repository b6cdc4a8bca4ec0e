use crate::agent::{AgentClient, AgentResult};
use crate::domain::Responder;
use crate::domain::inputs::EvidenceBundle;
use crate::domain::payloads::EvidenceCorrelation;
use crate::infrastructure::dispatch::Dispatcher;

pub fn evidence_instruction(_input: &EvidenceBundle) -> String {
    "Perform forensic analysis on this transaction to determine if the customer was likely present:\n\n\
     Analyze GPS correlation, device matching, and family usage patterns to provide an evidence-based assessment."
        .to_string()
}

impl<D: Dispatcher> AgentClient<D> {
    /// Correlate location, device and household evidence for a transaction.
    pub async fn evidence_correlation(
        &self,
        input: &EvidenceBundle,
    ) -> AgentResult<EvidenceCorrelation> {
        self.call_responder(
            Responder::EvidenceCorrelator,
            evidence_instruction(input),
            input,
        )
        .await
    }
}
