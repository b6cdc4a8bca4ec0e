use crate::agent::{AgentClient, AgentResult};
use crate::domain::Responder;
use crate::domain::inputs::ResolutionOrder;
use crate::domain::payloads::Resolution;
use crate::infrastructure::dispatch::Dispatcher;

pub fn resolution_instruction(input: &ResolutionOrder) -> String {
    let credit = input
        .provisional_credit_amount
        .filter(|amount| *amount != 0.0)
        .map(|amount| format!("Credit Amount: ${amount}"))
        .unwrap_or_default();
    let notes = input
        .analyst_notes
        .as_deref()
        .filter(|notes| !notes.is_empty())
        .map(|notes| format!("Analyst Notes: {notes}"))
        .unwrap_or_default();

    format!(
        "Process this dispute resolution:\n\n\
         Decision: {decision}\n\
         {credit}\n\
         {notes}\n\n\
         Execute the decision and prepare customer communication.",
        decision = input.decision,
    )
}

impl<D: Dispatcher> AgentClient<D> {
    /// Execute an analyst decision and draft the customer communication.
    pub async fn resolution(&self, input: &ResolutionOrder) -> AgentResult<Resolution> {
        self.call_responder(Responder::Resolution, resolution_instruction(input), input)
            .await
    }
}
