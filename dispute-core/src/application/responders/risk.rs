use crate::agent::{AgentClient, AgentResult};
use crate::domain::Responder;
use crate::domain::inputs::RiskProfile;
use crate::domain::payloads::RiskScoring;
use crate::infrastructure::dispatch::Dispatcher;

pub fn risk_instruction(_input: &RiskProfile) -> String {
    "Assess the fraud risk for this dispute:\n\n\
     Calculate friendly fraud probability, analyze account health, and provide a provisional credit recommendation."
        .to_string()
}

impl<D: Dispatcher> AgentClient<D> {
    pub async fn risk_scoring(&self, input: &RiskProfile) -> AgentResult<RiskScoring> {
        self.call_responder(Responder::RiskScoring, risk_instruction(input), input)
            .await
    }
}
