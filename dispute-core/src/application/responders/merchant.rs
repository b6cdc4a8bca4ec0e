use crate::agent::{AgentClient, AgentResult};
use crate::domain::Responder;
use crate::domain::inputs::MerchantLookup;
use crate::domain::payloads::MerchantIntelligence;
use crate::infrastructure::dispatch::Dispatcher;

pub fn merchant_instruction(input: &MerchantLookup) -> String {
    let location = input
        .location
        .as_deref()
        .map(|location| format!("Location: {location}"))
        .unwrap_or_default();

    format!(
        "Analyze this transaction and decode the merchant descriptor:\n\n\
         Transaction: {descriptor}\n\
         Amount: ${amount}\n\
         Date: {date}\n\
         {location}\n\n\
         Provide a clear merchant name, identify if it's a subscription, and give context that would help the customer recognize this charge.",
        descriptor = input.raw_merchant_descriptor,
        amount = input.amount,
        date = input.transaction_date,
    )
}

impl<D: Dispatcher> AgentClient<D> {
    /// Decode a raw card-statement descriptor into a recognisable merchant.
    pub async fn merchant_intelligence(
        &self,
        input: &MerchantLookup,
    ) -> AgentResult<MerchantIntelligence> {
        self.call_responder(
            Responder::MerchantIntelligence,
            merchant_instruction(input),
            input,
        )
        .await
    }
}
