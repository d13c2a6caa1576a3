use super::{context_field, guidance_field, message_field, subject_field, text};
use crate::catalog::VersionSchemas;
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageResponderParameters {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponderResponse {
    pub positive: String,
    pub neutral: String,
    pub negative: String,
    pub recommend: Recommendation,
    pub reason: String,
}

pub fn schemas() -> VersionSchemas {
    let parameters = Schema::object()
        .property("message", message_field(3000))
        .property("subject", subject_field())
        .property("context", context_field())
        .property("guidance", guidance_field())
        .required(["message"])
        .additional_properties(false);

    let response = Schema::object()
        .property(
            "positive",
            text("Warm, welcoming reply that advances the conversation."),
        )
        .property(
            "neutral",
            text("Polite, factual reply that neither commits nor declines."),
        )
        .property(
            "negative",
            text("Courteous decline or redirect when not a fit."),
        )
        .property(
            "recommend",
            text("Best-fit of the three.").one_of(["positive", "neutral", "negative"]),
        )
        .property(
            "reason",
            text("One-line rationale for the recommended choice."),
        )
        .required(["positive", "neutral", "negative", "recommend", "reason"])
        .additional_properties(false);

    VersionSchemas {
        parameters: parameters.into(),
        response: response.into(),
        example: json!({
            "message": "Hey! I found your service through a friend. Do you have room for a small project this month? I need help polishing our homepage and tightening up the copy.",
            "subject": "Project availability",
            "context": "We are a small creative studio.",
            "guidance": "Prefer to show interest in small inquiries, ask quick clarifying questions. Tone: friendly, helpful, and direct."
        }),
    }
}
