use super::{context_field, text};
use crate::catalog::VersionSchemas;
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummarizeTextParameters {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeTextResponse {
    pub excerpt: String,
    pub blurb: String,
    pub summary: String,
}

pub fn schemas() -> VersionSchemas {
    let parameters = Schema::object()
        .property(
            "text",
            Schema::string()
                .description("Text content to summarize. (10-3000 characters).")
                .min_length(10)
                .max_length(3000),
        )
        .property("context", context_field())
        .required(["text"])
        .additional_properties(false);

    let response = Schema::object()
        .property(
            "excerpt",
            text("Short description or excerpt from the content."),
        )
        .property("blurb", text("Concise blurb summarizing the content."))
        .property("summary", text("Detailed summary of the content."))
        .required(["excerpt", "blurb", "summary"])
        .additional_properties(false);

    VersionSchemas {
        parameters: parameters.into(),
        response: response.into(),
        example: json!({
            "text": "Acme is preparing a new internal dashboard that consolidates project status,\nteam health metrics, and upcoming deadlines. The goal is to reduce scattered reports\nand give managers a single view of what needs attention. Early prototypes show fewer\ncoordination meetings and faster decision-making.",
            "context": "Internal planning notes for project overview"
        }),
    }
}
