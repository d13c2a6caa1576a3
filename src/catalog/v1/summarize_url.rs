use super::{context_field, text};
use crate::catalog::VersionSchemas;
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummarizeUrlParameters {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeUrlResponse {
    pub title: String,
    pub excerpt: String,
    pub blurb: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub fn schemas() -> VersionSchemas {
    let parameters = Schema::object()
        .property(
            "url",
            Schema::string()
                .description("URL of the content to summarize.")
                .format("uri")
                .max_length(2000),
        )
        .property("context", context_field())
        .required(["url"])
        .additional_properties(false);

    let response = Schema::object()
        .property("title", text("One-line title for the content."))
        .property(
            "excerpt",
            text("Short description or excerpt from the content."),
        )
        .property("blurb", text("Concise blurb summarizing the content."))
        .property("summary", text("Detailed summary of the content."))
        .property(
            "thumbnail",
            text("URL to a small image representing the content."),
        )
        .property(
            "image",
            text("URL to a larger preview or hero image for the content."),
        )
        .required(["title", "excerpt", "blurb", "summary"])
        .additional_properties(false);

    VersionSchemas {
        parameters: parameters.into(),
        response: response.into(),
        example: json!({
            "url": "https://acme.dev/team/mia",
            "context": "Preview for a user profile page"
        }),
    }
}
