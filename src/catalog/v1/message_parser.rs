use super::{message_field, text};
use crate::catalog::VersionSchemas;
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageParserParameters {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageParserResponse {
    pub intent: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub tone: String,
    pub contacts: Vec<Contact>,
}

pub fn schemas() -> VersionSchemas {
    let parameters = Schema::object()
        .property("message", message_field(1500))
        .required(["message"])
        .additional_properties(false);

    let contact = Schema::object()
        .property(
            "type",
            text("Contact channel (e.g. email, phone, instagram)."),
        )
        .property("value", text("Canonical value."))
        .required(["type", "value"])
        .additional_properties(false);

    let response = Schema::object()
        .property(
            "intent",
            text("Short purpose label (e.g. project pitch, job inquiry)."),
        )
        .property("subject", text("One-line subject summarizing the message."))
        .property("author", text("Sender name."))
        .property("role", text("Sender role."))
        .property("business", text("Sender company."))
        .property("website", text("Sender website."))
        .property(
            "tone",
            text("Single adjective describing tone (e.g. friendly, urgent)."),
        )
        .property(
            "contacts",
            Schema::array(contact).description("List of extracted contact details."),
        )
        .required(["intent", "subject", "tone", "contacts"])
        .additional_properties(false);

    VersionSchemas {
        parameters: parameters.into(),
        response: response.into(),
        example: json!({
            "message": "Hi, Mia mia@acme.dev. Could you help with a small site rebuild next month?"
        }),
    }
}
