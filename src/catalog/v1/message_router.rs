use super::{context_field, guidance_field, message_field, subject_field, text};
use crate::catalog::VersionSchemas;
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageRouterParameters {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departments: Option<Vec<Department>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRouterResponse {
    pub department: String,
    /// 0-100 certainty in the department selection.
    pub confidence: i64,
    pub reason: String,
    /// 0-100; 0 is trivial or spam, 100 an urgent lead.
    pub importance: i64,
}

pub fn schemas() -> VersionSchemas {
    let department = Schema::object()
        .property(
            "name",
            Schema::string()
                .description("Short keyword (2-32 characters).")
                .min_length(2)
                .max_length(32),
        )
        .property(
            "description",
            Schema::string()
                .description("Reason to route here (max 120 characters).")
                .min_length(0)
                .max_length(120),
        )
        .required(["name"])
        .additional_properties(false);

    let parameters = Schema::object()
        .property("message", message_field(1500))
        .property("subject", subject_field())
        .property("context", context_field())
        .property("guidance", guidance_field())
        .property(
            "departments",
            Schema::array(department)
                .max_items(15)
                .description("List of internal departments."),
        )
        .required(["message"])
        .additional_properties(false);

    let response = Schema::object()
        .property("department", text("Chosen department."))
        .property(
            "confidence",
            Schema::integer().description("0-100 certainty in the department selection."),
        )
        .property(
            "reason",
            text("One-line rationale for the department choice."),
        )
        .property(
            "importance",
            Schema::integer().description(
                "0-100 how important is this message (0=trivial/spam, 100=urgent lead).",
            ),
        )
        .required(["department", "confidence", "importance", "reason"])
        .additional_properties(false);

    VersionSchemas {
        parameters: parameters.into(),
        response: response.into(),
        example: json!({
            "message": "Hi there, I'm trying to update my card on file but keep getting an error. Also wondering if you offer discounts on upgrading to the Business plan.",
            "subject": "Card update issue + upgrade question",
            "context": "A subscription based software company.",
            "guidance": "Prioritize resolving blocking issues first, even if the message includes multiple topics.",
            "departments": [
                { "name": "support", "description": "Troubleshooting and technical issues." },
                { "name": "billing", "description": "Payments, refunds, and account charges." },
                { "name": "sales", "description": "Plan upgrades, quotes, and new deals." }
            ]
        }),
    }
}
