//! Version 1 of every product.
//!
//! Each submodule exposes `schemas()` (parameter schema, response schema and a
//! worked example) plus typed parameter and response structs. The markers
//! below bind those types to their versioned path for
//! [`crate::KequtechClient::call`].

pub mod character_generator;
pub mod message_parser;
pub mod message_responder;
pub mod message_router;
pub mod summarize_text;
pub mod summarize_url;

use super::Endpoint;
use crate::schema::StringSchema;
use crate::schema::Schema;

macro_rules! endpoint {
    ($(#[$doc:meta])* $marker:ident, $path:literal, $module:ident, $params:ident, $response:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $marker;

        impl Endpoint for $marker {
            const PATH: &'static str = $path;
            type Parameters = $module::$params;
            type Response = $module::$response;
        }
    };
}

endpoint!(
    /// `/v1/message-parser`
    MessageParser,
    "/v1/message-parser",
    message_parser,
    MessageParserParameters,
    MessageParserResponse
);
endpoint!(
    /// `/v1/message-router`
    MessageRouter,
    "/v1/message-router",
    message_router,
    MessageRouterParameters,
    MessageRouterResponse
);
endpoint!(
    /// `/v1/message-responder`
    MessageResponder,
    "/v1/message-responder",
    message_responder,
    MessageResponderParameters,
    MessageResponderResponse
);
endpoint!(
    /// `/v1/summarize-text`
    SummarizeText,
    "/v1/summarize-text",
    summarize_text,
    SummarizeTextParameters,
    SummarizeTextResponse
);
endpoint!(
    /// `/v1/summarize-url`
    SummarizeUrl,
    "/v1/summarize-url",
    summarize_url,
    SummarizeUrlParameters,
    SummarizeUrlResponse
);
endpoint!(
    /// `/v1/character-generator`
    CharacterGenerator,
    "/v1/character-generator",
    character_generator,
    CharacterGeneratorParameters,
    CharacterGeneratorResponse
);

// Fields shared by several products.

fn message_field(max: u64) -> StringSchema {
    Schema::string()
        .description(format!(
            "Provide the original message in plain text (10-{} characters).",
            max
        ))
        .min_length(10)
        .max_length(max)
}

fn subject_field() -> StringSchema {
    Schema::string()
        .description("Provide the original subject in plain text (max 120 characters).")
        .max_length(120)
}

fn context_field() -> StringSchema {
    Schema::string()
        .description("Describe yourself or your company (max 400 characters).")
        .max_length(400)
}

fn guidance_field() -> StringSchema {
    Schema::string()
        .description("Describe what you want (max 400 characters).")
        .max_length(400)
}

fn text(description: &str) -> StringSchema {
    Schema::string().description(description)
}

fn text_list(description: &str) -> crate::schema::ArraySchema {
    Schema::array(Schema::string()).description(description)
}
