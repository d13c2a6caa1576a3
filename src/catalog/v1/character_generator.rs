use super::{text, text_list};
use crate::catalog::VersionSchemas;
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterGeneratorParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMeta {
    pub use_case: String,
    pub genre: String,
    pub tone_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterOverview {
    pub name: String,
    pub aliases: Vec<String>,
    pub handle: String,
    pub role: String,
    pub concept: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterIdentity {
    pub age: String,
    /// How the character presents: usually "male", "female" or "other".
    pub gender: String,
    pub species_or_type: String,
    pub origin: String,
    pub occupation: String,
    pub archetype: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterAppearance {
    pub snapshot: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPsychology {
    pub core_traits: Vec<String>,
    pub flaws: Vec<String>,
    pub values: Vec<String>,
    pub conflict_hook: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterAbility {
    pub name: String,
    /// 1-5; 3 is a typical professional.
    pub rating: u8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStoryHooks {
    pub current_goal: String,
    pub stakes: String,
    pub obstacles: Vec<String>,
    pub future_arc_ideas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInteractionGuide {
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    pub sample_lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterContinuity {
    pub non_negotiables: Vec<String>,
    pub may_evolve: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterGeneratorResponse {
    pub meta: CharacterMeta,
    pub overview: CharacterOverview,
    pub identity: CharacterIdentity,
    pub appearance: CharacterAppearance,
    pub psychology: CharacterPsychology,
    pub abilities: Vec<CharacterAbility>,
    pub limitations: Vec<String>,
    pub story_hooks: CharacterStoryHooks,
    pub interaction_guide: CharacterInteractionGuide,
    pub continuity: CharacterContinuity,
    pub system_prompt: String,
}

pub fn schemas() -> VersionSchemas {
    let parameters = Schema::object()
        .property(
            "context",
            Schema::string()
                .description("Prompt or idea to seed the character (max 400 characters).")
                .max_length(400),
        )
        .property(
            "useCase",
            Schema::string()
                .description("Intended use of the character (e.g. ttrpg npc, chatbot persona).")
                .max_length(100),
        )
        .property(
            "genre",
            Schema::string()
                .description("Genre tag (e.g. fantasy, sci-fi).")
                .max_length(50),
        )
        .required(Vec::<String>::new())
        .additional_properties(false);

    VersionSchemas {
        parameters: parameters.into(),
        response: response_schema(),
        example: json!({
            "context": "Snarky gameshow host who negotiates relentlessly with players.",
            "useCase": "video game npc",
            "genre": "near-future sci-fi"
        }),
    }
}

fn response_schema() -> Schema {
    let meta = Schema::object()
        .property(
            "useCase",
            text("Intended use of the character (e.g. ttrpg npc, chatbot persona)."),
        )
        .property("genre", text("Genre tag (e.g. fantasy, sci-fi)."))
        .property(
            "toneTags",
            text_list("3-6 tone tags (e.g. \"dry\", \"snarky\", \"optimistic\", \"formal\")."),
        )
        .required(["useCase", "genre", "toneTags"])
        .additional_properties(false);

    let overview = Schema::object()
        .property("name", text("Character name."))
        .property("aliases", text_list("Alternative names/nicknames."))
        .property(
            "handle",
            text("Short label: \"Grim Space Mechanic\", \"Chill Study Buddy\"."),
        )
        .property(
            "role",
            text("Functional role: \"quest-giver\", \"customer support guide\"."),
        )
        .property("concept", text("1-2 sentence elevator pitch."))
        .required(["name", "aliases", "handle", "role", "concept"])
        .additional_properties(false);

    let identity = Schema::object()
        .property(
            "age",
            text("Character age (e.g. \"late 30s\", \"appears 19\")."),
        )
        .property(
            "gender",
            text("How they present (e.g. \"male\", \"female\", \"other\")."),
        )
        .property(
            "speciesOrType",
            text("Species or type (e.g. \"human\", \"AI assistant\", \"elf\")."),
        )
        .property(
            "origin",
            text("Hometown / world / background (e.g. \"outer-rim mining colony\")."),
        )
        .property(
            "occupation",
            text("Occupation (e.g. \"salvage pilot\", \"high school teacher\")."),
        )
        .property(
            "archetype",
            text("Archetype (e.g. \"reluctant hero\", \"trickster mentor\", \"cozy caretaker\")."),
        )
        .required([
            "age",
            "gender",
            "speciesOrType",
            "origin",
            "occupation",
            "archetype",
        ])
        .additional_properties(false);

    let appearance = Schema::object()
        .property("snapshot", text("Single vivid line describing appearance."))
        .property(
            "details",
            text_list("3-6 short bullets describing appearance details."),
        )
        .required(["snapshot", "details"])
        .additional_properties(false);

    let psychology = Schema::object()
        .property(
            "coreTraits",
            text_list("4-7 adjectives/short phrases describing core traits."),
        )
        .property("flaws", text_list("2-5 actual limiting behaviors as flaws."))
        .property("values", text_list("2-5 guiding principles as values."))
        .property(
            "conflictHook",
            text("1-2 sentences describing main internal tension."),
        )
        .required(["coreTraits", "flaws", "values", "conflictHook"])
        .additional_properties(false);

    let ability = Schema::object()
        .property(
            "name",
            text("Name of the strength (e.g. \"Reverse engineering\")."),
        )
        .property(
            "rating",
            Schema::integer()
                .minimum(1)
                .maximum(5)
                .description("Rating of the strength (3 = typical pro, 5 = outstanding)."),
        )
        .property(
            "description",
            text("1 line narrative description of the strength."),
        )
        .required(["name", "rating", "description"])
        .additional_properties(false);

    let story_hooks = Schema::object()
        .property("currentGoal", text("What they're trying to do now."))
        .property("stakes", text("What they risk losing/failing."))
        .property("obstacles", text_list("3-5 problems in their way."))
        .property(
            "futureArcIdeas",
            text_list("2-4 ways they could grow/change."),
        )
        .required(["currentGoal", "stakes", "obstacles", "futureArcIdeas"])
        .additional_properties(false);

    let interaction_guide = Schema::object()
        .property("dos", text_list("5-10 concrete guidelines."))
        .property("donts", text_list("5-10 hard boundaries."))
        .property("sampleLines", text_list("3-6 short example utterances."))
        .required(["dos", "donts", "sampleLines"])
        .additional_properties(false);

    let continuity = Schema::object()
        .property("nonNegotiables", text_list("Truths that must never change."))
        .property("mayEvolve", text_list("Parts that can change with story/user."))
        .required(["nonNegotiables", "mayEvolve"])
        .additional_properties(false);

    Schema::object()
        .property("meta", meta)
        .property("overview", overview)
        .property("identity", identity)
        .property("appearance", appearance)
        .property("psychology", psychology)
        .property("abilities", Schema::array(ability))
        .property("limitations", text_list("3-6 concrete weaknesses/limits."))
        .property("storyHooks", story_hooks)
        .property("interactionGuide", interaction_guide)
        .property("continuity", continuity)
        .property(
            "systemPrompt",
            text("150-300 words, single prose block."),
        )
        .required([
            "meta",
            "overview",
            "identity",
            "appearance",
            "psychology",
            "abilities",
            "limitations",
            "storyHooks",
            "interactionGuide",
            "continuity",
            "systemPrompt",
        ])
        .additional_properties(false)
        .into()
}
