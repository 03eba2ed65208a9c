//! Field names shared by the record extractor, the translation converter and the step planner.

pub const SITUATION: &str = "situation-input";
pub const RELATIONSHIP_A: &str = "relationship-a-input";
pub const RELATIONSHIP_B: &str = "relationship-b-input";
pub const FORMAL_CHECKBOX: &str = "formal-checkbox";

/// Prefix of the tokenized sentence fields, `person-a-word-1`, `person-a-word-2`, ...
pub const PERSON_A_WORD: &str = "person-a-word-";
/// The first sentence word, which the student enters after the tutor fills the rest.
pub const PERSON_A_FIRST_WORD: &str = "person-a-word-1";
/// Prefix of the title choice fields, `option-word-1`, `option-word-2`, ...
pub const OPTION_WORD: &str = "option-word-";

/// Selection of the terminal step that every document ends with.
pub const DONE: &str = "done";
pub const DONE_VALUE: &str = "-1";

/// Builds an indexed field name such as `option-word-3`.
pub fn indexed(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}")
}
