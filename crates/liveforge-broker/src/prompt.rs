//! Prompt construction.
//!
//! The system message constrains the model to reply with a bare JSON
//! object carrying the patch fields; the user message carries the current
//! patch state and the instruction.

use liveforge_protocols::patch::PatchState;

const SYSTEM_PROMPT: &str = r#"You generate live frontend patches. Reply with JSON only: {"markup":"...","style":"...","script":"...","explanation":"..."}.
Rules:
- markup: HTML fragment rendered inside the managed container.
- style: CSS rules for the fragment or the page.
- script: optional, safe browser code. Avoid external scripts.
- explanation: one short sentence describing the change.
No markdown. No code fences."#;

/// A system/user prompt pair for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompts {
    pub system: String,
    pub user: String,
}

impl Prompts {
    /// Build prompts from the instruction and the committed patch state.
    pub fn build(instruction: &str, current: &PatchState) -> Self {
        let user = format!(
            "Current patch state:\nMARKUP:\n{}\n\nSTYLE:\n{}\n\nSCRIPT:\n{}\n\nInstruction:\n{}",
            current.markup, current.style, current.script, instruction
        );
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }
}
