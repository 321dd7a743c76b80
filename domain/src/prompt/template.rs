//! Prompt templates for each strategy step

use crate::core::domain_tag::DomainTag;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction for a direct reasoning call, selected by domain
    pub fn reasoning_system(domain: &DomainTag) -> &'static str {
        match domain {
            DomainTag::Math => {
                "You are an intelligent math solver. \
                1. Use substitution to simplify complex equations. \
                2. Solve algebraically. \
                3. CHECK FOR EXTRANEOUS SOLUTIONS (especially with square roots). \
                4. Verify all constraints. \
                End your answer with \\boxed{answer}."
            }
            DomainTag::Coding => {
                "You are an expert software engineer. \
                Write clean, efficient, and correct code. \
                Think about edge cases. \
                Return the final answer as code or explanation as requested."
            }
            DomainTag::General | DomainTag::Other(_) => {
                "You are a helpful assistant. Think step by step. \
                End your answer with \\boxed{answer} if applicable."
            }
        }
    }

    /// User prompt for a direct reasoning call
    pub fn reasoning_prompt(prompt: &str) -> String {
        format!("{}\n\nLet's think step by step.", prompt)
    }

    /// System instruction for the reviewer in the critique step
    pub fn critique_system() -> &'static str {
        "You are a strict critical reviewer."
    }

    /// User prompt asking whether the current answer is strictly correct
    pub fn critique_prompt(prompt: &str, answer: &str) -> String {
        format!(
            r#"Original Question: {}

Current Answer: {}

Critique the above answer. Is it strictly correct? Verify the reasoning. If it is correct, start your response with 'CORRECT'. If incorrect, explain why."#,
            prompt, answer
        )
    }

    /// System instruction for the repair step
    pub fn repair_system() -> &'static str {
        "You are a helpful solver. Fix the answer."
    }

    /// User prompt asking for a corrected answer
    pub fn repair_prompt(prompt: &str, answer: &str, critique: &str) -> String {
        format!(
            r#"Original Question: {}

Previous Answer: {}

Critique: {}

Based on the critique, provide a corrected explanation and answer. Verify your algebra. End with \boxed{{answer}}."#,
            prompt, answer, critique
        )
    }
}
