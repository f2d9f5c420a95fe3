//! Static prompt templates served over MCP
//!
//! The templates carry no arguments and make no remote calls; they exist to
//! steer an agent toward the memo tools for common workflows.

/// A named prompt template
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    /// Prompt name as exposed to the host
    pub name: &'static str,
    /// One-line description shown in prompt listings
    pub description: &'static str,
    /// The template body
    pub template: &'static str,
}

/// All prompt templates this server exposes
pub const PROMPTS: &[PromptTemplate] = &[
    PromptTemplate {
        name: "weekly-summary",
        description: "Summarize the past week's memos into accomplishments, open tasks, and themes",
        template: include_str!("prompts/weekly_summary.md"),
    },
    PromptTemplate {
        name: "knowledge-extraction",
        description: "Extract key concepts, steps, and facts from memos into a reusable knowledge base",
        template: include_str!("prompts/knowledge_extraction.md"),
    },
    PromptTemplate {
        name: "content-improvement",
        description: "Suggest clarity, structure, and formatting improvements for memo content",
        template: include_str!("prompts/content_improvement.md"),
    },
];

/// Look up a prompt template by name
pub fn get(name: &str) -> Option<&'static PromptTemplate> {
    PROMPTS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_prompts_present() {
        assert_eq!(PROMPTS.len(), 3);
        for name in ["weekly-summary", "knowledge-extraction", "content-improvement"] {
            assert!(get(name).is_some(), "missing prompt {name}");
        }
    }

    #[test]
    fn test_unknown_prompt_is_none() {
        assert!(get("daily-standup").is_none());
    }

    #[test]
    fn test_templates_are_not_empty() {
        for prompt in PROMPTS {
            assert!(!prompt.template.trim().is_empty(), "{} is empty", prompt.name);
            assert!(!prompt.description.is_empty());
        }
    }
}
