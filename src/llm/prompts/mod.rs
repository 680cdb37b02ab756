// ABOUTME: System prompt for the personalized health improvement plan
// ABOUTME: Fills the target word count into the preventive medicine instructions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts

/// Preventive medicine specialist instructions, `{max_words}` is substituted
pub const PREVENTIVE_MEDICINE_SYSTEM_PROMPT: &str = "You are a preventive medicine specialist. \
Create a personalized, actionable health improvement plan based on the patient's risk profile. \
Be specific, encouraging, and evidence-based. Keep it under {max_words} words.";

/// System prompt with the word limit filled in
#[must_use]
pub fn preventive_medicine_prompt(max_words: u32) -> String {
    PREVENTIVE_MEDICINE_SYSTEM_PROMPT.replace("{max_words}", &max_words.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_limit_is_substituted() {
        let prompt = preventive_medicine_prompt(200);
        assert!(prompt.ends_with("Keep it under 200 words."));
        assert!(!prompt.contains("{max_words}"));
    }
}
