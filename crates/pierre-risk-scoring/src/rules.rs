// ABOUTME: Ordered (predicate, message) rule tables for accreted recommendations
// ABOUTME: Evaluates every rule in sequence and substitutes a default when none apply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Text emitted by a rule when its predicate holds
pub enum Advice<C> {
    /// Constant sentence
    Fixed(&'static str),
    /// Sentence rendered from the evaluation context
    Formatted(fn(&C) -> String),
}

/// One entry of an ordered rule table
pub struct Rule<C> {
    applies: fn(&C) -> bool,
    advice: Advice<C>,
}

impl<C> Rule<C> {
    /// Rule emitting a constant sentence
    #[must_use]
    pub const fn fixed(applies: fn(&C) -> bool, text: &'static str) -> Self {
        Self {
            applies,
            advice: Advice::Fixed(text),
        }
    }

    /// Rule emitting a sentence rendered from the context
    #[must_use]
    pub const fn formatted(applies: fn(&C) -> bool, render: fn(&C) -> String) -> Self {
        Self {
            applies,
            advice: Advice::Formatted(render),
        }
    }

    /// Whether this rule fires for the context
    #[must_use]
    pub fn applies(&self, context: &C) -> bool {
        (self.applies)(context)
    }

    /// Render the rule's sentence for the context
    #[must_use]
    pub fn render(&self, context: &C) -> String {
        match self.advice {
            Advice::Fixed(text) => text.to_owned(),
            Advice::Formatted(render) => render(context),
        }
    }
}

/// Evaluate rules in table order, never returning an empty list
///
/// Every rule is checked independently; matching rules keep their table
/// order. When no rule fires the result is exactly `[fallback]`.
#[must_use]
pub fn collect_advice<C>(rules: &[Rule<C>], context: &C, fallback: &str) -> Vec<String> {
    let advice: Vec<String> = rules
        .iter()
        .filter(|rule| rule.applies(context))
        .map(|rule| rule.render(context))
        .collect();

    if advice.is_empty() {
        vec![fallback.to_owned()]
    } else {
        advice
    }
}
