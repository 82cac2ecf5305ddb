// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic task-type classification.
//!
//! Maps free text to a task type using an ordered rule table evaluated
//! first-match-wins over a lowercased copy of the input. No LLM pre-call,
//! no network, no latency, and the same input always yields the same result.

use std::sync::LazyLock;

use regex::Regex;
use taskroute_core::{PredefinedTaskType, TaskClassification};

/// Confidence when only a fenced code block was found.
pub const CODE_BLOCK_CONFIDENCE: f32 = 0.6;

/// Confidence when no signal was found at all.
pub const FALLBACK_CONFIDENCE: f32 = 0.4;

const CODE_BLOCK_REASONING: &str = "Code block detected, defaulting to code generation";
const FALLBACK_REASONING: &str =
    "No specific task indicators found, defaulting to code generation";

/// Fenced code block marker.
const CODE_FENCE: &str = "```";

/// What a rule needs to see before it fires.
#[derive(Debug)]
pub enum Trigger {
    /// Primary verbs AND (domain nouns OR a fenced code block).
    Signals { primary: Regex, secondary: Regex },
    /// Primary verbs AND domain nouns, with no code vocabulary and no fenced block.
    WithoutCode { primary: Regex, secondary: Regex },
    /// Primary verbs AND (domain nouns OR an arithmetic/comparison operator).
    Reasoning {
        primary: Regex,
        secondary: Regex,
        operators: Regex,
    },
    /// A fenced code block anywhere in the input.
    CodeBlock,
}

/// One entry of the ordered rule table.
#[derive(Debug)]
pub struct ClassificationRule {
    /// Stable rule name, used in audit output.
    pub name: &'static str,
    /// Task type emitted when the rule fires.
    pub task_type: PredefinedTaskType,
    /// Fixed confidence emitted when the rule fires.
    pub confidence: f32,
    /// Canned explanation naming the triggering keyword family.
    pub reasoning: &'static str,
    /// Firing condition.
    pub trigger: Trigger,
}

impl ClassificationRule {
    /// Whether this rule fires for already-lowercased `text`.
    pub fn matches(&self, text: &str) -> bool {
        let has_block = text.contains(CODE_FENCE);
        match &self.trigger {
            Trigger::Signals { primary, secondary } => {
                primary.is_match(text) && (has_block || secondary.is_match(text))
            }
            Trigger::WithoutCode { primary, secondary } => {
                !has_block
                    && !CODE_VOCABULARY.is_match(text)
                    && primary.is_match(text)
                    && secondary.is_match(text)
            }
            Trigger::Reasoning {
                primary,
                secondary,
                operators,
            } => primary.is_match(text) && (secondary.is_match(text) || operators.is_match(text)),
            Trigger::CodeBlock => has_block,
        }
    }

    fn classification(&self) -> TaskClassification {
        TaskClassification::new(self.task_type.id(), self.confidence, self.reasoning)
    }
}

/// Build a word-bounded alternation from a list of words or phrases.
fn words(list: &[&str]) -> Regex {
    let alternation = list
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    pattern(&format!(r"\b(?:{alternation})\b"))
}

fn pattern(src: &str) -> Regex {
    Regex::new(src).expect("static classifier pattern must compile")
}

/// Code nouns whose presence vetoes creative writing.
static CODE_VOCABULARY: LazyLock<Regex> = LazyLock::new(|| {
    words(&[
        "code", "function", "functions", "class", "classes", "method", "methods", "program",
        "script", "api", "algorithm", "bug", "variable", "compile", "compiler", "syntax",
    ])
});

/// The ordered rule table, highest priority first.
static RULES: LazyLock<Vec<ClassificationRule>> = LazyLock::new(|| {
    vec![
        ClassificationRule {
            name: "code_generation",
            task_type: PredefinedTaskType::CodeGeneration,
            confidence: 0.85,
            reasoning: "Detected code generation keywords",
            trigger: Trigger::Signals {
                primary: words(&[
                    "write", "writing", "create", "creating", "generate", "implement", "build",
                    "make", "add",
                ]),
                secondary: words(&[
                    "function", "functions", "class", "classes", "method", "component", "script",
                    "program", "api", "endpoint", "module", "code", "algorithm",
                ]),
            },
        },
        ClassificationRule {
            name: "code_understanding",
            task_type: PredefinedTaskType::CodeUnderstanding,
            confidence: 0.85,
            reasoning: "Detected code understanding keywords",
            trigger: Trigger::Signals {
                primary: words(&[
                    "explain", "understand", "what does", "how does", "describe", "walk through",
                    "analyze",
                ]),
                secondary: words(&[
                    "code", "function", "class", "method", "snippet", "implementation", "logic",
                ]),
            },
        },
        ClassificationRule {
            name: "bug_fixing",
            task_type: PredefinedTaskType::BugFixing,
            confidence: 0.85,
            reasoning: "Detected bug fixing keywords",
            trigger: Trigger::Signals {
                primary: words(&["fix", "debug", "resolve", "troubleshoot", "repair"]),
                secondary: words(&[
                    "bug", "bugs", "error", "errors", "issue", "exception", "crash", "crashes",
                    "broken", "failing", "fails", "stack trace",
                ]),
            },
        },
        ClassificationRule {
            name: "refactoring",
            task_type: PredefinedTaskType::Refactoring,
            confidence: 0.85,
            reasoning: "Detected refactoring keywords",
            trigger: Trigger::Signals {
                primary: words(&[
                    "refactor", "restructure", "clean up", "simplify", "optimize", "improve",
                    "reorganize",
                ]),
                secondary: words(&[
                    "code", "function", "class", "method", "module", "structure", "performance",
                    "readability",
                ]),
            },
        },
        ClassificationRule {
            name: "documentation",
            task_type: PredefinedTaskType::Documentation,
            confidence: 0.80,
            reasoning: "Detected documentation keywords",
            trigger: Trigger::Signals {
                primary: words(&["document", "write docs", "add comments", "comment", "annotate"]),
                secondary: words(&[
                    "documentation", "docs", "readme", "comments", "docstring", "docstrings",
                    "guide", "api reference", "jsdoc",
                ]),
            },
        },
        ClassificationRule {
            name: "creative_writing",
            task_type: PredefinedTaskType::CreativeWriting,
            confidence: 0.80,
            reasoning: "Detected creative writing keywords",
            trigger: Trigger::WithoutCode {
                primary: words(&["write", "create", "compose", "draft", "tell"]),
                secondary: words(&[
                    "story", "stories", "poem", "poetry", "essay", "article", "blog", "narrative",
                    "fiction", "song", "lyrics", "letter",
                ]),
            },
        },
        ClassificationRule {
            name: "complex_reasoning",
            task_type: PredefinedTaskType::ComplexReasoning,
            confidence: 0.75,
            reasoning: "Detected complex reasoning keywords",
            trigger: Trigger::Reasoning {
                primary: words(&[
                    "solve", "calculate", "reason", "prove", "analyze", "figure out", "compare",
                    "evaluate",
                ]),
                secondary: words(&[
                    "problem", "puzzle", "math", "equation", "logic", "proof", "theorem",
                    "strategy", "probability",
                ]),
                operators: pattern(r"[+\-*/=<>]"),
            },
        },
        ClassificationRule {
            name: "code_block_default",
            task_type: PredefinedTaskType::CodeGeneration,
            confidence: CODE_BLOCK_CONFIDENCE,
            reasoning: CODE_BLOCK_REASONING,
            trigger: Trigger::CodeBlock,
        },
    ]
});

/// Deterministic heuristic task classifier.
#[derive(Debug, Clone, Copy)]
pub struct TaskClassifier {
    rules: &'static [ClassificationRule],
}

impl TaskClassifier {
    /// Create a classifier over the built-in rule table.
    pub fn new() -> Self {
        Self {
            rules: RULES.as_slice(),
        }
    }

    /// The ordered rule table, highest priority first.
    ///
    /// The final no-signal fallback is not a table entry.
    pub fn rules(&self) -> &'static [ClassificationRule] {
        self.rules
    }

    /// Classify `input` into a task type. Never fails.
    pub fn classify(&self, input: &str) -> TaskClassification {
        self.classify_with_rule(input).0
    }

    /// Classify and also return the rule that fired.
    ///
    /// The rule is `None` when nothing matched and the no-signal fallback applied.
    pub fn classify_with_rule(
        &self,
        input: &str,
    ) -> (TaskClassification, Option<&'static ClassificationRule>) {
        let lower = input.to_lowercase();

        match self.rules.iter().find(|rule| rule.matches(&lower)) {
            Some(rule) => (rule.classification(), Some(rule)),
            None => (
                TaskClassification::new(
                    PredefinedTaskType::CodeGeneration.id(),
                    FALLBACK_CONFIDENCE,
                    FALLBACK_REASONING,
                ),
                None,
            ),
        }
    }
}

impl Default for TaskClassifier {
    fn default() -> Self {
        Self::new()
    }
}
