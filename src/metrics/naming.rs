//! Activity label quality (verb-object naming guideline).
//!
//! Every activity label starts at 1.0 and only loses points. The checks
//! run in a fixed order and are purely lexical: there is no dictionary
//! beyond the tables in this file.

use crate::core::{Issue, IssueCategory, ProcessGraph, Severity};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Labels below this score are reported as issues.
pub const REPORT_BELOW: f64 = 0.5;

pub const GENERIC_PENALTY: f64 = 0.5;
pub const SINGLE_VERB_PENALTY: f64 = 0.2;
pub const ACTION_NOUN_PENALTY: f64 = 0.3;
pub const SINGLE_WORD_PENALTY: f64 = 0.3;
pub const NO_LEADING_VERB_PENALTY: f64 = 0.2;
pub const BRIEF_PENALTY: f64 = 0.1;
pub const VERBOSE_PENALTY: f64 = 0.1;
pub const ABBREVIATION_PENALTY: f64 = 0.1;

pub const MAX_WORDS: usize = 6;

const GENERIC_NAMES: &[&str] = &[
    "task",
    "gateway",
    "start",
    "end",
    "activity",
    "event",
    "process",
    "subprocess",
    "sub-process",
    "sub process",
    "call activity",
    "user task",
    "service task",
    "script task",
    "manual task",
    "send task",
    "receive task",
    "business rule task",
    "new task",
    "new activity",
    "untitled",
    "unnamed",
    "step",
    "todo",
    "tbd",
    "do something",
];

static NUMBERED_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(task|activity|step|process|subprocess|event)\s*#?\d+$")
        .expect("placeholder pattern is valid")
});

const ACTION_VERBS: &[&str] = &[
    "accept", "add", "adjust", "allocate", "analyze", "analyse", "answer", "apply", "approve",
    "archive", "arrange", "assemble", "assess", "assign", "authorize", "book", "build",
    "calculate", "call", "cancel", "capture", "change", "charge", "check", "choose", "classify",
    "clean", "close", "collect", "compare", "compile", "complete", "compute", "configure",
    "confirm", "contact", "convert", "copy", "correct", "create", "decide", "define", "delete",
    "deliver", "deploy", "design", "determine", "develop", "dispatch", "distribute", "document",
    "download", "draft", "edit", "enter", "escalate", "estimate", "evaluate", "examine",
    "execute", "export", "file", "fill", "finalize", "find", "fix", "forward", "generate", "get",
    "handle", "hire", "identify", "import", "inform", "initiate", "inspect", "install",
    "investigate", "invoice", "issue", "load", "log", "make", "manage", "measure", "merge",
    "monitor", "move", "negotiate", "notify", "obtain", "open", "order", "pack", "pay", "perform",
    "pick", "place", "plan", "post", "prepare", "present", "print", "prioritize", "process",
    "produce", "publish", "purchase", "receive", "reconcile", "record", "refund", "register",
    "reject", "release", "remind", "remove", "renew", "repair", "replace", "report", "request",
    "reserve", "resolve", "retrieve", "return", "review", "revise", "route", "run", "save",
    "scan", "schedule", "select", "sell", "send", "set", "ship", "sign", "store", "submit",
    "test", "track", "train", "transfer", "translate", "update", "upload", "validate", "verify",
    "wait", "write",
];

/// Ordered so longer suffixes are tried first.
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ance", "ence", "ness", "ity", "ing", "al",
];

const NOUN_TO_VERB: &[(&str, &str)] = &[
    ("approval", "approve"),
    ("verification", "verify"),
    ("validation", "validate"),
    ("processing", "process"),
    ("creation", "create"),
    ("submission", "submit"),
    ("payment", "pay"),
    ("shipment", "ship"),
    ("registration", "register"),
    ("assessment", "assess"),
    ("evaluation", "evaluate"),
    ("calculation", "calculate"),
    ("notification", "notify"),
    ("cancellation", "cancel"),
    ("confirmation", "confirm"),
    ("acceptance", "accept"),
    ("rejection", "reject"),
    ("inspection", "inspect"),
    ("completion", "complete"),
    ("selection", "select"),
    ("arrival", "receive"),
    ("renewal", "renew"),
    ("removal", "remove"),
    ("analysis", "analyze"),
    ("management", "manage"),
    ("reconciliation", "reconcile"),
    ("investigation", "investigate"),
    ("authorization", "authorize"),
    ("allocation", "allocate"),
];

const COMMON_ABBREVIATIONS: &[&str] = &["id", "api", "url", "pdf", "crm", "erp", "hr", "it", "kpi"];

/// Which naming pattern a label was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    Missing,
    VerbObject,
    ActionNoun,
    SingleWord,
    NoLeadingVerb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAssessment {
    pub node_id: String,
    pub label: String,
    /// 0.0-1.0
    pub score: f64,
    pub style: LabelStyle,
    pub generic: bool,
    pub findings: Vec<String>,
    /// Suggested relabel, when one can be derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamingReport {
    /// 0-100, 100 when there is nothing to assess
    pub overall_score: u32,
    pub analyzed: usize,
    pub labels: Vec<LabelAssessment>,
    pub issues: Vec<Issue>,
}

impl Default for NamingReport {
    fn default() -> Self {
        Self {
            overall_score: 100,
            analyzed: 0,
            labels: Vec::new(),
            issues: Vec::new(),
        }
    }
}

impl NamingReport {
    /// Labels with the lowest scores first.
    pub fn worst_labels(&self, limit: usize) -> Vec<&LabelAssessment> {
        let mut ranked: Vec<&LabelAssessment> = self.labels.iter().collect();
        ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
        ranked.into_iter().filter(|l| l.score < 1.0).take(limit).collect()
    }
}

pub fn analyze_naming(graph: &ProcessGraph) -> NamingReport {
    let mut report = NamingReport::default();

    for node in graph.activities() {
        let mut assessment = assess_label(&node.label);
        assessment.node_id = node.id.clone();

        if assessment.score < REPORT_BELOW {
            let severity = if assessment.style == LabelStyle::Missing {
                Severity::Medium
            } else {
                Severity::Low
            };
            let mut message = if assessment.style == LabelStyle::Missing {
                format!("Activity '{}' has no label", node.id)
            } else {
                format!(
                    "Label '{}' scores {:.1}: {}",
                    assessment.label,
                    assessment.score,
                    assessment.findings.join("; ")
                )
            };
            if let Some(suggested) = &assessment.suggested_label {
                message.push_str(&format!(" (consider '{}')", suggested));
            }
            report
                .issues
                .push(Issue::new(severity, IssueCategory::Naming, message).at(&node.id));
        }

        report.labels.push(assessment);
    }

    report.analyzed = report.labels.len();
    if report.analyzed > 0 {
        let mean =
            report.labels.iter().map(|l| l.score).sum::<f64>() / report.analyzed as f64;
        report.overall_score = (100.0 * mean).round() as u32;
    }

    log::debug!(
        "naming: {} activities, overall {}",
        report.analyzed,
        report.overall_score
    );
    report
}

/// Classify and score a single label. `node_id` is left empty.
pub fn assess_label(raw: &str) -> LabelAssessment {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut assessment = LabelAssessment {
        node_id: String::new(),
        label: collapsed.clone(),
        score: 1.0,
        style: LabelStyle::NoLeadingVerb,
        generic: false,
        findings: Vec::new(),
        suggested_label: None,
    };

    if collapsed.is_empty() {
        assessment.score = 0.0;
        assessment.style = LabelStyle::Missing;
        assessment.findings.push("Missing label".to_string());
        return assessment;
    }

    let words: Vec<&str> = collapsed.split(' ').collect();
    let normalized: Vec<String> = words.iter().map(|w| normalize_word(w)).collect();
    let lowered = collapsed.to_lowercase();
    let mut score: f64 = 1.0;

    if GENERIC_NAMES.contains(&lowered.as_str()) || NUMBERED_PLACEHOLDER.is_match(&lowered) {
        score -= GENERIC_PENALTY;
        assessment.generic = true;
        assessment
            .findings
            .push("Generic/default name; describe the actual work".to_string());
    }

    let mut brevity_flagged = false;
    let first = normalized.first().map(String::as_str).unwrap_or("");
    let last = normalized.last().map(String::as_str).unwrap_or("");

    if is_action_verb(first) {
        assessment.style = LabelStyle::VerbObject;
        if words.len() == 1 {
            score -= SINGLE_VERB_PENALTY;
            brevity_flagged = true;
            assessment
                .findings
                .push("Verb without object; say what is acted on".to_string());
        }
    } else if let Some(suffix) = noun_suffix(last) {
        score -= ACTION_NOUN_PENALTY;
        assessment.style = LabelStyle::ActionNoun;
        match suggested_verb(last, suffix) {
            Some(verb) => {
                let verb = capitalize(&verb);
                let rest = &words[..words.len() - 1];
                assessment.suggested_label = Some(if rest.is_empty() {
                    verb.clone()
                } else {
                    format!("{} {}", verb, rest.join(" "))
                });
                assessment
                    .findings
                    .push(format!("Action-noun style; start with the verb '{}'", verb));
            }
            None => assessment
                .findings
                .push("Action-noun style; start with an action verb".to_string()),
        }
    } else if words.len() == 1 {
        score -= SINGLE_WORD_PENALTY;
        assessment.style = LabelStyle::SingleWord;
        brevity_flagged = true;
        assessment
            .findings
            .push("Single word; add verb and context".to_string());
    } else {
        score -= NO_LEADING_VERB_PENALTY;
        assessment
            .findings
            .push("Does not start with an action verb".to_string());
    }

    if words.len() < 2 {
        score -= BRIEF_PENALTY;
        if !brevity_flagged {
            assessment.findings.push("Too brief; add context".to_string());
        }
    }
    if words.len() > MAX_WORDS {
        score -= VERBOSE_PENALTY;
        assessment
            .findings
            .push(format!("Too verbose ({} words)", words.len()));
    }
    if words.iter().any(|w| is_unexplained_abbreviation(w)) {
        score -= ABBREVIATION_PENALTY;
        assessment
            .findings
            .push("Spell out abbreviations".to_string());
    }

    assessment.score = score.clamp(0.0, 1.0);
    assessment
}

fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

fn is_action_verb(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    ACTION_VERBS.iter().any(|verb| {
        word == *verb
            || word.strip_suffix('s') == Some(verb)
            || word.strip_suffix("es") == Some(verb)
    })
}

/// Noun-forming suffix of `word`, when the stem is at least two characters
/// longer than the suffix.
fn noun_suffix(word: &str) -> Option<&'static str> {
    NOUN_SUFFIXES
        .iter()
        .copied()
        .find(|suffix| word.ends_with(suffix) && word.len() >= 2 * suffix.len() + 2)
}

/// Best-effort verb for an action noun such as "approval" or "reviewing".
fn suggested_verb(word: &str, suffix: &str) -> Option<String> {
    if let Some((_, verb)) = NOUN_TO_VERB.iter().find(|(noun, _)| *noun == word) {
        return Some(verb.to_string());
    }
    let stem = &word[..word.len() - suffix.len()];
    (suffix == "ing" || is_action_verb(stem)).then(|| stem.to_string())
}

fn is_unexplained_abbreviation(word: &str) -> bool {
    let token = word.trim_matches(|c: char| !c.is_alphanumeric());
    let length = token.chars().count();
    // single capitals ("Plan A", "A ...") read as words, not abbreviations
    (2..=3).contains(&length)
        && token.chars().all(|c| c.is_ascii_uppercase())
        && !COMMON_ABBREVIATIONS.contains(&token.to_lowercase().as_str())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
