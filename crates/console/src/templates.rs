//! Quick-action presets.
//!
//! Selecting one puts its question in the question field and submits that
//! exact string.

/// Where a preset is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickActionKind {
    /// Short topic chip next to the input.
    Chip,
    /// Larger card in the quick actions panel.
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    /// Stable key for `/t <key>`
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Exact question submitted
    pub question: &'static str,
    pub kind: QuickActionKind,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        key: "rules",
        label: "Academic rules",
        description: "Probation requirements.",
        question: "What are the requirements for academic probation?",
        kind: QuickActionKind::Chip,
    },
    QuickAction {
        key: "conduct",
        label: "Conduct policy",
        description: "Student code of conduct.",
        question: "What is the code of conduct for students?",
        kind: QuickActionKind::Chip,
    },
    QuickAction {
        key: "appeals",
        label: "Appeals",
        description: "Appealing a disciplinary decision.",
        question: "How can I appeal a disciplinary decision?",
        kind: QuickActionKind::Chip,
    },
    QuickAction {
        key: "attendance",
        label: "Attendance",
        description: "Attendance requirements.",
        question: "What are the attendance requirements?",
        kind: QuickActionKind::Chip,
    },
    QuickAction {
        key: "standing",
        label: "Academic Standing",
        description: "Summary of probation and warning thresholds.",
        question: "Summarize academic standing and probation rules.",
        kind: QuickActionKind::Card,
    },
    QuickAction {
        key: "integrity",
        label: "Integrity Policy",
        description: "Plagiarism rules and disciplinary actions.",
        question: "What is the plagiarism policy and consequences?",
        kind: QuickActionKind::Card,
    },
    QuickAction {
        key: "grievances",
        label: "Appeals & Grievances",
        description: "Steps for student appeals and grievances.",
        question: "What are the grievance and appeals procedures?",
        kind: QuickActionKind::Card,
    },
];

/// Look up a preset by key, 1-based position, or label (case-insensitive).
pub fn find(query: &str) -> Option<&'static QuickAction> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    if let Ok(n) = query.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| QUICK_ACTIONS.get(i));
    }

    QUICK_ACTIONS.iter().find(|action| {
        action.key.eq_ignore_ascii_case(query) || action.label.eq_ignore_ascii_case(query)
    })
}
