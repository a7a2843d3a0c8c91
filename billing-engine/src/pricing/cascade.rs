//! Specificity Cascade
//!
//! The precedence order is data, not control flow: an ordered list of
//! lookup scopes evaluated in sequence, testable without persistence.

/// One price rule lookup scope within the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleScope {
    pub course_id: Option<i64>,
    pub class_id: Option<i64>,
}

/// Lookup scopes for the given target, most specific first.
///
/// Full order: (course, class) → (course, –) → (–, class) → (–, –).
/// Levels requiring an id that is unknown at call time are omitted; the
/// general tenant rule is always the last candidate.
pub fn cascade(course_id: Option<i64>, class_id: Option<i64>) -> Vec<RuleScope> {
    let mut scopes = Vec::with_capacity(4);
    if course_id.is_some() && class_id.is_some() {
        scopes.push(RuleScope { course_id, class_id });
    }
    if course_id.is_some() {
        scopes.push(RuleScope {
            course_id,
            class_id: None,
        });
    }
    if class_id.is_some() {
        scopes.push(RuleScope {
            course_id: None,
            class_id,
        });
    }
    scopes.push(RuleScope {
        course_id: None,
        class_id: None,
    });
    scopes
}
