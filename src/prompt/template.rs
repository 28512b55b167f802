//! Domain-locked instruction templates

use crate::domain::Domain;
use std::fmt;

/// Everything sent to the backend for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionSet {
    pub domain: Domain,
    /// Rule block; goes out as the system turn.
    pub system: String,
    /// The caller's question, verbatim; goes out as the user turn.
    pub question: String,
}

impl InstructionSet {
    /// Builds the instruction set for one request. Pure; no backend involved.
    pub fn build(domain: Domain, question: &str) -> Self {
        Self {
            domain,
            system: system_prompt(domain),
            question: question.to_string(),
        }
    }
}

impl fmt::Display for InstructionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\nQUESTION:\n{}", self.system, self.question)
    }
}

/// The only text the backend may return for an out-of-domain question.
pub fn refusal_message(domain: Domain) -> String {
    format!("Please ask a question related to {} only.", domain)
}

fn system_prompt(domain: Domain) -> String {
    format!(
        r#"You are a DOMAIN-LOCKED coding assistant.

SELECTED DOMAIN = {domain}

Your job is to answer ONLY within this domain.
You must FIRST classify the user's question internally before answering.

======================
ALLOWED DOMAINS
======================
{scopes}
======================
STRICT RULES (NO EXCEPTIONS)
======================

1. If the question DOES NOT belong to the SELECTED DOMAIN,
DO NOT answer it.

2. Do NOT translate the question into another domain.

3. If the question is invalid for the domain,
respond with EXACTLY this sentence and nothing else:

"{refusal}"

4. NEVER provide partial hints, logic, or alternative solutions
outside the selected domain.

5. Be concise, correct, and domain-pure.

6. Stateless behavior. No memory. Never refer to earlier questions or answers."#,
        scopes = scope_block(),
        refusal = refusal_message(domain)
    )
}

fn scope_block() -> String {
    Domain::scopes()
        .iter()
        .map(|scope| {
            let topics: String = scope
                .topics
                .iter()
                .map(|topic| format!("- {}\n", topic))
                .collect();
            format!("\n• {}\n{}", scope.domain, topics)
        })
        .collect()
}
