//! Offline fallback responder.
//!
//! Deterministic keyword matching on the lowercased claim. Groups are checked
//! in order and the first group with any keyword contained in the claim wins.
//! Claims matching no group get [`generic_result`].

use vera_core::{ClaimQuery, Verdict, VerdictResult};

/// One keyword group and the canned result it maps to.
#[derive(Debug)]
pub struct KeywordRule {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub verdict: Verdict,
    pub score: u8,
    pub explanation: &'static str,
    pub citations: &'static [&'static str],
}

impl KeywordRule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|kw| normalized.contains(kw))
    }

    fn to_result(&self) -> VerdictResult {
        VerdictResult {
            verdict: self.verdict,
            score: self.score,
            explanation: self.explanation.to_string(),
            citations: self.citations.iter().map(ToString::to_string).collect(),
        }
    }
}

pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: "garlic",
        keywords: &["garlic"],
        verdict: Verdict::Misleading,
        score: 15,
        explanation: "Garlic shows mild antimicrobial activity in laboratory studies, \
            but there is no evidence that eating garlic or drinking boiled garlic water \
            prevents or cures viral infections such as COVID-19.",
        citations: &[
            "World Health Organization: Coronavirus disease (COVID-19) advice for the public: Mythbusters",
            "Bayan L, Koulivand PH, Gorji A. Garlic: a review of potential therapeutic effects. Avicenna J Phytomed. 2014",
        ],
    },
    KeywordRule {
        topic: "vaccine-autism",
        keywords: &["vaccine", "regression", "autism"],
        verdict: Verdict::False,
        score: 5,
        explanation: "Large population studies covering millions of children have found \
            no link between vaccination and autism or developmental regression. The 1998 \
            paper that proposed the link was retracted after its data were found to be falsified.",
        citations: &[
            "Hviid A, et al. Measles, Mumps, Rubella Vaccination and Autism: A Nationwide Cohort Study. Ann Intern Med. 2019",
            "Retraction: Ileal-lymphoid-nodular hyperplasia, non-specific colitis, and pervasive developmental disorder in children. The Lancet. 2010",
            "Centers for Disease Control and Prevention: Autism and Vaccines",
        ],
    },
];

const GENERIC_EXPLANATION: &str = "The live model is unavailable and this claim does not \
    match any topic known to the offline assistant, so no evidence-based assessment can be \
    made. Check the claim with a healthcare professional or a national health agency.";

/// Result for claims no keyword group covers.
#[must_use]
pub fn generic_result() -> VerdictResult {
    VerdictResult {
        verdict: Verdict::Uncertain,
        score: 42,
        explanation: GENERIC_EXPLANATION.to_string(),
        citations: Vec::new(),
    }
}

/// First keyword group matching `query`, if any.
#[must_use]
pub fn matching_rule(query: &ClaimQuery) -> Option<&'static KeywordRule> {
    let normalized = query.normalized();
    RULES.iter().find(|rule| rule.matches(&normalized))
}

/// Canned result for `query`. Never fails and never touches the network.
#[must_use]
pub fn respond(query: &ClaimQuery) -> VerdictResult {
    match matching_rule(query) {
        Some(rule) => {
            tracing::debug!(topic = rule.topic, "fallback keyword group matched");
            rule.to_result()
        }
        None => {
            tracing::debug!("no fallback keyword group matched");
            generic_result()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respond_to(text: &str) -> VerdictResult {
        respond(&ClaimQuery::new(text).unwrap())
    }

    #[test]
    fn garlic_is_misleading_regardless_of_case() {
        for text in [
            "Boiling garlic water prevents COVID-19 infection.",
            "GARLIC cures everything",
            "raw Garlic beats antibiotics",
        ] {
            let result = respond_to(text);
            assert_eq!(result.verdict, Verdict::Misleading, "{text}");
            assert_eq!(result.score, 15, "{text}");
        }
    }

    #[test]
    fn vaccine_group_keywords_are_false() {
        for text in [
            "Vaccines cause autism",
            "The MMR shot triggers developmental REGRESSION",
            "Autism is caused by diet",
        ] {
            let result = respond_to(text);
            assert_eq!(result.verdict, Verdict::False, "{text}");
            assert_eq!(result.score, 5, "{text}");
        }
    }

    #[test]
    fn unmatched_claims_are_uncertain() {
        let result = respond_to("Drinking eight glasses of water a day is necessary");
        assert_eq!(result, generic_result());
        assert_eq!(result.verdict, Verdict::Uncertain);
        assert_eq!(result.score, 42);
    }

    #[test]
    fn first_group_wins_when_both_match() {
        let result = respond_to("Garlic protects against vaccine side effects");
        assert_eq!(result.verdict, Verdict::Misleading);
    }

    #[test]
    fn responses_are_deterministic() {
        let text = "Garlic water prevents flu";
        assert_eq!(respond_to(text), respond_to(text));
    }

    #[test]
    fn canned_results_are_valid() {
        for rule in RULES {
            assert!(rule.to_result().validate().is_ok(), "{}", rule.topic);
            assert!(!rule.citations.is_empty(), "{}", rule.topic);
        }
    }
}
