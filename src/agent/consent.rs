//! Consent detection for the external-search handoff
//!
//! The external tool may only run after the assistant has explicitly
//! offered it and the user has answered in the affirmative. Both halves
//! are checked here so the router never has to trust model output to
//! honor the gate.

use crate::generation::prompt::EXTERNAL_OFFER_PREFIX;
use crate::types::{ChatTurn, Role};

/// Agreement openers accepted as consent on their own or as the first
/// word(s) of the reply, so "Yes, please do" passes.
const AFFIRMATIVE_OPENERS: &[&str] =
    &["yes", "yeah", "yep", "sure", "go ahead", "do it", "please do", "oui"];

/// Bare acknowledgements accepted only as the whole message. As prefixes
/// they would swallow replies like "please explain the first point".
const AFFIRMATIVE_EXACT: &[&str] = &["ok", "okay", "please", "why not"];

/// The user echoing the offer's own suggestion counts as consent wherever
/// it appears in the reply ("can you search the internet?").
const SEARCH_PHRASES: &[&str] = &[
    "search the internet",
    "search the web",
    "search online",
    "cherche sur internet",
];

/// True when the previous assistant turn was the external-search offer.
pub fn offer_is_pending(history: &[ChatTurn]) -> bool {
    history
        .iter()
        .rev()
        .find(|turn| turn.role == Role::Assistant)
        .map(|turn| turn.content.trim_start().starts_with(EXTERNAL_OFFER_PREFIX))
        .unwrap_or(false)
}

/// True when the message reads as an agreement.
pub fn is_affirmative(message: &str) -> bool {
    let normalized: String = message
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    let normalized = normalized.trim();

    if AFFIRMATIVE_EXACT.iter().any(|accepted| normalized == *accepted) {
        return true;
    }
    if AFFIRMATIVE_OPENERS.iter().any(|accepted| {
        normalized == *accepted || normalized.starts_with(&format!("{} ", accepted))
    }) {
        return true;
    }
    SEARCH_PHRASES
        .iter()
        .any(|phrase| normalized.contains(phrase))
}

/// Consent holds only when the offer is pending AND the reply agrees.
pub fn consent_granted(message: &str, history: &[ChatTurn]) -> bool {
    offer_is_pending(history) && is_affirmative(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::prompt::external_offer;

    #[test]
    fn test_affirmative_variants() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("Yes, please!"));
        assert!(is_affirmative("  OKAY  "));
        assert!(is_affirmative("go ahead and search"));
        assert!(is_affirmative("sure."));
    }

    #[test]
    fn test_search_phrase_counts_as_consent() {
        assert!(is_affirmative("search the internet"));
        assert!(is_affirmative("Can you search the web for me?"));
        assert!(is_affirmative("cherche sur internet"));
    }

    #[test]
    fn test_non_affirmatives() {
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("no thanks"));
        assert!(!is_affirmative("yesterday's lecture"));
        assert!(!is_affirmative("what is okinawa"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn test_bare_acknowledgements_do_not_match_as_prefixes() {
        assert!(is_affirmative("ok"));
        assert!(is_affirmative("please"));
        assert!(!is_affirmative("please explain the first point"));
        assert!(!is_affirmative("ok but what does the course say"));
        assert!(!is_affirmative("okay so back to chapter 2"));
    }

    #[test]
    fn test_offer_pending_requires_last_assistant_turn_to_be_the_offer() {
        let offer = external_offer("Political Theory");
        assert!(offer_is_pending(&[
            ChatTurn::user("what is X?"),
            ChatTurn::assistant(offer.clone()),
        ]));

        // A later assistant message supersedes the offer
        assert!(!offer_is_pending(&[
            ChatTurn::assistant(offer),
            ChatTurn::user("hmm"),
            ChatTurn::assistant("Here is what the course says..."),
        ]));

        assert!(!offer_is_pending(&[]));
    }

    #[test]
    fn test_consent_needs_both_offer_and_agreement() {
        let offer = external_offer("Political Theory");
        let with_offer = vec![ChatTurn::assistant(offer)];
        let without_offer = vec![ChatTurn::assistant("Hello!")];

        assert!(consent_granted("yes please", &with_offer));
        assert!(!consent_granted("what about chapter 2?", &with_offer));
        // "yes" out of the blue must never trigger the external tool
        assert!(!consent_granted("yes", &without_offer));
        assert!(!consent_granted("yes", &[]));
    }
}
