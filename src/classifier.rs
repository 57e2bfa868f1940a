use std::sync::OnceLock;

use regex::Regex;

/// Label for a single parsed entry. Mutually exclusive; the Nanny check
/// runs before the Maid check, so an entry matching both heuristics is
/// counted as Nanny only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Maid,
    Nanny,
    Neither,
}

// Fixed thresholds of the classification policy, in the store's own
// currency unit.
const NANNY_AMOUNT_MIN: f64 = 10_000.0;
const MAID_AMOUNTS: [f64; 2] = [2_500.0, 2_800.0];

const MAID_KEYWORDS: [&str; 3] = ["maid", "baiee", "baee"];

pub fn classify(description: &str, amount: f64) -> Classification {
    let desc = description.to_lowercase();
    if desc.contains("nanny") || amount >= NANNY_AMOUNT_MIN {
        return Classification::Nanny;
    }
    if MAID_KEYWORDS.iter().any(|kw| desc.contains(kw)) || MAID_AMOUNTS.contains(&amount) {
        return Classification::Maid;
    }
    Classification::Neither
}

fn span_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s+months").expect("invalid span regex"))
}

/// Number of consecutive months a payment covers, ending at its own
/// month: descriptions like "advance for 3 months" yield 3; anything
/// else yields the trivial span of 1. A matched count too large for u64
/// saturates instead of collapsing to the trivial span.
pub fn span_count(description: &str) -> u64 {
    let desc = description.to_lowercase();
    match span_re().captures(&desc) {
        // The digits-only capture can only fail to parse on overflow.
        Some(caps) => caps[1].parse().unwrap_or(u64::MAX),
        None => 1,
    }
}
