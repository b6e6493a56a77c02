//! ASCII gallows drawn as attempts run out.

use tracing::instrument;

/// Gallows stages, indexed by attempts remaining out of ten.
///
/// Stage 10 is the empty scene; stage 0 is the finished figure.
const FIGURES: [&str; 11] = [
    r"
   +-----+
   |     |
   |     O
   |    /|\
   |    / \
   |
=========",
    r"
   +-----+
   |     |
   |     O
   |    /|\
   |    /
   |
=========",
    r"
   +-----+
   |     |
   |     O
   |    /|\
   |
   |
=========",
    r"
   +-----+
   |     |
   |     O
   |    /|
   |
   |
=========",
    r"
   +-----+
   |     |
   |     O
   |     |
   |
   |
=========",
    r"
   +-----+
   |     |
   |     O
   |
   |
   |
=========",
    r"
   +-----+
   |     |
   |
   |
   |
   |
=========",
    r"
   +-----+
   |
   |
   |
   |
   |
=========",
    r"
   +
   |
   |
   |
   |
   |
=========",
    r"







=========",
    "",
];

/// Number of drawable stages after the empty scene.
pub const STAGES: u32 = (FIGURES.len() - 1) as u32;

/// Returns the drawing for `attempts_remaining` out of `attempt_budget`.
///
/// Budgets other than ten are scaled so that the finished figure only
/// appears once no attempts are left.
#[instrument]
pub fn figure(attempts_remaining: u32, attempt_budget: u32) -> &'static str {
    let budget = attempt_budget.max(1);
    let remaining = attempts_remaining.min(budget);
    let stage = (u64::from(remaining) * u64::from(STAGES)).div_ceil(u64::from(budget));
    FIGURES[stage as usize]
}
