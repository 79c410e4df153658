//! Insight classifier
//!
//! Turns each metric row into a qualitative card: a categorical state, a
//! one-line caveat note, a plain-language meaning line, and a decision line.
//! Pure and order-preserving, one card per metric row.

mod card;
mod state;


pub use card::{build_insight_cards, InsightCard};
pub use state::StateKey;
