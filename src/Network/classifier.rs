//! Predicates that place a reaction relative to the fast species.
//!
//! All tests look at *key presence* only: a species counts as consumed or produced when it
//! is listed on that side, the size of the coefficient plays no role.
use super::crn_model::Reaction;

fn any_educt_in(reaction: &Reaction, fast_set: &[String]) -> bool {
    fast_set.iter().any(|f| reaction.has_educt(f))
}

fn any_product_in(reaction: &Reaction, fast_set: &[String]) -> bool {
    fast_set.iter().any(|f| reaction.has_product(f))
}

/// neither side of the reaction contains a fast species
pub fn is_slow_only(reaction: &Reaction, fast_set: &[String]) -> bool {
    !any_educt_in(reaction, fast_set) && !any_product_in(reaction, fast_set)
}

/// `fast` is produced and no fast species at all is consumed
pub fn produces(reaction: &Reaction, fast: &str, fast_set: &[String]) -> bool {
    reaction.has_product(fast) && !any_educt_in(reaction, fast_set)
}

/// `fast` is among the educts
pub fn consumes(reaction: &Reaction, fast: &str) -> bool {
    reaction.has_educt(fast)
}

/// Some fast species is consumed and none is produced.
///
/// The test ranges over the whole `fast_set`; `_fast` names the matrix row the caller is
/// filling but does not narrow the check.
pub fn consumes_without_producing(reaction: &Reaction, _fast: &str, fast_set: &[String]) -> bool {
    any_educt_in(reaction, fast_set) && !any_product_in(reaction, fast_set)
}

/// `consumed` is an educt and `produced` is a product, other species may take part too
pub fn consumes_and_produces(reaction: &Reaction, consumed: &str, produced: &str) -> bool {
    reaction.has_educt(consumed) && reaction.has_product(produced)
}
