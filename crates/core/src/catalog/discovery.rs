//! Shuffled discovery feed shown below the home page collections.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::product::Product;
use crate::types::ProductId;

/// Products for the discovery feed.
///
/// Drops every excluded product, shuffles the rest and keeps at most `limit`.
#[must_use]
pub fn discovery_feed<R: Rng + ?Sized>(
    products: Vec<Product>,
    excluded: &BTreeSet<ProductId>,
    limit: usize,
    rng: &mut R,
) -> Vec<Product> {
    let mut candidates: Vec<Product> = products
        .into_iter()
        .filter(|p| !excluded.contains(&p.id))
        .collect();
    candidates.shuffle(rng);
    candidates.truncate(limit);
    candidates
}
