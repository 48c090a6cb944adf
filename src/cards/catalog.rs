use super::card::Card;
use super::role::Role;

/// the full staff deck: for each hireable role, salary tiers 0 through 5
/// in duplicated pairs, with the yield coefficient growing alongside the
/// tier (free hires still move one unit). 48 cards total.
pub fn catalog() -> Vec<Card> {
    Role::hireable()
        .iter()
        .flat_map(|&role| {
            (0u32..=5).flat_map(move |tier| {
                let coefficient = tier.max(1);
                [
                    Card::new(role, tier, coefficient),
                    Card::new(role, tier, coefficient),
                ]
            })
        })
        .collect()
}
