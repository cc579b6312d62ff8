use super::ranking::OrderedItems;

/// Fractional relaxation bound for a search state at `level` over items in
/// ranked order. Whole items are added while they fit; the first item that
/// overflows contributes `ratio * remaining` and the walk stops.
///
/// Never smaller than the value of any integral completion of the state.
pub fn upper_bound(
    ranked: &OrderedItems,
    level: usize,
    weight: u64,
    value: f64,
    capacity: u64,
) -> f64 {
    let mut bound = value;
    let mut remaining = capacity.saturating_sub(weight);
    let mut i = level;
    while i < ranked.len() && remaining > 0 {
        let item_weight = ranked.weights[i] as u64;
        if item_weight <= remaining {
            bound += ranked.values[i];
            remaining -= item_weight;
        } else {
            bound += ranked.ratio(i) * remaining as f64;
            remaining = 0;
        }
        i += 1;
    }
    bound
}
