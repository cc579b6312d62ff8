use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MIN_ITEM_WEIGHT: u32 = 1;
pub const MAX_ITEM_WEIGHT: u32 = 100;
pub const MIN_ITEM_VALUE: u32 = 100;
pub const MAX_ITEM_VALUE: u32 = 1000;

/// Relative tolerance used when comparing a reported value against the value
/// recomputed from the selection. Solvers sum values in different orders.
pub const VALUE_TOLERANCE: f64 = 1e-9;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Difficulty {
    pub num_items: usize,
    pub capacity: u32,
}

#[derive(Deserialize)]
struct ItemData {
    id: u32,
    weight: u32,
    value: f64,
}

/// A candidate item. Immutable once built: the id is a stable identity that
/// solvers never renumber, and the ratio is always derived from the current
/// weight and value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "ItemData")]
pub struct Item {
    id: u32,
    weight: u32,
    value: f64,
}

impl TryFrom<ItemData> for Item {
    type Error = anyhow::Error;

    fn try_from(data: ItemData) -> Result<Self> {
        Item::new(data.id, data.weight, data.value)
    }
}

impl Item {
    pub fn new(id: u32, weight: u32, value: f64) -> Result<Self> {
        if id == 0 {
            return Err(anyhow!("Item id must be at least 1"));
        }
        if weight == 0 {
            return Err(anyhow!("Item ({}) has zero weight", id));
        }
        if !value.is_finite() || value <= 0.0 {
            return Err(anyhow!("Item ({}) has invalid value {}", id, value));
        }
        Ok(Self { id, weight, value })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value density.
    pub fn ratio(&self) -> f64 {
        self.value / self.weight as f64
    }
}

/// One inclusion flag per item, aligned with the order of the items in the
/// challenge it was computed for.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Selection(Vec<bool>);

impl Selection {
    pub fn empty(num_items: usize) -> Self {
        Self(vec![false; num_items])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_selected(&self, position: usize) -> bool {
        self.0.get(position).copied().unwrap_or(false)
    }

    pub fn set(&mut self, position: usize, included: bool) {
        self.0[position] = included;
    }

    pub fn num_selected(&self) -> usize {
        self.0.iter().filter(|&&included| included).count()
    }

    /// Positions of the included items, ascending.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &included)| if included { Some(i) } else { None })
    }

    /// Original ids of the included items.
    pub fn ids(&self, items: &[Item]) -> Vec<u32> {
        self.positions().map(|i| items[i].id()).collect()
    }
}

impl From<Vec<bool>> for Selection {
    fn from(flags: Vec<bool>) -> Self {
        Self(flags)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub value: f64,
    pub total_weight: u64,
    pub selection: Selection,
}

impl Solution {
    /// Zero value, nothing selected.
    pub fn empty(num_items: usize) -> Self {
        Self {
            value: 0.0,
            total_weight: 0,
            selection: Selection::empty(num_items),
        }
    }

    pub fn selected_ids(&self, challenge: &Challenge) -> Vec<u32> {
        self.selection.ids(challenge.items())
    }
}

#[derive(Deserialize)]
struct ChallengeData {
    items: Vec<Item>,
    capacity: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "ChallengeData")]
pub struct Challenge {
    items: Vec<Item>,
    capacity: u32,
}

impl TryFrom<ChallengeData> for Challenge {
    type Error = anyhow::Error;

    fn try_from(data: ChallengeData) -> Result<Self> {
        Challenge::new(data.items, data.capacity)
    }
}

impl Challenge {
    pub fn new(items: Vec<Item>, capacity: u32) -> Result<Self> {
        let mut ids = HashSet::with_capacity(items.len());
        for item in &items {
            if !ids.insert(item.id()) {
                return Err(anyhow!("Duplicate item id ({})", item.id()));
            }
        }
        Ok(Self { items, capacity })
    }

    /// Builds a challenge from `(weight, value)` pairs, numbering items 1..n.
    pub fn from_pairs(pairs: &[(u32, f64)], capacity: u32) -> Result<Self> {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(i, &(weight, value))| Item::new(i as u32 + 1, weight, value))
            .collect::<Result<Vec<_>>>()?;
        Self::new(items, capacity)
    }

    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        let items = (0..difficulty.num_items)
            .map(|i| {
                let weight = rng.gen_range(MIN_ITEM_WEIGHT..=MAX_ITEM_WEIGHT);
                // Whole part in [100, 1000] plus cents in [0, 0.99]
                let value = rng.gen_range(MIN_ITEM_VALUE..=MAX_ITEM_VALUE) as f64
                    + rng.gen_range(0..100u32) as f64 / 100.0;
                Item::new(i as u32 + 1, weight, value)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            items,
            capacity: difficulty.capacity,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Copy of the same items with a different capacity.
    pub fn with_capacity(&self, capacity: u32) -> Self {
        Self {
            items: self.items.clone(),
            capacity,
        }
    }

    /// Value and weight of a selection, summed in item order. Errors when the
    /// selection was not computed for this item set or is infeasible.
    pub fn evaluate_selection(&self, selection: &Selection) -> Result<(f64, u64)> {
        if selection.len() != self.items.len() {
            return Err(anyhow!(
                "Selection covers {} items but the challenge has {}",
                selection.len(),
                self.items.len()
            ));
        }
        let mut total_value = 0.0;
        let mut total_weight = 0u64;
        for i in selection.positions() {
            total_value += self.items[i].value();
            total_weight += self.items[i].weight() as u64;
        }
        if total_weight > self.capacity as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }
        Ok((total_value, total_weight))
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<()> {
        let (total_value, total_weight) = self.evaluate_selection(&solution.selection)?;
        if total_weight != solution.total_weight {
            return Err(anyhow!(
                "Reported weight ({}) does not match selected weight ({})",
                solution.total_weight,
                total_weight
            ));
        }
        let tolerance = VALUE_TOLERANCE * total_value.abs().max(1.0);
        if (total_value - solution.value).abs() > tolerance {
            return Err(anyhow!(
                "Reported value ({}) does not match selected value ({})",
                solution.value,
                total_value
            ));
        }
        Ok(())
    }
}
