use knap_challenges::knapsack::Item;

/// Positions of `items` ordered by descending value density. The sort is
/// stable, so items with equal ratios keep their input order.
pub fn rank_by_ratio(items: &[Item]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[b].ratio().total_cmp(&items[a].ratio()));
    order
}

/// Weights and values laid out in a working order, so the search loops read
/// contiguous memory instead of chasing item positions.
#[derive(Debug, Clone)]
pub struct OrderedItems {
    pub positions: Vec<usize>,
    pub weights: Vec<u32>,
    pub values: Vec<f64>,
}

impl OrderedItems {
    pub fn new(items: &[Item], positions: Vec<usize>) -> Self {
        let weights = positions.iter().map(|&i| items[i].weight()).collect();
        let values = positions.iter().map(|&i| items[i].value()).collect();
        Self {
            positions,
            weights,
            values,
        }
    }

    /// Caller order.
    pub fn original(items: &[Item]) -> Self {
        Self::new(items, (0..items.len()).collect())
    }

    pub fn ranked(items: &[Item]) -> Self {
        Self::new(items, rank_by_ratio(items))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn ratio(&self, level: usize) -> f64 {
        self.values[level] / self.weights[level] as f64
    }
}
