use crate::LayerStructure;
use std::collections::HashSet;

/// Enumerate every nested canalizing layer structure over the given regulator
/// symbol pools.
///
/// A layer structure is an ordered partition (outermost layer first) of all
/// symbols such that every layer is drawn from one pool and consecutive layers
/// alternate pools. Both starting pools are tried unless one pool is empty, in
/// which case only the other starting order is valid. This is the complete
/// space of NCBF shapes compatible with the given activator/inhibitor split.
pub fn enumerate_layerings(
    activator_symbols: &[String],
    inhibitor_symbols: &[String],
) -> Vec<LayerStructure> {
    let total = activator_symbols.len() + inhibitor_symbols.len();
    let activator_layers = subset_layers(activator_symbols);
    let inhibitor_layers = subset_layers(inhibitor_symbols);
    let mut results = recurse(&activator_layers, &inhibitor_layers, total, Vec::new());
    if !activator_symbols.is_empty() && !inhibitor_symbols.is_empty() {
        results.extend(recurse(
            &inhibitor_layers,
            &activator_layers,
            total,
            Vec::new(),
        ));
    }
    results
}

/// **(internal)** All non-empty subsets of `symbols`, each sorted, ordered by
/// increasing size and lexicographically within one size. These are the
/// candidate layers of one pool.
pub(crate) fn subset_layers(symbols: &[String]) -> Vec<Vec<String>> {
    let mut sorted: Vec<String> = symbols.to_vec();
    sorted.sort();
    let mut result = Vec::new();
    for size in 1..=sorted.len() {
        let mut prefix = Vec::new();
        combinations(&sorted, size, 0, &mut prefix, &mut result);
    }
    result
}

/// **(internal)** Classic k-combinations of `symbols[from..]` appended to `prefix`.
fn combinations(
    symbols: &[String],
    size: usize,
    from: usize,
    prefix: &mut Vec<String>,
    result: &mut Vec<Vec<String>>,
) {
    if prefix.len() == size {
        result.push(prefix.clone());
        return;
    }
    for i in from..symbols.len() {
        prefix.push(symbols[i].clone());
        combinations(symbols, size, i + 1, prefix, result);
        prefix.pop();
    }
}

/// **(internal)** The depth-first alternation: offer every candidate layer of
/// the `current` pool, remove the consumed symbols from that pool's future
/// candidates and swap pools. Paths that cannot consume exactly `total`
/// symbols are pruned.
fn recurse(
    current: &[Vec<String>],
    opposite: &[Vec<String>],
    total: usize,
    path: Vec<Vec<String>>,
) -> Vec<LayerStructure> {
    let consumed: usize = path.iter().map(|layer| layer.len()).sum();
    if current.is_empty() {
        // Base case: when the opposite pool still has candidates, it must be
        // consumed by exactly one final layer.
        return if opposite.is_empty() {
            vec![path]
        } else {
            opposite
                .iter()
                .filter(|layer| consumed + layer.len() == total)
                .map(|layer| {
                    let mut complete = path.clone();
                    complete.push(layer.clone());
                    complete
                })
                .collect()
        };
    }
    // Once the opposite pool is exhausted, only layers completing the
    // partition remain legal.
    let candidates: Vec<Vec<String>> = if opposite.is_empty() {
        current
            .iter()
            .filter(|layer| consumed + layer.len() == total)
            .cloned()
            .collect()
    } else {
        current.to_vec()
    };
    let mut results = Vec::new();
    for chosen in &candidates {
        let used: HashSet<&String> = chosen.iter().collect();
        let remaining: Vec<Vec<String>> = candidates
            .iter()
            .filter(|layer| layer.iter().all(|symbol| !used.contains(symbol)))
            .cloned()
            .collect();
        let mut next_path = path.clone();
        next_path.push(chosen.clone());
        results.extend(recurse(opposite, &remaining, total, next_path));
    }
    results
}
