use crate::{Disambiguation, LayerStructure, StateSet, StateSpace};
use std::collections::HashMap;

/// The per-symbol lookup consumed by `evaluate_domain`: for every regulator
/// symbol of one node, its pathway domain and whether it is an activator.
pub struct SymbolTable {
    entries: HashMap<String, (StateSet, bool)>,
}

impl SymbolTable {
    /// Build the table from the disambiguated pathways of one node.
    pub fn new(disambiguation: &Disambiguation) -> SymbolTable {
        let mut entries = HashMap::new();
        for pathway in disambiguation
            .get_activators()
            .iter()
            .chain(disambiguation.get_inhibitors().iter())
        {
            entries.insert(
                pathway.get_antecedent().clone(),
                (pathway.get_domain().clone(), pathway.is_activator()),
            );
        }
        SymbolTable { entries }
    }

    /// Build the table from explicit `(symbol, domain, activator)` triples.
    pub fn from_entries(entries: Vec<(String, StateSet, bool)>) -> SymbolTable {
        SymbolTable {
            entries: entries
                .into_iter()
                .map(|(symbol, domain, activator)| (symbol, (domain, activator)))
                .collect(),
        }
    }

    /// **(internal)** Resolve one symbol. The table is always built from the
    /// same pathways the layer structure was enumerated from, so a missing
    /// symbol is a bug, not an input error.
    fn get(&self, symbol: &str) -> &(StateSet, bool) {
        self.entries
            .get(symbol)
            .unwrap_or_else(|| panic!("Unknown regulator symbol {}.", symbol))
    }
}

/// Compute the on-set of the nested canalizing function described by the given
/// layer structure.
///
/// The recursion runs outermost layer first: the contribution of everything
/// nested deeper is computed first (innermost base case is the full space),
/// then the current layer intersects the complements of its symbol domains
/// with that inward result and complements the combination. If the first
/// regulator of the outermost layer is an inhibitor, the final result is
/// complemented once more — an inhibitor's canalizing input wires the output
/// to `0` rather than `1`.
pub fn evaluate_domain(
    structure: &LayerStructure,
    table: &SymbolTable,
    space: &StateSpace,
) -> StateSet {
    let result = evaluate(structure, table, space);
    match structure.first().and_then(|layer| layer.first()) {
        Some(symbol) if !table.get(symbol).1 => result.complement(),
        _ => result,
    }
}

/// **(internal)** The recursive part of `evaluate_domain`, without the
/// outermost polarity correction.
fn evaluate(structure: &[Vec<String>], table: &SymbolTable, space: &StateSpace) -> StateSet {
    if structure.is_empty() {
        // No deeper layer overrides: canalized-through by default.
        return space.full_set();
    }
    let mut layer_domain = space.full_set();
    for symbol in &structure[0] {
        layer_domain = layer_domain.intersect(&table.get(symbol).0.complement());
    }
    let downward = evaluate(&structure[1..], table, space);
    layer_domain.intersect(&downward).complement()
}

#[cfg(test)]
mod tests {
    use super::{evaluate_domain, SymbolTable};
    use crate::{State, StateSet, StateSpace};

    /// The two-node example: nodes `[A, B]`, `A` activates `B` through the
    /// `(canalizing=1, canalized=1)` pathway, `B` inhibits `A` through
    /// `(canalizing=1, canalized=0)`.
    fn two_node_setup() -> (StateSpace, StateSet, StateSet) {
        let space = StateSpace::new(2);
        // Domain of the A pathway: states where A=1, i.e. "10" and "11".
        let mut domain_a = space.empty_set();
        domain_a.insert(State::from(0b10));
        domain_a.insert(State::from(0b11));
        // Domain of the B pathway: states where B=1, i.e. "01" and "11".
        let mut domain_b = space.empty_set();
        domain_b.insert(State::from(0b01));
        domain_b.insert(State::from(0b11));
        (space, domain_a, domain_b)
    }

    #[test]
    fn test_activator_layer() {
        let (space, domain_a, _) = two_node_setup();
        let table = SymbolTable::from_entries(vec![("A".to_string(), domain_a, true)]);
        let structure = vec![vec!["A".to_string()]];
        let on_set = evaluate_domain(&structure, &table, &space);
        // B is canalized to 1 exactly when A=1.
        assert_eq!(vec![0b10, 0b11], on_set.ones());
    }

    #[test]
    fn test_inhibitor_layer() {
        let (space, _, domain_b) = two_node_setup();
        let table = SymbolTable::from_entries(vec![("B".to_string(), domain_b, false)]);
        let structure = vec![vec!["B".to_string()]];
        let on_set = evaluate_domain(&structure, &table, &space);
        // A is canalized to 0 when B=1, so the on-set is exactly B=0.
        assert_eq!(vec![0b00, 0b10], on_set.ones());
    }

    #[test]
    fn test_determinism() {
        let (space, domain_a, domain_b) = two_node_setup();
        let table = SymbolTable::from_entries(vec![
            ("A".to_string(), domain_a, true),
            ("B".to_string(), domain_b, false),
        ]);
        let structure = vec![vec!["A".to_string()], vec!["B".to_string()]];
        let first = evaluate_domain(&structure, &table, &space);
        let second = evaluate_domain(&structure, &table, &space);
        assert_eq!(first, second);
    }

    #[test]
    fn test_nested_layers() {
        let (space, domain_a, domain_b) = two_node_setup();
        let table = SymbolTable::from_entries(vec![
            ("A".to_string(), domain_a, true),
            ("B".to_string(), domain_b, false),
        ]);
        // Outer activator layer {A}, inner inhibitor layer {B}:
        // f = A | (!A & !B) ... states "10", "11" and "00".
        let structure = vec![vec!["A".to_string()], vec!["B".to_string()]];
        let on_set = evaluate_domain(&structure, &table, &space);
        assert_eq!(vec![0b00, 0b10, 0b11], on_set.ones());

        // Outer inhibitor layer {B}, inner activator layer {A}:
        // f = !B & A.
        let structure = vec![vec!["B".to_string()], vec!["A".to_string()]];
        let on_set = evaluate_domain(&structure, &table, &space);
        assert_eq!(vec![0b10], on_set.ones());
    }
}
