use crate::{Disambiguation, InferenceError, Pathway};
use std::collections::HashMap;
use std::collections::HashSet;

/// The ordered pool from which fresh repetition symbols are drawn.
const SYMBOL_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

impl Disambiguation {
    /// Rewrite the antecedent symbols of one node's pathways so that every
    /// pathway carries a unique symbol, distinct from every node name of the
    /// topology. The input pathways are never mutated; the result owns renamed
    /// copies plus the mapping needed to restore the original names.
    ///
    /// Two independent passes are applied:
    ///
    /// 1. *Contradictions*: a symbol appearing as an antecedent on both the
    ///    activator and the inhibitor side has all its inhibitor-side
    ///    occurrences renamed to a fresh numeric symbol (`"1"`, `"2"`, ...).
    /// 2. *Repetitions*: within each side separately, every occurrence of a
    ///    symbol after the first is renamed to a fresh symbol drawn from
    ///    ASCII letters and digits, excluding all node names and all symbols
    ///    already in use.
    ///
    /// Fails with `InferenceError::SymbolPoolExhausted` when no fresh symbol
    /// is available.
    pub fn resolve(
        activators: &[Pathway],
        inhibitors: &[Pathway],
        all_names: &[String],
    ) -> Result<Disambiguation, InferenceError> {
        let mut activators: Vec<Pathway> = activators.to_vec();
        let mut inhibitors: Vec<Pathway> = inhibitors.to_vec();
        let mut renames: HashMap<String, String> = HashMap::new();

        let mut used: HashSet<String> = all_names.iter().cloned().collect();
        for pathway in activators.iter().chain(inhibitors.iter()) {
            used.insert(pathway.antecedent.clone());
        }

        // Pass 1: contradiction resolution. Only the inhibitor side is renamed.
        let activator_symbols: HashSet<String> =
            activators.iter().map(|p| p.antecedent.clone()).collect();
        let mut contradictory: Vec<String> = inhibitors
            .iter()
            .map(|p| p.antecedent.clone())
            .filter(|symbol| activator_symbols.contains(symbol))
            .collect();
        contradictory.sort();
        contradictory.dedup();
        let mut numeric = 0usize;
        for symbol in contradictory {
            let fresh = loop {
                numeric += 1;
                let candidate = numeric.to_string();
                if !used.contains(&candidate) {
                    break candidate;
                }
            };
            used.insert(fresh.clone());
            renames.insert(fresh.clone(), symbol.clone());
            for pathway in inhibitors.iter_mut() {
                if pathway.antecedent == symbol {
                    *pathway = pathway.with_antecedent(&fresh);
                }
            }
        }

        // Pass 2: repetition resolution, each side independently.
        for pathways in [&mut activators, &mut inhibitors] {
            let mut seen: HashSet<String> = HashSet::new();
            for pathway in pathways.iter_mut() {
                if seen.insert(pathway.antecedent.clone()) {
                    continue;
                }
                let fresh = fresh_symbol(&used)?;
                used.insert(fresh.clone());
                let original = renames
                    .get(&pathway.antecedent)
                    .cloned()
                    .unwrap_or_else(|| pathway.antecedent.clone());
                renames.insert(fresh.clone(), original);
                *pathway = pathway.with_antecedent(&fresh);
            }
        }

        Ok(Disambiguation {
            activators,
            inhibitors,
            renames,
        })
    }

    /// The disambiguated activator pathways.
    pub fn get_activators(&self) -> &[Pathway] {
        &self.activators
    }

    /// The disambiguated inhibitor pathways.
    pub fn get_inhibitors(&self) -> &[Pathway] {
        &self.inhibitors
    }

    /// The unique antecedent symbols of the activator side.
    pub fn activator_symbols(&self) -> Vec<String> {
        self.activators.iter().map(|p| p.antecedent.clone()).collect()
    }

    /// The unique antecedent symbols of the inhibitor side.
    pub fn inhibitor_symbols(&self) -> Vec<String> {
        self.inhibitors.iter().map(|p| p.antecedent.clone()).collect()
    }

    /// Restore a possibly-renamed symbol back to the original node name.
    pub fn restore_symbol<'a>(&'a self, symbol: &'a str) -> &'a str {
        match self.renames.get(symbol) {
            Some(original) => original.as_str(),
            None => symbol,
        }
    }
}

/// **(internal)** The first symbol of the alphabet not yet in use.
fn fresh_symbol(used: &HashSet<String>) -> Result<String, InferenceError> {
    SYMBOL_ALPHABET
        .chars()
        .map(|c| c.to_string())
        .find(|candidate| !used.contains(candidate))
        .ok_or(InferenceError::SymbolPoolExhausted)
}

#[cfg(test)]
mod tests {
    use crate::{Disambiguation, InferenceError, Pathway, RegulatoryTopology, StateSpace};

    fn pathway(
        topology: &RegulatoryTopology,
        space: &StateSpace,
        antecedent: &str,
        consequent: &str,
        canalizing: bool,
        canalized: bool,
    ) -> Pathway {
        Pathway::new(
            topology,
            space,
            topology.find_node(antecedent).unwrap(),
            topology.find_node(consequent).unwrap(),
            canalizing,
            canalized,
        )
    }

    fn test_topology() -> (RegulatoryTopology, StateSpace) {
        let names = vec!["C", "D"].into_iter().map(|s| s.to_string()).collect();
        (RegulatoryTopology::new(names), StateSpace::new(2))
    }

    #[test]
    fn test_contradiction_resolution() {
        let (topology, space) = test_topology();
        // D both activates and inhibits C.
        let activator = pathway(&topology, &space, "D", "C", true, true);
        let inhibitor = pathway(&topology, &space, "D", "C", true, false);
        let expected_domain = inhibitor.get_domain().clone();

        let resolved = Disambiguation::resolve(
            &[activator],
            &[inhibitor],
            &topology.node_names(),
        )
        .unwrap();

        assert_eq!("D", resolved.get_activators()[0].get_antecedent());
        // Inhibitor-side occurrence is renamed to a fresh numeric symbol...
        assert_eq!("1", resolved.get_inhibitors()[0].get_antecedent());
        // ...with the domain untouched...
        assert_eq!(&expected_domain, resolved.get_inhibitors()[0].get_domain());
        // ...and the rename can be undone.
        assert_eq!("D", resolved.restore_symbol("1"));
        assert_eq!("D", resolved.restore_symbol("D"));
    }

    #[test]
    fn test_repetition_resolution() {
        let (topology, space) = test_topology();
        // Two activator pathways with the same antecedent but different
        // canalizing values.
        let first = pathway(&topology, &space, "D", "C", true, true);
        let second = pathway(&topology, &space, "D", "C", false, true);
        let second_domain = second.get_domain().clone();

        let resolved =
            Disambiguation::resolve(&[first, second], &[], &topology.node_names()).unwrap();

        assert_eq!("D", resolved.get_activators()[0].get_antecedent());
        let renamed = resolved.get_activators()[1].get_antecedent().clone();
        assert_ne!("D", renamed);
        // The fresh symbol avoids all node names.
        assert!(!topology.node_names().contains(&renamed));
        assert_eq!(&second_domain, resolved.get_activators()[1].get_domain());
        assert_eq!("D", resolved.restore_symbol(&renamed));
    }

    #[test]
    fn test_no_clash_is_identity() {
        let (topology, space) = test_topology();
        let activator = pathway(&topology, &space, "D", "C", true, true);
        let inhibitor = pathway(&topology, &space, "C", "C", false, false);

        let resolved = Disambiguation::resolve(
            &[activator.clone()],
            &[inhibitor.clone()],
            &topology.node_names(),
        )
        .unwrap();
        assert_eq!(vec![activator], resolved.get_activators().to_vec());
        assert_eq!(vec![inhibitor], resolved.get_inhibitors().to_vec());
    }

    #[test]
    fn test_symbol_pool_exhaustion() {
        let (topology, space) = test_topology();
        // Every single-character symbol is already taken by a node name, so
        // the first repetition cannot be renamed.
        let all_symbols: Vec<String> = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
            .chars()
            .map(|c| c.to_string())
            .collect();
        let repeated = pathway(&topology, &space, "D", "C", true, true);
        let result = Disambiguation::resolve(
            &[repeated.clone(), repeated],
            &[],
            &all_symbols,
        );
        assert_eq!(InferenceError::SymbolPoolExhausted, result.unwrap_err());
    }

    #[test]
    fn test_numeric_symbols_skip_used_names() {
        let names: Vec<String> = vec!["1".to_string(), "C".to_string(), "D".to_string()];
        let topology = RegulatoryTopology::new(names);
        let space = StateSpace::new(3);
        let activator = pathway(&topology, &space, "D", "C", true, true);
        let inhibitor = pathway(&topology, &space, "D", "C", true, false);

        let resolved = Disambiguation::resolve(
            &[activator],
            &[inhibitor],
            &topology.node_names(),
        )
        .unwrap();
        // "1" is a node name, so the fresh numeric symbol must skip it.
        assert_eq!("2", resolved.get_inhibitors()[0].get_antecedent());
    }
}
