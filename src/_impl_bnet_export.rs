use crate::{NetworkCandidate, RegulatoryTopology, StateSet};
use std::collections::BTreeSet;

/// One implicant cube over the raw state bits: `value` fixes the cared-for
/// bits, `dontcare` masks the free ones.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
struct Cube {
    value: usize,
    dontcare: usize,
}

impl Cube {
    fn covers(&self, minterm: usize) -> bool {
        minterm & !self.dontcare == self.value
    }
}

impl NetworkCandidate {
    /// Produce a `.bnet` string representation of this network.
    ///
    /// Every line holds one node update function as a minimal sum-of-products
    /// expression over `&`, `|` and `!` in canonical variable order. A node
    /// with an empty on-set renders as the constant `0`, a node with the full
    /// state space as its on-set renders as `1`.
    pub fn to_bnet(&self, topology: &RegulatoryTopology) -> String {
        let variables = topology.node_names();
        let mut model = "targets,factors\n".to_string();
        for node in topology.nodes() {
            let expression = on_set_to_expression(self.get_domain(node), &variables);
            let line = format!("{}, {}\n", topology.get_node_name(node), expression);
            model.push_str(line.as_str());
        }
        model
    }
}

/// Render an on-set as a minimal sum-of-products expression over the given
/// variables (in canonical order): prime implicants via Quine–McCluskey
/// reduction, then an essential-first greedy cover.
///
/// Special cases: an empty on-set is the literal `0`, the full space is `1`.
pub fn on_set_to_expression(on_set: &StateSet, variables: &[String]) -> String {
    if on_set.is_empty() {
        return "0".to_string();
    }
    if on_set.is_full() {
        return "1".to_string();
    }
    let minterms = on_set.ones();
    let primes = prime_implicants(&minterms);
    let mut cover = select_cover(&minterms, &primes);
    cover.sort();
    let terms: Vec<String> = cover
        .iter()
        .map(|cube| render_term(cube, variables))
        .collect();
    terms.join(" | ")
}

/// **(internal)** All prime implicants of the given minterms: iteratively merge
/// cube pairs differing in exactly one cared-for bit; cubes that never merge
/// are prime.
fn prime_implicants(minterms: &[usize]) -> Vec<Cube> {
    let mut current: Vec<Cube> = minterms
        .iter()
        .map(|m| Cube {
            value: *m,
            dontcare: 0,
        })
        .collect();
    let mut primes = Vec::new();
    while !current.is_empty() {
        let mut used = vec![false; current.len()];
        let mut next: Vec<Cube> = Vec::new();
        for i in 0..current.len() {
            for j in (i + 1)..current.len() {
                if current[i].dontcare != current[j].dontcare {
                    continue;
                }
                let difference = current[i].value ^ current[j].value;
                if difference.count_ones() == 1 {
                    used[i] = true;
                    used[j] = true;
                    let merged = Cube {
                        value: current[i].value & !difference,
                        dontcare: current[i].dontcare | difference,
                    };
                    if !next.contains(&merged) {
                        next.push(merged);
                    }
                }
            }
        }
        for (i, cube) in current.iter().enumerate() {
            if !used[i] {
                primes.push(*cube);
            }
        }
        current = next;
    }
    primes
}

/// **(internal)** Pick a prime cover of the minterms: essential primes first,
/// then greedily the prime covering the most uncovered minterms.
fn select_cover(minterms: &[usize], primes: &[Cube]) -> Vec<Cube> {
    let mut selected: Vec<Cube> = Vec::new();
    for minterm in minterms {
        let covering: Vec<&Cube> = primes.iter().filter(|c| c.covers(*minterm)).collect();
        if covering.len() == 1 && !selected.contains(covering[0]) {
            selected.push(*covering[0]);
        }
    }
    let mut remaining: BTreeSet<usize> = minterms
        .iter()
        .filter(|m| !selected.iter().any(|c| c.covers(**m)))
        .cloned()
        .collect();
    while !remaining.is_empty() {
        let best = primes
            .iter()
            .filter(|c| !selected.contains(*c))
            .max_by_key(|c| remaining.iter().filter(|m| c.covers(**m)).count())
            .cloned();
        match best {
            Some(cube) => {
                remaining.retain(|m| !cube.covers(*m));
                selected.push(cube);
            }
            // Primes always cover every minterm, so this is unreachable.
            None => break,
        }
    }
    selected
}

/// **(internal)** Render one cube as a conjunction of literals in canonical
/// variable order. Variable `i` of `n` sits at bit position `n - 1 - i`.
fn render_term(cube: &Cube, variables: &[String]) -> String {
    let n = variables.len();
    let mut factors = Vec::new();
    for (i, name) in variables.iter().enumerate() {
        let position = n - 1 - i;
        if cube.dontcare & (1 << position) != 0 {
            continue;
        }
        if cube.value & (1 << position) != 0 {
            factors.push(name.clone());
        } else {
            factors.push(format!("!{}", name));
        }
    }
    factors.join("&")
}

#[cfg(test)]
mod tests {
    use super::{on_set_to_expression, prime_implicants, select_cover};
    use crate::{NetworkCandidate, State, StateSet};
    use std::convert::TryFrom;

    fn set(capacity: usize, ones: &[usize]) -> StateSet {
        let mut set = StateSet::empty(capacity);
        for i in ones {
            set.insert(State::from(*i));
        }
        set
    }

    fn variables(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_constant_expressions() {
        let variables = variables(&["A", "B"]);
        assert_eq!("0", on_set_to_expression(&set(4, &[]), &variables));
        assert_eq!("1", on_set_to_expression(&set(4, &[0, 1, 2, 3]), &variables));
    }

    #[test]
    fn test_single_literal() {
        let variables = variables(&["A", "B"]);
        // States with A=1.
        assert_eq!("A", on_set_to_expression(&set(4, &[2, 3]), &variables));
        // States with B=0.
        assert_eq!("!B", on_set_to_expression(&set(4, &[0, 2]), &variables));
    }

    #[test]
    fn test_xor_expression() {
        let variables = variables(&["A", "B"]);
        // On-set {"01", "10"}, i.e. exclusive or.
        assert_eq!(
            "!A&B | A&!B",
            on_set_to_expression(&set(4, &[1, 2]), &variables)
        );
    }

    #[test]
    fn test_cover_round_trip() {
        // Re-evaluating the selected cover over the space must reproduce the
        // on-set exactly.
        let minterms = vec![0, 1, 2, 5, 6, 7];
        let primes = prime_implicants(&minterms);
        let cover = select_cover(&minterms, &primes);
        let mut evaluated: Vec<usize> = (0..8)
            .filter(|m| cover.iter().any(|c| c.covers(*m)))
            .collect();
        evaluated.sort_unstable();
        assert_eq!(minterms, evaluated);
    }

    #[test]
    fn test_network_to_bnet() {
        let topology = crate::RegulatoryTopology::try_from("A -> B \n B -| A").unwrap();
        // The network from the worked two-node example: A's on-set is B=0,
        // B's on-set is A=1.
        let network = NetworkCandidate::new(vec![set(4, &[0, 2]), set(4, &[2, 3])]);
        let expected = "targets,factors\nA, !B\nB, A\n";
        assert_eq!(expected, network.to_bnet(&topology));
    }
}
