use biodivine_ncbf_inference::{InferenceConfig, NcbfInference, RegulatoryTopology};
use std::convert::TryFrom;

/// Infer every nested canalizing Boolean network admitted by the topology
/// read from the given file and print them to stdout in `.bnet` format.
///
/// Usage: `infer-networks <topology-file> [attractor-state ...]`
///
/// The topology file uses the arrow format (`A -> B`, `B -| A`); attractor
/// states are binary strings in canonical (alphabetical) node order. Set
/// `NCBF_MAX_CANDIDATES` to bound the enumeration.
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: infer-networks <topology-file> [attractor-state ...]");
            std::process::exit(2);
        }
    };
    let attractors: Vec<String> = args.collect();
    let max_candidates = std::env::var("NCBF_MAX_CANDIDATES")
        .ok()
        .map(|value| value.parse::<usize>().expect("Invalid NCBF_MAX_CANDIDATES."));

    let model = std::fs::read_to_string(&path).expect("Cannot read the topology file.");
    let topology = match RegulatoryTopology::try_from(model.as_str()) {
        Ok(topology) => topology,
        Err(error) => {
            eprintln!("Invalid topology: {}", error);
            std::process::exit(1);
        }
    };

    let inference = NcbfInference::new(topology);
    let config = InferenceConfig {
        attractors,
        max_candidates,
    };
    let networks = match inference.run(&config) {
        Ok(networks) => networks,
        Err(error) => {
            eprintln!("Inference failed: {}", error);
            std::process::exit(1);
        }
    };

    eprintln!("Inferred networks: {}", networks.len());
    for network in &networks {
        println!("{}", network.to_bnet(inference.get_topology()));
    }
}
