use std::path::PathBuf;

use roundtree_core::SimulationConfig;
use roundtree_roster::compile_yaml;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crates/roundtree-roster/examples/six_players.roster.yaml"));

    let roster = compile_yaml(&path).expect("failed to compile roster YAML");
    let report = roster
        .simulate(&SimulationConfig::default())
        .expect("simulation failed");

    println!("paths={}", report.raw_path_count());
    println!("distinct_tallies={}", report.distinct_tally_count());
    for entry in report.distribution.sorted_by_probability().iter().take(5) {
        println!("{:?} {:.6}", entry.tally.wins(), entry.probability);
    }
}
