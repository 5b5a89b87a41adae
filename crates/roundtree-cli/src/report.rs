use std::io::{self, Write};

use roundtree_core::{PlayerId, SimulationReport};
use roundtree_roster::Roster;

/// Print the run summary, schedule, expected wins and the `top` most likely tallies.
pub fn write_table(
    out: &mut impl Write,
    roster: &Roster,
    report: &SimulationReport,
    top: usize,
) -> io::Result<()> {
    let distribution = &report.distribution;

    writeln!(out, "=== Round-robin outcome distribution ===")?;
    writeln!(out, "{:<24} {:>12}", "players", roster.size())?;
    writeln!(out, "{:<24} {:>12}", "tree nodes", report.node_count)?;
    writeln!(out, "{:<24} {:>12}", "paths", report.raw_path_count())?;
    writeln!(
        out,
        "{:<24} {:>12}",
        "distinct tallies",
        report.distinct_tally_count()
    )?;
    writeln!(
        out,
        "{:<24} {:>12.9}",
        "total probability",
        distribution.total_probability()
    )?;

    writeln!(out, "\n--- Schedule ---")?;
    for (i, round) in report.schedule.rounds().iter().enumerate() {
        let games: Vec<String> = round
            .iter()
            .map(|game| {
                format!(
                    "{} v {}",
                    display_name(roster, game.first()),
                    display_name(roster, game.second())
                )
            })
            .collect();
        writeln!(out, "round {:<3} {}", i + 1, games.join(", "))?;
    }

    writeln!(out, "\n--- Expected wins ---")?;
    for (slot, wins) in distribution.expected_wins().iter().enumerate() {
        let id = PlayerId::from_slot(slot);
        writeln!(out, "{:<24} {:>8.3}", display_name(roster, id), wins)?;
    }

    writeln!(out, "\n--- Most likely tallies ---")?;
    let header: Vec<String> = roster
        .players()
        .iter()
        .map(|p| format!("{:>6}", initials(&p.name)))
        .collect();
    writeln!(out, "{} {:>12}", header.join(""), "probability")?;
    for entry in distribution.sorted_by_probability().into_iter().take(top) {
        let cells: Vec<String> = entry
            .tally
            .wins()
            .iter()
            .map(|w| format!("{w:>6}"))
            .collect();
        writeln!(out, "{} {:>12.6}", cells.join(""), entry.probability)?;
    }

    Ok(())
}

fn display_name(roster: &Roster, id: PlayerId) -> String {
    if id.is_bye() {
        return "BYE".to_string();
    }
    roster
        .name_of(id)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("#{id}"))
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(4)
        .collect()
}
