//! Result rendering: console blocks, CSV and JSON export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::types::MatchRecord;

/// Render a pool as `d4 + d6 + d6`.
pub fn format_pool(dice: &[u32]) -> String {
    dice.iter()
        .map(|d| format!("d{}", d))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Print one human-readable block per match.
pub fn print_matches(matches: &[MatchRecord]) {
    if matches.is_empty() {
        println!("\nNo pools matched.");
        return;
    }

    println!("\nFound {} matching pools:", matches.len());
    for (i, record) in matches.iter().enumerate() {
        println!("{}.", i + 1);
        println!("    Total dice: {}", record.dice.len());
        println!("    Pool: {}", format_pool(&record.dice));
        println!("    Target number: {}\n", record.target);
    }
}

/// Write matches as CSV: one row per match, pool rendered as `4+6+6`.
pub fn write_matches_csv(path: &Path, matches: &[MatchRecord]) -> std::io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "num_dice,pool,target")?;
    for record in matches {
        let pool = record
            .dice
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("+");
        writeln!(f, "{},{},{}", record.dice.len(), pool, record.target)?;
    }
    Ok(())
}

/// Write matches as a JSON array of `{dice, target}` records.
pub fn write_matches_json(path: &Path, matches: &[MatchRecord]) -> std::io::Result<()> {
    let f = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(f, matches)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pool() {
        assert_eq!(format_pool(&[4]), "d4");
        assert_eq!(format_pool(&[4, 6, 6, 6]), "d4 + d6 + d6 + d6");
    }

    #[test]
    fn test_csv_round_trip_shape() {
        let matches = vec![
            MatchRecord {
                dice: vec![4, 6, 6, 6],
                target: 16,
            },
            MatchRecord {
                dice: vec![6, 6, 8, 10],
                target: 21,
            },
        ];
        let path = std::env::temp_dir().join("dicetarget_csv_test.csv");
        write_matches_csv(&path, &matches).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "num_dice,pool,target");
        assert_eq!(lines[1], "4,4+6+6+6,16");
        assert_eq!(lines[2], "4,6+6+8+10,21");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_json_export_shape() {
        let matches = vec![MatchRecord {
            dice: vec![4],
            target: 3,
        }];
        let path = std::env::temp_dir().join("dicetarget_json_test.json");
        write_matches_json(&path, &matches).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["dice"][0], 4);
        assert_eq!(parsed[0]["target"], 3);
        std::fs::remove_file(&path).ok();
    }
}
