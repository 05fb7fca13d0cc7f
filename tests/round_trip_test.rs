//! save followed by load reproduces the same pairs in the same order.

use tempfile::TempDir;
use tinyconf::{Config, Pair};

fn pairs(config: &Config) -> Vec<Pair> {
    config.iter().cloned().collect()
}

fn assert_round_trip(input: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("round_trip.conf");

    let original: Config = input.parse().unwrap();
    original.save_as(&path).unwrap();
    let reloaded = Config::load(&path).unwrap();

    assert_eq!(pairs(&original), pairs(&reloaded), "input: {input:?}");
}

#[test]
fn test_round_trip_normalizes_formatting() {
    assert_round_trip("key1=value1\nkey2 = value2   # inline\n# full-line\nkey-with-dash=123\n");
    assert_round_trip("a\t=\t1\r\nb = 2\r\n");
    assert_round_trip("  indented = yes\n\n\n  other=no");
}

#[test]
fn test_round_trip_keeps_duplicates() {
    assert_round_trip("mode=fast\nmode=slow\nmode=auto\n");
}

#[test]
fn test_round_trip_unusual_token_characters() {
    assert_round_trip("color=ff#00aa\npath=-usr/share/game\nratio=1.5e-3\nname=héros\n");
}

#[test]
fn test_round_trip_after_mutation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.conf");

    let mut config: Config = "player_power=100\nplayer_name = Hero\n# note\nbase_attack=12.5\n"
        .parse()
        .unwrap();
    config.set_value("player_power", "330").unwrap();
    config.save_as(&path).unwrap();

    let reloaded = Config::load(&path).unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded.get_int("player_power").unwrap(), 330);
    assert_eq!(reloaded.get_value("player_name"), Some("Hero"));
    assert_eq!(reloaded.get_float("base_attack").unwrap(), 12.5);
}

#[test]
fn test_round_trip_many_generated_pairs() {
    let mut config = tinyconf::Config::new();
    for i in 0..500 {
        config
            .set_value(&format!("setting_{i}"), &format!("{}", i * 7))
            .unwrap();
    }

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("large.conf");
    config.save_as(&path).unwrap();

    let reloaded = Config::load(&path).unwrap();
    assert_eq!(pairs(&config), pairs(&reloaded));
    assert_eq!(reloaded.serialized_len(), config.serialized_len());
}
