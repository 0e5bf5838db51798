use chrono::{Local, TimeZone};
use std::time::{SystemTime, UNIX_EPOCH};

use mathgames::progress::KNOWN_GAMES;
use mathgames::storage::FileStore;
use mathgames::{ProgressionEngine, Settings};

fn init_logging() {
    env_logger::init();
}

fn format_unlocked_at(unlocked_at: SystemTime) -> String {
    let millis = unlocked_at
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn main() {
    init_logging();

    let data_dir = Settings::data_dir();
    let settings = Settings::load_from(&data_dir);
    let engine = ProgressionEngine::new(FileStore::in_dir(&data_dir), &settings);

    if Settings::is_debug_mode() {
        println!("Profile {:?} in {}", settings.profile, data_dir.display());
    }

    let stats = engine.stats();
    println!("⭐ Stars:           {}", stats.stars);
    println!("📝 Problems solved: {}", stats.total_problems);
    println!("🔥 Best streak:     {}", stats.best_streak);
    println!("💨 Fast solves:     {}", stats.fast_solves);
    println!(
        "🎮 Games played:    {}/{}",
        stats.games_played,
        KNOWN_GAMES.len()
    );
    for (game_id, count) in &stats.game_stats {
        println!("     {:<24}{}", game_id, count);
    }

    println!();
    match engine.next_badge_progress() {
        Some(progress) => println!(
            "Next badge: {} {} ({}/{} stars, {:.0}%)",
            progress.badge.icon,
            progress.badge.name(),
            progress.current,
            progress.needed,
            progress.progress_percent
        ),
        None => println!("🎉 All badges unlocked!"),
    }
    for badge in engine.unlocked_badges() {
        println!("  {} {}", badge.definition.icon, badge.definition.name());
    }

    println!();
    println!(
        "Achievements {}/{}",
        engine.unlocked_count(),
        engine.catalogue().achievements().len()
    );
    for unlocked in engine.unlocked_achievements() {
        println!(
            "  {} {:<22} +{}  {}",
            unlocked.definition.icon,
            unlocked.definition.name(),
            unlocked.definition.star_reward,
            format_unlocked_at(unlocked.unlocked_at)
        );
    }
}
