//! Plain-text rendering of turn summaries.
use std::fmt::Write;

use battle_core::{ActionHpChange, GroupedAction, ParticipantState, TurnSummary};

const BAR_WIDTH: usize = 10;

pub fn render_turns(turns: &[TurnSummary]) -> String {
    let mut out = String::new();
    for summary in turns {
        render_turn(&mut out, summary);
    }
    out
}

fn render_turn(out: &mut String, summary: &TurnSummary) {
    let _ = writeln!(out, "── Turn {} ──", summary.turn);
    for state in summary.allies.iter().chain(&summary.enemies) {
        let _ = writeln!(out, "  {}", participant_line(state));
    }
    for group in &summary.actions {
        render_group(out, group);
    }
    out.push('\n');
}

fn render_group(out: &mut String, group: &GroupedAction) {
    let _ = writeln!(out, "  ▸ {}", group.primary.message);
    for (result, change) in group.results.iter().zip(&group.hp_changes) {
        match change {
            Some(change) => {
                let _ = writeln!(out, "      {}  {}", result.message, change_label(change));
            }
            None => {
                let _ = writeln!(out, "      {}", result.message);
            }
        }
    }
}

fn participant_line(state: &ParticipantState) -> String {
    let delta = i64::from(state.current_hp) - i64::from(state.previous_hp);
    let delta = if delta == 0 {
        String::new()
    } else {
        format!(" ({delta:+})")
    };
    format!(
        "{:<12} {} {:>4}/{:<4}{}",
        state.name,
        hp_bar(state.current_hp, state.max_hp),
        state.current_hp,
        state.max_hp,
        delta
    )
}

fn change_label(change: &ActionHpChange) -> String {
    format!(
        "[{} {} → {}/{}]",
        change.target_name, change.before_hp, change.after_hp, change.max_hp
    )
}

fn hp_bar(current: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        (u64::from(current) * BAR_WIDTH as u64).div_ceil(u64::from(max)) as usize
    };
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
