// ABOUTME: The statistics engine: pure projection from workout history to derived stats
// ABOUTME: Streak walk, goal percentages, muscle tallies, neglect ranking, weight trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MyFit

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use myfit_core::models::{MuscleGroup, WeightLog, Workout};

use crate::summary::{
    MonthlyBreakdown, MuscleGroupCount, NeglectRecommendation, StatsSummary, TrendDirection,
    WeightTrend,
};

/// Monthly goal is the weekly goal times this factor. A four-week "month" has
/// no calendar basis; it is a product decision carried over unchanged.
const WEEKS_PER_MONTH: u32 = 4;

/// Size of the "recent" and "previous" windows for the weight trend
const TREND_WINDOW: usize = 7;

/// Changes under this many kilograms read as "stable"
const STABLE_THRESHOLD_KG: f64 = 0.1;

/// Derived-statistics calculator
///
/// Construct once per request with the user's weekly goal, then call
/// [`StatsEngine::summarize`] with the full workout list, the recent weight
/// logs, and an injected `now`.
#[derive(Debug, Clone, Copy)]
pub struct StatsEngine {
    weekly_goal: u32,
}

impl StatsEngine {
    /// Create an engine for the given weekly training-day goal
    ///
    /// A zero goal is treated as 1 so percentages stay well-defined; the API
    /// boundary validates the 1..=7 range before anything reaches here.
    #[must_use]
    pub const fn new(weekly_goal: u32) -> Self {
        Self {
            weekly_goal: if weekly_goal == 0 { 1 } else { weekly_goal },
        }
    }

    /// Compute the aggregate summary for one user
    ///
    /// Inputs may arrive in any order; the engine sorts internally. Nothing is
    /// mutated and nothing fails: insufficient data yields zero/`None` fields.
    #[must_use]
    pub fn summarize(
        &self,
        workouts: &[Workout],
        weight_logs: &[WeightLog],
        now: DateTime<Utc>,
    ) -> StatsSummary {
        let today = now.date_naive();

        // Distinct training days, newest first. Deduplicating here makes the
        // streak walk below total: every subsequent date is strictly earlier.
        let mut days: Vec<NaiveDate> = workouts.iter().map(|w| w.date).collect();
        days.sort_unstable_by(|a, b| b.cmp(a));
        days.dedup();

        let week_start = week_start(today);
        let weekly_count = days.iter().filter(|d| **d >= week_start).count() as u32;
        let monthly_count = days.iter().filter(|d| same_month(**d, today)).count() as u32;

        StatsSummary {
            weekly_pct: completion_pct(weekly_count, self.weekly_goal),
            monthly_pct: completion_pct(monthly_count, self.weekly_goal * WEEKS_PER_MONTH),
            streak: streak(&days, today),
            weekly_count,
            most_trained: most_trained(workouts, today),
            recommendation: recommend_neglected(workouts, today),
            weight_trend: weight_trend(weight_logs),
        }
    }
}

/// Most recent Sunday at midnight relative to `today` (Sunday-anchored weeks)
fn week_start(today: NaiveDate) -> NaiveDate {
    today - Days::new(u64::from(today.weekday().num_days_from_sunday()))
}

/// Two dates share a calendar month
fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// `min(100, 100 * count / goal)` with a goal of at least 1
fn completion_pct(count: u32, goal: u32) -> u8 {
    ((count * 100) / goal.max(1)).min(100) as u8
}

/// Consecutive-day streak over distinct dates sorted descending
///
/// The streak is alive while the most recent training day is today or
/// yesterday (one-day grace); once alive, every earlier day must be exactly
/// one day before its successor.
fn streak(days: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&most_recent) = days.first() else {
        return 0;
    };

    // 2+ calendar days of gap means 48+ hours midnight-to-midnight
    if (today - most_recent).num_days() >= 2 {
        return 0;
    }

    let mut streak = 1;
    let mut cursor = most_recent - Days::new(1);
    for &day in &days[1..] {
        if day != cursor {
            break;
        }
        streak += 1;
        cursor = cursor - Days::new(1);
    }
    streak
}

/// Per-month training breakdown: distinct days, occurrence tallies, and the
/// most-trained group
///
/// An entry with k groups contributes 1 to each of its k groups.
#[must_use]
pub fn monthly_breakdown(workouts: &[Workout], year: i32, month: u32) -> MonthlyBreakdown {
    let in_month = |d: NaiveDate| d.year() == year && d.month() == month;

    let mut days: Vec<NaiveDate> = workouts
        .iter()
        .map(|w| w.date)
        .filter(|d| in_month(*d))
        .collect();
    days.sort_unstable();
    days.dedup();

    let mut tally: Vec<(MuscleGroup, u32)> = Vec::new();
    for workout in workouts.iter().filter(|w| in_month(w.date)) {
        for &group in &workout.muscle_groups {
            match tally.iter_mut().find(|(g, _)| *g == group) {
                Some((_, count)) => *count += 1,
                None => tally.push((group, 1)),
            }
        }
    }

    MonthlyBreakdown {
        training_days: days.len() as u32,
        most_trained: top_of_tally(&tally),
        muscle_groups: tally
            .into_iter()
            .map(|(muscle_group, count)| MuscleGroupCount {
                muscle_group,
                count,
            })
            .collect(),
    }
}

/// Highest-count muscle group this calendar month, ties going to the group
/// tallied first
fn most_trained(workouts: &[Workout], today: NaiveDate) -> Option<MuscleGroup> {
    let breakdown = monthly_breakdown(workouts, today.year(), today.month());
    breakdown.most_trained
}

/// Manual scan: `max_by_key` keeps the *last* maximum, but ties here must
/// resolve to the first-tallied group.
fn top_of_tally(tally: &[(MuscleGroup, u32)]) -> Option<MuscleGroup> {
    let mut best: Option<(MuscleGroup, u32)> = None;
    for &(group, count) in tally {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((group, count));
        }
    }
    best.map(|(group, _)| group)
}

/// The vocabulary group that has gone longest untrained
///
/// Never-trained groups outrank any finite gap; among finite gaps the largest
/// wins and ties resolve to the earliest group in vocabulary order. Groups
/// trained today are never recommended, so a user who has hit everything
/// today gets no nudge.
fn recommend_neglected(workouts: &[Workout], today: NaiveDate) -> Option<NeglectRecommendation> {
    let mut best: Option<NeglectRecommendation> = None;

    for group in MuscleGroup::ALL {
        let last_trained = workouts
            .iter()
            .filter(|w| w.muscle_groups.contains(&group))
            .map(|w| w.date)
            .max();

        let candidate = match last_trained {
            None => NeglectRecommendation {
                muscle: group,
                days_since: 0,
                never_trained: true,
            },
            Some(date) => {
                let days = (today - date).num_days();
                if days <= 0 {
                    continue;
                }
                NeglectRecommendation {
                    muscle: group,
                    days_since: days as u32,
                    never_trained: false,
                }
            }
        };

        if best
            .as_ref()
            .is_none_or(|b| neglect_rank(&candidate) > neglect_rank(b))
        {
            best = Some(candidate);
        }
    }

    best
}

/// Ordering key for neglect candidates: never-trained beats any finite gap
const fn neglect_rank(r: &NeglectRecommendation) -> u64 {
    if r.never_trained {
        u64::MAX
    } else {
        r.days_since as u64
    }
}

/// Short-term weight trend: mean of the most recent 7 logs vs. the prior 7
///
/// Requires a non-empty "previous" window (8+ logs total); anything less
/// yields no trend rather than a misleading one.
fn weight_trend(weight_logs: &[WeightLog]) -> Option<WeightTrend> {
    let mut logs: Vec<&WeightLog> = weight_logs.iter().collect();
    logs.sort_by(|a, b| b.date.cmp(&a.date));

    let recent = logs.get(..logs.len().min(TREND_WINDOW))?;
    let previous = logs.get(TREND_WINDOW..logs.len().min(2 * TREND_WINDOW))?;
    if recent.is_empty() || previous.is_empty() {
        return None;
    }

    let delta = mean(recent) - mean(previous);
    Some(WeightTrend {
        direction: if delta > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        },
        magnitude: (delta.abs() * 10.0).round() / 10.0,
        stable: delta.abs() < STABLE_THRESHOLD_KG,
    })
}

fn mean(logs: &[&WeightLog]) -> f64 {
    logs.iter().map(|l| l.weight_kg).sum::<f64>() / logs.len() as f64
}
