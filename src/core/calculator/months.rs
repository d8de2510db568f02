//! Calendar-month grouping of matches.

use crate::models::matches::{Match, MatchType};
use crate::utils::date::swedish_month_name;
use chrono::Datelike;
use clap::ValueEnum;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Which matches a listing shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MatchFilter {
    #[default]
    All,
    Home,
    Away,
}

impl MatchFilter {
    pub fn accepts(&self, m: &Match) -> bool {
        match self {
            MatchFilter::All => true,
            MatchFilter::Home => m.match_type == MatchType::Home,
            MatchFilter::Away => m.match_type == MatchType::Away,
        }
    }
}

/// (year, zero-based month). Ordering compares the year first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month0: u32,
}

impl MonthKey {
    pub fn of(m: &Match) -> Self {
        Self {
            year: m.date.year(),
            month0: m.date.month0(),
        }
    }

    /// Parse "YYYY-MM" (one-based month, as typed on the command line).
    pub fn parse(s: &str) -> Option<Self> {
        let (y, m) = s.trim().split_once('-')?;
        let year = y.parse::<i32>().ok()?;
        let month = m.parse::<u32>().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self {
            year,
            month0: month - 1,
        })
    }

    /// "september 2025"
    pub fn display_name(&self) -> String {
        format!("{} {}", swedish_month_name(self.month0), self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month0)
    }
}

#[derive(Debug, Clone)]
pub struct MonthGroup<'a> {
    pub key: MonthKey,
    pub name: String,
    pub matches: Vec<&'a Match>,
}

/// Group matches by calendar month after applying `filter`.
/// Groups are returned oldest first; matches keep their input order.
pub fn group_by_month(matches: &[Match], filter: MatchFilter) -> Vec<MonthGroup<'_>> {
    let mut groups: BTreeMap<MonthKey, Vec<&Match>> = BTreeMap::new();

    for m in matches.iter().filter(|m| filter.accepts(m)) {
        groups.entry(MonthKey::of(m)).or_default().push(m);
    }

    groups
        .into_iter()
        .map(|(key, matches)| MonthGroup {
            key,
            name: key.display_name(),
            matches,
        })
        .collect()
}

/// Expanded/collapsed state of the month sections.
#[derive(Debug, Clone, Default)]
pub struct MonthView {
    expanded: BTreeSet<MonthKey>,
}

impl MonthView {
    /// Initial state: every group expanded.
    pub fn all_expanded(groups: &[MonthGroup<'_>]) -> Self {
        Self {
            expanded: groups.iter().map(|g| g.key).collect(),
        }
    }

    pub fn is_expanded(&self, key: &MonthKey) -> bool {
        self.expanded.contains(key)
    }

    /// Flip one section; returns the new state.
    pub fn toggle(&mut self, key: MonthKey) -> bool {
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
            true
        } else {
            false
        }
    }
}
