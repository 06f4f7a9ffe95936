//! The filter model the presentation layer hands to the engine on every
//! interaction. `FilterOptions` values are replaced wholesale, never patched.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{CampaignId, Objective, Platform};

/// Inclusive calendar-date window; either bound may be open.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Both bounds absent: the range restricts nothing.
    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Containment test for point dates (daily series entries).
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }

    /// Overlap test for `[start, end]` intervals (campaign flights). A
    /// campaign partially inside the window passes.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if end < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if start > to {
                return false;
            }
        }
        true
    }
}

/// Three-state selection. The UI's "all" choice is carried explicitly rather
/// than inferred from set cardinality, so it stays correct when the universe
/// of selectable values changes size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T: Ord> {
    All,
    Specific(BTreeSet<T>),
    None,
}

impl<T: Ord> Selection<T> {
    pub fn specific(items: impl IntoIterator<Item = T>) -> Self {
        Selection::Specific(items.into_iter().collect())
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Specific(set) => set.contains(value),
            Selection::None => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

/// The query the UI applies. Defaults select everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterOptions {
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub platforms: Selection<Platform>,
    #[serde(default)]
    pub campaigns: Selection<CampaignId>,
    #[serde(default)]
    pub objectives: Selection<Objective>,
}

impl FilterOptions {
    /// A filter that matches every campaign and restricts no dates.
    pub fn select_all() -> Self {
        Self::default()
    }
}
