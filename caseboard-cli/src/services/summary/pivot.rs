//! Shift × category count matrix
//!
//! A dense fixed-size grid: every one of the 14 categories and 3 shifts is
//! always present, zero-filled, so consumers never have to handle missing
//! rows or columns.

use crate::schedule::{Category, Shift};

use super::CaseWork;

/// Count matrix over all shifts and categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PivotTable {
    counts: [[u32; Category::ALL.len()]; Shift::ALL.len()],
}

impl PivotTable {
    /// Build from a classified working table
    pub fn from_cases(work: &[CaseWork]) -> Self {
        let mut pivot = PivotTable::default();
        for case in work {
            pivot.counts[case.shift.index()][case.category.index()] += 1;
        }
        pivot
    }

    /// Count for one (shift, category) cell
    pub fn count(&self, shift: Shift, category: Category) -> u32 {
        self.counts[shift.index()][category.index()]
    }

    /// Total cases in one shift row
    pub fn shift_total(&self, shift: Shift) -> u32 {
        self.counts[shift.index()].iter().sum()
    }

    /// Total cases in one category column across shifts
    pub fn category_total(&self, category: Category) -> u32 {
        Shift::ALL
            .iter()
            .map(|shift| self.count(*shift, category))
            .sum()
    }

    /// Total cases in the batch
    pub fn grand_total(&self) -> u32 {
        Shift::ALL.iter().map(|shift| self.shift_total(*shift)).sum()
    }

    /// Categories with at least one case, in canonical column order
    pub fn active_categories(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|category| self.category_total(*category) > 0)
            .collect()
    }
}
