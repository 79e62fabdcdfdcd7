//! Schema partitioning into pages.
//!
//! The partition is a pure function of the schema: no randomness, no
//! dependency on response state, stable across re-invocation.

use debrief_types::{Question, SectionGroup};

/// One page: a contiguous run of sections shown together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyPage {
    sections: Vec<SectionGroup>,
}

impl SurveyPage {
    fn new(sections: Vec<SectionGroup>) -> Self {
        Self { sections }
    }

    /// Get the sections on this page, in schema order.
    pub fn sections(&self) -> &[SectionGroup] {
        &self.sections
    }

    /// Iterate over every question on this page.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|s| s.questions().iter())
    }

    /// Check if a section with the given key is on this page.
    pub fn contains_section(&self, key: &str) -> bool {
        self.sections.iter().any(|s| s.key() == key)
    }
}

/// The ordered set of pages derived from a schema.
///
/// Invariants: every schema section appears on exactly one page, exactly
/// once; flattening the pages reproduces the schema's section order as
/// rearranged by the partition rule below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageModel {
    pages: Vec<SurveyPage>,
}

impl PageModel {
    /// Partition the sections into pages:
    ///
    /// 1. `message_strength`, when present, is page 0 alone.
    /// 2. The remaining non-reserved sections split into two contiguous
    ///    halves (first half `ceil(n/2)`); each non-empty half is a page.
    /// 3. When any attitude section or `final_guess` exists, one trailing
    ///    page holds the attitude sections in schema order followed by
    ///    `final_guess`.
    pub fn partition(sections: &[SectionGroup]) -> Self {
        let message_strength = sections.iter().find(|s| s.is_message_strength());
        let final_guess = sections.iter().find(|s| s.is_final_guess());
        let attitude: Vec<&SectionGroup> = sections.iter().filter(|s| s.is_attitude()).collect();
        let other: Vec<&SectionGroup> = sections
            .iter()
            .filter(|s| !s.is_message_strength() && !s.is_final_guess() && !s.is_attitude())
            .collect();

        let mut pages = Vec::new();
        if let Some(section) = message_strength {
            pages.push(SurveyPage::new(vec![section.clone()]));
        }

        let first_half = other.len().div_ceil(2);
        for half in [&other[..first_half], &other[first_half..]] {
            if !half.is_empty() {
                pages.push(SurveyPage::new(
                    half.iter().map(|s| (*s).clone()).collect(),
                ));
            }
        }

        if !attitude.is_empty() || final_guess.is_some() {
            let mut trailing: Vec<SectionGroup> =
                attitude.into_iter().cloned().collect();
            if let Some(section) = final_guess {
                trailing.push(section.clone());
            }
            pages.push(SurveyPage::new(trailing));
        }

        Self { pages }
    }

    /// Get the pages in order.
    pub fn pages(&self) -> &[SurveyPage] {
        &self.pages
    }

    /// Get one page by index.
    pub fn page(&self, index: usize) -> Option<&SurveyPage> {
        self.pages.get(index)
    }

    /// Get the number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if there are no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over every question across all pages.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.pages.iter().flat_map(SurveyPage::questions)
    }

    /// Clamp a requested page index into range.
    ///
    /// Out-of-range navigation requests route to the nearest valid page
    /// instead of erroring: below zero lands on the first page, at or
    /// beyond the count lands on the last.
    pub fn clamp_index(&self, requested: i64) -> usize {
        if self.pages.is_empty() || requested < 0 {
            return 0;
        }
        usize::try_from(requested)
            .unwrap_or(usize::MAX)
            .min(self.pages.len() - 1)
    }
}
