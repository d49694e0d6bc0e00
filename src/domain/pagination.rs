//! Pagination window calculator.
//!
//! Given the current page, the total page count and a slot budget, decides
//! which page markers a truncated pagination strip shows. The result is a
//! flat [`PaginationToken`] sequence; turning it into markup is the job of
//! [`crate::render::archive_nav`].
//!
//! ## Layout modes
//!
//! ```text
//! Short   ‹ 1 2 3 4 5 ›
//! Start   ‹ 1 2 3 4 5 6 … 100 ›
//! Middle  ‹ 1 … 49 50 51 … 100 ›
//! End     ‹ 1 … 93 94 95 96 97 98 99 100 ›
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Smallest slot budget the calculator works with. Lower values are raised
/// to this floor.
pub const MIN_SLOTS: u64 = 9;

/// Largest slot budget the calculator works with. Higher values are lowered
/// to this ceiling, which bounds the token count for any request.
pub const MAX_SLOTS: u64 = 1_000;

/// Errors raised while building a [`PaginationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// The total page count was below 1.
    #[error("invalid argument: total pages must be at least 1, got {total_pages}")]
    InvalidArgument {
        /// The rejected total page count.
        total_pages: i64,
    },
}

/// Which of the four layouts a request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    /// Every page fits in the budget.
    Short,
    /// Current page is near the beginning.
    Start,
    /// Current page is away from both ends.
    Middle,
    /// Current page is near the end.
    End,
}

impl fmt::Display for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Short => "short",
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

/// One marker in a pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaginationToken {
    /// Link to the previous page.
    ArrowPrev {
        /// `false` when already on the first page.
        enabled: bool,
    },
    /// A numbered page link.
    Page {
        /// One-based page number.
        number: u64,
        /// Whether this is the page being viewed.
        current: bool,
    },
    /// A gap of hidden pages.
    Ellipsis,
    /// Link to the next page.
    ArrowNext {
        /// `false` when already on the last page.
        enabled: bool,
    },
}

/// Validated calculator input.
///
/// Construct through [`PaginationRequest::new`], which applies the
/// normalizations: a non-positive current page means "unset", and the slot
/// budget is clamped to [`MIN_SLOTS`]..=[`MAX_SLOTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationRequest {
    current_page: Option<u64>,
    total_pages: u64,
    slots: u64,
}

impl PaginationRequest {
    /// Builds a request from raw caller values.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidArgument`] when `total_pages < 1`.
    pub fn new(
        current_page: i64,
        total_pages: i64,
        max_slots: i64,
    ) -> Result<Self, PaginationError> {
        let total = u64::try_from(total_pages)
            .ok()
            .filter(|total| *total >= 1)
            .ok_or(PaginationError::InvalidArgument { total_pages })?;
        let current_page = u64::try_from(current_page).ok().filter(|page| *page >= 1);
        let slots =
            u64::try_from(max_slots).map_or(MIN_SLOTS, |slots| slots.clamp(MIN_SLOTS, MAX_SLOTS));

        Ok(Self {
            current_page,
            total_pages: total,
            slots,
        })
    }

    /// The current page, or `None` when the caller left it unset.
    #[must_use]
    pub const fn current_page(&self) -> Option<u64> {
        self.current_page
    }

    /// Total number of pages (always at least 1).
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Slot budget after clamping.
    #[must_use]
    pub const fn effective_slots(&self) -> u64 {
        self.slots
    }

    /// Half the slot budget, rounded half up.
    #[must_use]
    pub const fn half(&self) -> u64 {
        self.slots.div_ceil(2)
    }

    /// The page treated as current: an unset page counts as page 1.
    #[must_use]
    pub fn effective_page(&self) -> u64 {
        self.current_page.unwrap_or(1)
    }

    /// Selects the layout. Conditions are checked in order, so the four
    /// modes never overlap.
    #[must_use]
    pub fn mode(&self) -> PaginationMode {
        let page = self.effective_page();
        if self.total_pages <= self.slots {
            PaginationMode::Short
        } else if page >= self.total_pages.saturating_sub(self.half()) {
            PaginationMode::End
        } else if page < self.half() {
            PaginationMode::Start
        } else {
            PaginationMode::Middle
        }
    }

    /// Computes the token sequence for this request.
    #[must_use]
    pub fn compute(&self) -> PaginationResult {
        let page = self.effective_page();
        let total = self.total_pages;
        let slots = self.slots;
        let mode = self.mode();

        // arrows, at most two ellipses, and at most `slots` page links
        let capacity = total.min(slots) + 4;
        let mut tokens = Vec::with_capacity(usize::try_from(capacity).unwrap_or(0));
        tokens.push(PaginationToken::ArrowPrev { enabled: page > 1 });

        let page_token = move |number: u64| PaginationToken::Page {
            number,
            current: number == page,
        };

        match mode {
            PaginationMode::Short => {
                tokens.extend((1..=total).map(page_token));
            }
            PaginationMode::End => {
                tokens.push(page_token(1));
                tokens.push(PaginationToken::Ellipsis);
                tokens.extend((total - (slots - 2)..=total).map(page_token));
            }
            PaginationMode::Start => {
                tokens.extend((1..slots - 2).map(page_token));
                tokens.push(PaginationToken::Ellipsis);
                tokens.push(page_token(total));
            }
            PaginationMode::Middle => {
                let reach = (slots - 6) / 2;
                let mut start = page - reach;
                if slots % 2 == 0 {
                    start += 1;
                }
                let end = page + reach;

                tokens.push(page_token(1));
                tokens.push(PaginationToken::Ellipsis);
                tokens.extend((start..=end).map(page_token));
                tokens.push(PaginationToken::Ellipsis);
                tokens.push(page_token(total));
            }
        }

        tokens.push(PaginationToken::ArrowNext {
            enabled: page != total,
        });

        PaginationResult {
            mode,
            page,
            total_pages: total,
            tokens,
        }
    }
}

/// Output of the calculator: the chosen mode and the ordered tokens.
///
/// The first token is always [`PaginationToken::ArrowPrev`] and the last is
/// always [`PaginationToken::ArrowNext`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PaginationResult {
    mode: PaginationMode,
    page: u64,
    total_pages: u64,
    tokens: Vec<PaginationToken>,
}

impl PaginationResult {
    /// Layout the request resolved to.
    #[must_use]
    pub const fn mode(&self) -> PaginationMode {
        self.mode
    }

    /// The page the strip was computed for (1 when unset).
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// The ordered tokens.
    #[must_use]
    pub fn tokens(&self) -> &[PaginationToken] {
        &self.tokens
    }

    /// Consumes the result, returning the tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<PaginationToken> {
        self.tokens
    }

    /// Page numbers in display order, skipping arrows and ellipses.
    pub fn page_numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.tokens.iter().filter_map(|token| match token {
            PaginationToken::Page { number, .. } => Some(*number),
            _ => None,
        })
    }

    /// The page flagged as current, if it is visible.
    #[must_use]
    pub fn current(&self) -> Option<u64> {
        self.tokens.iter().find_map(|token| match token {
            PaginationToken::Page {
                number,
                current: true,
            } => Some(*number),
            _ => None,
        })
    }
}

/// Convenience wrapper: validate the raw values and compute in one step.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidArgument`] when `total_pages < 1`.
pub fn compute(
    current_page: i64,
    total_pages: i64,
    max_slots: i64,
) -> Result<PaginationResult, PaginationError> {
    Ok(PaginationRequest::new(current_page, total_pages, max_slots)?.compute())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    use super::PaginationToken::{ArrowNext, ArrowPrev, Ellipsis};

    fn page(number: u64) -> PaginationToken {
        PaginationToken::Page {
            number,
            current: false,
        }
    }

    fn current(number: u64) -> PaginationToken {
        PaginationToken::Page {
            number,
            current: true,
        }
    }

    fn run(current_page: i64, total_pages: i64, max_slots: i64) -> PaginationResult {
        let Ok(result) = compute(current_page, total_pages, max_slots) else {
            panic!("valid request rejected: {current_page}/{total_pages}/{max_slots}");
        };
        result
    }

    fn mode_of(current_page: i64, total_pages: i64, max_slots: i64) -> PaginationMode {
        let Ok(request) = PaginationRequest::new(current_page, total_pages, max_slots) else {
            panic!("valid request rejected");
        };
        request.mode()
    }

    #[test]
    fn single_page_has_disabled_arrows() {
        let result = run(1, 1, 9);
        assert_eq!(result.mode(), PaginationMode::Short);
        assert_eq!(
            result.tokens(),
            &[
                ArrowPrev { enabled: false },
                current(1),
                ArrowNext { enabled: false }
            ]
        );
    }

    #[test]
    fn single_page_with_unset_current() {
        let result = run(0, 1, 9);
        assert_eq!(
            result.tokens(),
            &[
                ArrowPrev { enabled: false },
                current(1),
                ArrowNext { enabled: false }
            ]
        );
    }

    #[test]
    fn short_mode_lists_every_page() {
        let result = run(3, 5, 9);
        assert_eq!(result.mode(), PaginationMode::Short);
        assert_eq!(
            result.tokens(),
            &[
                ArrowPrev { enabled: true },
                page(1),
                page(2),
                current(3),
                page(4),
                page(5),
                ArrowNext { enabled: true }
            ]
        );
        assert!(!result.tokens().contains(&Ellipsis));
    }

    #[test]
    fn short_mode_at_exact_budget() {
        let result = run(1, 9, 9);
        assert_eq!(result.mode(), PaginationMode::Short);
        assert_eq!(result.page_numbers().collect::<Vec<_>>(), (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn start_mode_first_page() {
        let result = run(1, 100, 9);
        assert_eq!(result.mode(), PaginationMode::Start);
        assert_eq!(
            result.tokens(),
            &[
                ArrowPrev { enabled: false },
                current(1),
                page(2),
                page(3),
                page(4),
                page(5),
                page(6),
                Ellipsis,
                page(100),
                ArrowNext { enabled: true }
            ]
        );
    }

    #[test]
    fn end_mode_last_page() {
        let result = run(100, 100, 9);
        assert_eq!(result.mode(), PaginationMode::End);
        let mut expected = vec![ArrowPrev { enabled: true }, page(1), Ellipsis];
        expected.extend((93..100).map(page));
        expected.push(current(100));
        expected.push(ArrowNext { enabled: false });
        assert_eq!(result.tokens(), expected.as_slice());
    }

    #[test]
    fn middle_mode_odd_budget() {
        let result = run(50, 100, 9);
        assert_eq!(result.mode(), PaginationMode::Middle);
        assert_eq!(
            result.tokens(),
            &[
                ArrowPrev { enabled: true },
                page(1),
                Ellipsis,
                page(49),
                current(50),
                page(51),
                Ellipsis,
                page(100),
                ArrowNext { enabled: true }
            ]
        );
    }

    #[test]
    fn middle_mode_even_budget_shifts_start() {
        let result = run(50, 100, 10);
        assert_eq!(result.mode(), PaginationMode::Middle);
        assert_eq!(
            result.page_numbers().collect::<Vec<_>>(),
            vec![1, 49, 50, 51, 52, 100]
        );
    }

    #[test]
    fn middle_mode_default_theme_budget() {
        let result = run(40, 80, 15);
        assert_eq!(result.mode(), PaginationMode::Middle);
        assert_eq!(
            result.page_numbers().collect::<Vec<_>>(),
            vec![1, 36, 37, 38, 39, 40, 41, 42, 43, 44, 80]
        );
    }

    #[test]
    fn boundary_at_half_is_middle() {
        // slots 9 => half 5
        assert_eq!(mode_of(4, 100, 9), PaginationMode::Start);
        assert_eq!(mode_of(5, 100, 9), PaginationMode::Middle);
    }

    #[test]
    fn boundary_at_total_minus_half_is_end() {
        assert_eq!(mode_of(94, 100, 9), PaginationMode::Middle);
        assert_eq!(mode_of(95, 100, 9), PaginationMode::End);
    }

    #[test]
    fn boundary_one_past_budget() {
        // total 10, slots 9, half 5: End from page 5, Start below it
        assert_eq!(mode_of(4, 10, 9), PaginationMode::Start);
        assert_eq!(mode_of(5, 10, 9), PaginationMode::End);
        assert_eq!(mode_of(9, 9, 9), PaginationMode::Short);
    }

    #[test]
    fn slots_below_floor_are_clamped() {
        assert_eq!(run(1, 100, 3), run(1, 100, 9));
        assert_eq!(run(1, 100, -4), run(1, 100, 9));
        let Ok(request) = PaginationRequest::new(1, 100, 2) else {
            panic!("valid request rejected");
        };
        assert_eq!(request.effective_slots(), MIN_SLOTS);
        assert_eq!(request.half(), 5);
    }

    #[test]
    fn slots_above_ceiling_are_clamped() {
        let Ok(request) = PaginationRequest::new(1, 100, i64::MAX) else {
            panic!("valid request rejected");
        };
        assert_eq!(request.effective_slots(), MAX_SLOTS);

        let result = run(1, 100, i64::MAX);
        assert_eq!(result.mode(), PaginationMode::Short);
        assert_eq!(result.tokens().len(), 102);
    }

    #[test]
    fn huge_totals_stay_within_the_slot_budget() {
        let huge = 1_000_000_000_000_i64;
        for (cur, slots) in [(1, huge), (huge / 2, huge), (huge, i64::MAX), (huge, 9)] {
            let result = run(cur, huge, slots);
            assert_ne!(result.mode(), PaginationMode::Short);
            let limit = usize::try_from(MAX_SLOTS).unwrap_or(0) + 4;
            assert!(result.tokens().len() <= limit, "cur={cur} slots={slots}");
            assert_eq!(result.page_numbers().last(), Some(1_000_000_000_000));
        }

        let result = run(i64::MAX, i64::MAX, i64::MAX);
        assert_eq!(result.mode(), PaginationMode::End);
        assert_eq!(result.current(), u64::try_from(i64::MAX).ok());
    }

    #[test]
    fn negative_current_is_unset() {
        let Ok(request) = PaginationRequest::new(-3, 20, 9) else {
            panic!("valid request rejected");
        };
        assert_eq!(request.current_page(), None);
        assert_eq!(run(-3, 20, 9), run(0, 20, 9));
        assert_eq!(run(0, 20, 9).current(), Some(1));
    }

    #[test]
    fn zero_or_negative_total_is_rejected() {
        assert_eq!(
            compute(1, 0, 9),
            Err(PaginationError::InvalidArgument { total_pages: 0 })
        );
        assert_eq!(
            compute(1, -7, 9),
            Err(PaginationError::InvalidArgument { total_pages: -7 })
        );
    }

    #[test]
    fn compute_is_deterministic() {
        for (cur, total, slots) in [(1, 1, 9), (7, 30, 11), (50, 100, 9), (99, 100, 12)] {
            assert_eq!(run(cur, total, slots), run(cur, total, slots));
        }
    }

    #[test]
    fn arrows_follow_current_page() {
        for total in 1..=30_i64 {
            for cur in 0..=total {
                let result = run(cur, total, 9);
                let tokens = result.tokens();
                let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
                    panic!("empty token list");
                };
                assert_eq!(*first, ArrowPrev { enabled: cur > 1 });
                let on_last = cur == total || (cur == 0 && total == 1);
                assert_eq!(*last, ArrowNext { enabled: !on_last });
            }
        }
    }

    #[test]
    fn every_layout_shows_first_last_and_current() {
        for slots in 9..=14_i64 {
            for total in 1..=45_i64 {
                for cur in 0..=total {
                    let result = run(cur, total, slots);
                    let pages: Vec<u64> = result.page_numbers().collect();
                    let effective = u64::try_from(cur.max(1)).unwrap_or(1);

                    assert_eq!(pages.first(), Some(&1));
                    assert_eq!(pages.last(), Some(&u64::try_from(total).unwrap_or(0)));
                    assert!(pages.windows(2).all(|w| matches!(w, [a, b] if a < b)));
                    assert_eq!(result.current(), Some(effective));
                    let flagged = result
                        .tokens()
                        .iter()
                        .filter(|t| matches!(t, PaginationToken::Page { current: true, .. }))
                        .count();
                    assert_eq!(flagged, 1);
                }
            }
        }
    }

    #[test]
    fn modes_partition_the_input_space() {
        for slots in 9..=14_i64 {
            for total in 1..=45_i64 {
                let Ok(probe) = PaginationRequest::new(1, total, slots) else {
                    panic!("valid request rejected");
                };
                let half = i64::try_from(probe.half()).unwrap_or(0);
                for cur in 0..=total {
                    let page = cur.max(1);
                    let expected = [
                        (total <= slots, PaginationMode::Short),
                        (total > slots && page >= total - half, PaginationMode::End),
                        (total > slots && page < total - half && page < half, PaginationMode::Start),
                        (
                            total > slots && page < total - half && page >= half,
                            PaginationMode::Middle,
                        ),
                    ];
                    let matching: Vec<_> = expected.iter().filter(|(hit, _)| *hit).collect();
                    assert_eq!(matching.len(), 1, "cur={cur} total={total} slots={slots}");
                    let Some((_, mode)) = matching.first() else {
                        panic!("no mode matched");
                    };
                    assert_eq!(mode_of(cur, total, slots), *mode);
                }
            }
        }
    }

    #[test]
    fn ellipsis_never_adjacent_to_arrow() {
        for total in 10..=60_i64 {
            for cur in 1..=total {
                let result = run(cur, total, 11);
                let tokens = result.tokens();
                assert_ne!(tokens.get(1), Some(&Ellipsis));
                assert_ne!(tokens.get(tokens.len().saturating_sub(2)), Some(&Ellipsis));
            }
        }
    }

    #[test]
    fn current_beyond_total_resolves_to_end_without_highlight() {
        let result = run(150, 100, 9);
        assert_eq!(result.mode(), PaginationMode::End);
        assert_eq!(result.current(), None);
        assert_eq!(
            result.tokens().last(),
            Some(&ArrowNext { enabled: true })
        );
    }

    #[test]
    fn tokens_serialize_with_kind_tag() {
        let result = run(1, 1, 9);
        let Ok(json) = serde_json::to_value(result.tokens()) else {
            panic!("serialization failed");
        };
        assert_eq!(
            json,
            serde_json::json!([
                { "kind": "arrow_prev", "enabled": false },
                { "kind": "page", "number": 1, "current": true },
                { "kind": "arrow_next", "enabled": false }
            ])
        );
    }
}
