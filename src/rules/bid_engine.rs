//! Bid validation and the legal bid space.
//!
//! A raise must not lower either the face or the count, and must increase
//! at least one of them. The first bid of a round is always legal.

use std::ops::RangeInclusive;

use crate::core::{Bid, MAX_FACE};
use crate::error::{GameError, Result};

/// Check whether `candidate` may follow `current`.
///
/// ```
/// use liars_dice::core::Bid;
/// use liars_dice::rules::is_valid_raise;
///
/// let current = Bid::new(3, 2).unwrap();
/// assert!(is_valid_raise(Some(current), Bid::new(3, 3).unwrap()));
/// assert!(is_valid_raise(Some(current), Bid::new(4, 2).unwrap()));
/// assert!(!is_valid_raise(Some(current), current));
/// assert!(!is_valid_raise(Some(current), Bid::new(2, 5).unwrap()));
/// ```
#[must_use]
pub fn is_valid_raise(current: Option<Bid>, candidate: Bid) -> bool {
    let Some(current) = current else {
        return true;
    };

    let df = i64::from(candidate.face()) - i64::from(current.face());
    let dc = i64::from(candidate.count()) - i64::from(current.count());

    df >= 0 && dc >= 0 && df + dc >= 1
}

/// Like `is_valid_raise`, but reports the rejection as `InvalidBid`.
pub fn validate_bid(current: Option<Bid>, candidate: Bid) -> Result<()> {
    if is_valid_raise(current, candidate) {
        Ok(())
    } else {
        Err(GameError::InvalidBid { candidate, current })
    }
}

/// Faces a bidder may choose: from the current face (or 1) up to 6.
#[must_use]
pub fn face_choices(current: Option<Bid>) -> RangeInclusive<u8> {
    current.map_or(1, Bid::face)..=MAX_FACE
}

/// Counts a bidder may choose: from the current count (or 1) up to `max_count`.
///
/// Empty when `max_count` is below the lower end.
#[must_use]
pub fn count_choices(current: Option<Bid>, max_count: u32) -> RangeInclusive<u32> {
    current.map_or(1, Bid::count)..=max_count
}

/// Every legal bid whose count does not exceed `total_dice`.
///
/// Ordered by face, then count.
#[must_use]
pub fn legal_bids(current: Option<Bid>, total_dice: u32) -> Vec<Bid> {
    face_choices(current)
        .flat_map(|face| {
            count_choices(current, total_dice).filter_map(move |count| Bid::new(face, count).ok())
        })
        .filter(|&bid| is_valid_raise(current, bid))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(face: u8, count: u32) -> Bid {
        Bid::new(face, count).unwrap()
    }

    #[test]
    fn test_first_bid_always_valid() {
        assert!(is_valid_raise(None, Bid::INITIAL));
        assert!(is_valid_raise(None, bid(6, 30)));
    }

    #[test]
    fn test_raise_rules() {
        let current = Some(bid(3, 2));

        assert!(!is_valid_raise(current, bid(3, 2)), "equal bid");
        assert!(is_valid_raise(current, bid(3, 3)), "count only");
        assert!(is_valid_raise(current, bid(4, 2)), "face only");
        assert!(is_valid_raise(current, bid(6, 9)), "both");
        assert!(!is_valid_raise(current, bid(2, 5)), "face regressed");
        assert!(!is_valid_raise(current, bid(6, 1)), "count regressed");
    }

    #[test]
    fn test_validate_bid_error() {
        let current = Some(bid(3, 2));
        let err = validate_bid(current, bid(3, 2)).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidBid {
                candidate: bid(3, 2),
                current,
            }
        );
    }

    #[test]
    fn test_face_choices() {
        assert_eq!(face_choices(None).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(face_choices(Some(bid(4, 1))).collect::<Vec<_>>(), vec![4, 5, 6]);
    }

    #[test]
    fn test_count_choices() {
        assert_eq!(count_choices(None, 3).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(count_choices(Some(bid(1, 4)), 6).collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_eq!(count_choices(Some(bid(1, 4)), 2).count(), 0);
    }

    #[test]
    fn test_legal_bids_excludes_current() {
        let current = Some(bid(5, 2));
        let bids = legal_bids(current, 3);

        // faces 5-6, counts 2-3, minus the current bid itself
        assert_eq!(bids, vec![bid(5, 3), bid(6, 2), bid(6, 3)]);
        assert!(bids.iter().all(|&b| is_valid_raise(current, b)));
    }

    #[test]
    fn test_legal_bids_opening() {
        let bids = legal_bids(None, 2);
        assert_eq!(bids.len(), 12);
        assert_eq!(bids.first(), Some(&Bid::INITIAL));
    }
}
