//! Equal-split policy
//!
//! An expense is divided evenly across every current participant. The payer
//! owes nothing back to themselves; everyone else owes the payer
//! `floor(amount / N)` cents. Any rounding remainder stays with the payer's
//! own portion, so the recorded shares plus the payer's portion always add
//! up to the amount exactly.

use crate::error::{SplitError, SplitResult};
use crate::models::{Money, Participant, Split};

/// Compute the equal split of `amount` paid by `payer` among `participants`
///
/// # Errors
///
/// - `NoParticipants` when `participants` is empty
/// - `UnknownPayer` when `payer` is not one of `participants`
pub fn equal_split(amount: Money, payer: &str, participants: &[Participant]) -> SplitResult<Split> {
    let (share, _remainder) = amount
        .split_evenly(participants.len())
        .ok_or(SplitError::NoParticipants)?;

    if !participants.iter().any(|p| p.name == payer) {
        return Err(SplitError::UnknownPayer(payer.to_string()));
    }

    Ok(participants
        .iter()
        .map(|p| {
            let owed = if p.name == payer { Money::zero() } else { share };
            (p.name.clone(), owed)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(names: &[&str]) -> Vec<Participant> {
        names.iter().map(|n| Participant::new(*n)).collect()
    }

    #[test]
    fn test_even_amount() {
        let split = equal_split(Money::from_cents(3000), "A", &people(&["A", "B", "C"])).unwrap();

        assert_eq!(split["A"], Money::zero());
        assert_eq!(split["B"], Money::from_cents(1000));
        assert_eq!(split["C"], Money::from_cents(1000));
    }

    #[test]
    fn test_remainder_stays_with_payer() {
        let amount = Money::from_cents(1000);
        let split = equal_split(amount, "B", &people(&["A", "B", "C"])).unwrap();

        assert_eq!(split["A"].cents(), 333);
        assert_eq!(split["C"].cents(), 333);
        let owed: Money = split.values().sum();
        let payer_portion = amount - owed;
        assert_eq!(payer_portion.cents(), 334);
        assert_eq!(owed + payer_portion, amount);
    }

    #[test]
    fn test_single_participant_owes_nothing() {
        let split = equal_split(Money::from_cents(999), "Solo", &people(&["Solo"])).unwrap();
        assert_eq!(split.len(), 1);
        assert!(split["Solo"].is_zero());
    }

    #[test]
    fn test_empty_participants() {
        let err = equal_split(Money::from_cents(100), "A", &[]).unwrap_err();
        assert!(matches!(err, SplitError::NoParticipants));
    }

    #[test]
    fn test_unknown_payer() {
        let err = equal_split(Money::from_cents(100), "Z", &people(&["A", "B"])).unwrap_err();
        assert!(matches!(err, SplitError::UnknownPayer(name) if name == "Z"));
    }

    #[test]
    fn test_shares_within_one_cent_of_exact() {
        for cents in [1, 2, 7, 100, 1001, 99_999] {
            for n in 1..=7usize {
                let names: Vec<String> = (0..n).map(|i| format!("p{}", i)).collect();
                let participants: Vec<_> = names.iter().map(Participant::new).collect();
                let split = equal_split(Money::from_cents(cents), "p0", &participants).unwrap();

                for (name, share) in &split {
                    if name == "p0" {
                        continue;
                    }
                    let exact = cents as f64 / n as f64;
                    assert!((exact - share.cents() as f64).abs() < 1.0);
                }
            }
        }
    }
}
