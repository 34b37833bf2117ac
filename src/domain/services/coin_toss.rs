use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::entities::TeamSide;

/// Fair coin toss for first choice of ball or side
pub fn flip() -> TeamSide {
    flip_seeded(None)
}

/// Coin toss with an optional seed, for reproducible results
pub fn flip_seeded(seed: Option<u64>) -> TeamSide {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    flip_with(&mut rng)
}

pub fn flip_with<R: Rng + ?Sized>(rng: &mut R) -> TeamSide {
    if rng.gen_bool(0.5) {
        TeamSide::Team1
    } else {
        TeamSide::Team2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_flip_is_reproducible() {
        assert_eq!(flip_seeded(Some(7)), flip_seeded(Some(7)));
    }

    #[test]
    fn test_outcomes_are_even() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let trials = 10_000;
        let team1 = (0..trials)
            .filter(|_| flip_with(&mut rng) == TeamSide::Team1)
            .count();

        // 5 standard deviations either side of 5000
        assert!((4750..=5250).contains(&team1), "team1 won {team1} of {trials}");
    }

    #[test]
    fn test_unseeded_flip_produces_both_sides() {
        let mut seen_team1 = false;
        let mut seen_team2 = false;
        for _ in 0..200 {
            match flip() {
                TeamSide::Team1 => seen_team1 = true,
                TeamSide::Team2 => seen_team2 = true,
            }
        }
        assert!(seen_team1 && seen_team2);
    }
}
