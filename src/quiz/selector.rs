use rand::Rng;

use crate::models::Category;

/// Share of rounds drawn from the politics collection.
pub const POLITICS_PROBABILITY: f64 = 0.75;

/// Bernoulli draw between the two collections.
pub fn choose_category<R: Rng + ?Sized>(rng: &mut R) -> Category {
    if rng.gen_range(0.0..1.0) < POLITICS_PROBABILITY {
        Category::Politics
    } else {
        Category::PopCulture
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_politics_fraction() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 10_000;
        let politics = (0..trials)
            .filter(|_| choose_category(&mut rng) == Category::Politics)
            .count();

        let fraction = politics as f64 / trials as f64;
        assert!(
            (fraction - POLITICS_PROBABILITY).abs() < 0.03,
            "politics fraction was {}",
            fraction
        );
    }

    #[test]
    fn test_both_categories_drawn() {
        let mut rng = StdRng::seed_from_u64(1);
        let draws: Vec<_> = (0..200).map(|_| choose_category(&mut rng)).collect();
        assert!(draws.contains(&Category::Politics));
        assert!(draws.contains(&Category::PopCulture));
    }
}
