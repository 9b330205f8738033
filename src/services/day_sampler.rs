use chrono::Weekday;
use rand::Rng;

use crate::domain::week::{DAYS_PER_WEEK, WORKWEEK};

/// Picks `days_in_office` distinct weekdays uniformly at random, so that every
/// possible subset of that size is equally likely.
///
/// Uses a Fisher-Yates shuffle of the workweek and keeps the leading
/// positions; this never enumerates the subsets themselves.
pub(crate) fn sample_office_days<R: Rng + ?Sized>(days_in_office: u8, rng: &mut R) -> Vec<Weekday> {
    let wanted = days_in_office as usize;
    if wanted == 0 {
        return Vec::new();
    }
    if wanted >= DAYS_PER_WEEK {
        return WORKWEEK.to_vec();
    }

    let mut days = WORKWEEK;
    for end in (1..days.len()).rev() {
        let pick = rng.gen_range(0..=end);
        days.swap(end, pick);
    }
    days[..wanted].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::week::day_index;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_days_yields_the_empty_set() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_office_days(0, &mut rng).is_empty());
    }

    #[test]
    fn five_days_yields_the_whole_workweek() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_office_days(5, &mut rng), WORKWEEK.to_vec());
    }

    #[test]
    fn sampled_days_are_distinct_and_of_the_requested_size() {
        let mut rng = StdRng::seed_from_u64(42);
        for wanted in 1..5u8 {
            for _ in 0..200 {
                let days = sample_office_days(wanted, &mut rng);
                assert_eq!(days.len(), wanted as usize);

                let mut seen = [false; DAYS_PER_WEEK];
                for day in days {
                    let index = day_index(day);
                    assert!(!seen[index], "day sampled twice");
                    seen[index] = true;
                }
            }
        }
    }

    #[test]
    fn each_weekday_appears_with_roughly_equal_frequency() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = 5000;
        let mut counts = [0u32; DAYS_PER_WEEK];

        for _ in 0..samples {
            for day in sample_office_days(2, &mut rng) {
                counts[day_index(day)] += 1;
            }
        }

        // Expected 2000 picks per day; a seeded run stays well inside +-10%.
        for count in counts {
            assert!(
                (1800..=2200).contains(&count),
                "day frequency {count} outside expected band"
            );
        }
    }
}
