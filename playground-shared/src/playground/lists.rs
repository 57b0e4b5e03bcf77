//! Keyed vs positional list operations.
//!
//! The fruit list is rendered keyed by value so reordering moves nodes; the
//! number list is rendered by index so value changes patch in place.

pub const STARTER_FRUITS: [&str; 3] = ["Apple", "Banana", "Cherry"];
pub const STARTER_NUMBERS: [i64; 3] = [100, 200, 300];

#[must_use]
pub fn starter_fruits() -> Vec<String> {
    STARTER_FRUITS.iter().map(ToString::to_string).collect()
}

pub fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

/// Append `"Fruit {n}"` where `n` is the new length.
pub fn append_fruit(fruits: &mut Vec<String>) {
    let label = format!("Fruit {}", fruits.len() + 1);
    fruits.push(label);
}

/// Fisher-Yates shuffle.
///
/// `pick(bound)` must return an index in `0..bound`; the browser build feeds it
/// from `Math.random`.
pub fn shuffle<T, F>(items: &mut [T], mut pick: F)
where
    F: FnMut(usize) -> usize,
{
    for i in (1..items.len()).rev() {
        let j = pick(i + 1).min(i);
        items.swap(i, j);
    }
}

pub fn bump_at(numbers: &mut [i64], index: usize, by: i64) {
    if let Some(value) = numbers.get_mut(index) {
        *value = value.saturating_add(by);
    }
}

/// Append `(n + 1) * 100` where `n` is the current length.
pub fn append_hundred(numbers: &mut Vec<i64>) {
    let next = i64::try_from(numbers.len() + 1).unwrap_or(i64::MAX / 100) * 100;
    numbers.push(next);
}

pub fn double_all(numbers: &mut [i64]) {
    for value in numbers.iter_mut() {
        *value = value.saturating_mul(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_ignores_out_of_range() {
        let mut fruits = starter_fruits();
        remove_at(&mut fruits, 1);
        assert_eq!(fruits, vec!["Apple", "Cherry"]);
        remove_at(&mut fruits, 10);
        assert_eq!(fruits.len(), 2);
    }

    #[test]
    fn appended_fruit_is_numbered_by_length() {
        let mut fruits = starter_fruits();
        append_fruit(&mut fruits);
        assert_eq!(fruits.last().map(String::as_str), Some("Fruit 4"));
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut fruits = starter_fruits();
        append_fruit(&mut fruits);
        let mut seed = 7_usize;
        shuffle(&mut fruits, |bound| {
            seed = seed.wrapping_mul(31).wrapping_add(11);
            seed % bound
        });

        let mut sorted = fruits.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["Apple", "Banana", "Cherry", "Fruit 4"]);
    }

    #[test]
    fn shuffle_with_zero_picks_rotates() {
        let mut items = vec![1, 2, 3];
        shuffle(&mut items, |_| 0);
        assert_eq!(items, vec![2, 3, 1]);
    }

    #[test]
    fn shuffle_clamps_bad_picks() {
        let mut items = vec![1, 2, 3];
        shuffle(&mut items, |_| usize::MAX);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn positional_updates() {
        let mut numbers = STARTER_NUMBERS.to_vec();
        bump_at(&mut numbers, 1, 10);
        assert_eq!(numbers, vec![100, 210, 300]);

        append_hundred(&mut numbers);
        assert_eq!(numbers, vec![100, 210, 300, 400]);

        double_all(&mut numbers);
        assert_eq!(numbers, vec![200, 420, 600, 800]);

        bump_at(&mut numbers, 99, 10);
        assert_eq!(numbers.len(), 4);
    }

    #[test]
    fn repeated_doubling_saturates() {
        let mut numbers = STARTER_NUMBERS.to_vec();
        for _ in 0..64 {
            double_all(&mut numbers);
        }
        assert!(numbers.iter().all(|value| *value == i64::MAX));
    }

    #[test]
    fn bump_near_the_limit_saturates() {
        let mut numbers = vec![i64::MAX - 5, i64::MIN + 5];
        bump_at(&mut numbers, 0, 10);
        bump_at(&mut numbers, 1, -10);
        assert_eq!(numbers, vec![i64::MAX, i64::MIN]);
    }
}
