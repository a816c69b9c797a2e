//! Counter state slice.
//!
//! A single signed integer mutated only through [`reduce`]. The reducer is a
//! pure function `(state, intent) -> state`; all observation goes through the
//! store, which holds the authoritative copy.

/// The counter value. Process-wide, starts at zero, reset on restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    pub value: i64,
}

/// The two mutations the counter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// Add one.
    Incremented,
    /// Add an arbitrary amount, negative and zero included.
    AmountAdded(i64),
}

/// Process an intent and return the new state.
///
/// Pure and synchronous; there are no error conditions and no bounds
/// checking.
pub fn reduce(state: CounterState, intent: CounterIntent) -> CounterState {
    match intent {
        CounterIntent::Incremented => CounterState {
            value: state.value + 1,
        },
        CounterIntent::AmountAdded(amount) => CounterState {
            value: state.value + amount,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_value_is_zero() {
        assert_eq!(CounterState::default().value, 0);
    }

    #[test]
    fn test_incremented_adds_one() {
        let state = reduce(CounterState::default(), CounterIntent::Incremented);
        assert_eq!(state.value, 1);
    }

    #[test]
    fn test_amount_added_accepts_any_integer() {
        let mut state = CounterState::default();
        state = reduce(state, CounterIntent::AmountAdded(5));
        assert_eq!(state.value, 5);

        state = reduce(state, CounterIntent::AmountAdded(0));
        assert_eq!(state.value, 5);

        state = reduce(state, CounterIntent::AmountAdded(-8));
        assert_eq!(state.value, -3);
    }

    #[test]
    fn test_final_value_is_sum_of_deltas() {
        let intents = [
            CounterIntent::Incremented,
            CounterIntent::AmountAdded(10),
            CounterIntent::Incremented,
            CounterIntent::AmountAdded(-4),
            CounterIntent::AmountAdded(0),
            CounterIntent::Incremented,
        ];

        let state = intents
            .into_iter()
            .fold(CounterState::default(), reduce);

        // 1 + 10 + 1 - 4 + 0 + 1
        assert_eq!(state.value, 9);
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let before = CounterState { value: 7 };
        let after = reduce(before, CounterIntent::Incremented);
        assert_eq!(before.value, 7);
        assert_eq!(after.value, 8);
    }
}
