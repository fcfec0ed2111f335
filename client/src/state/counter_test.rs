use super::*;

#[test]
fn counter_starts_at_zero() {
    assert_eq!(CounterState::default().count, 0);
    assert_eq!(CounterState::default().label(), "Count: 0");
}

#[test]
fn increment_and_decrement_step_by_one() {
    let mut counter = CounterState::default();
    counter.increment();
    counter.increment();
    assert_eq!(counter.count, 2);
    counter.decrement();
    assert_eq!(counter.count, 1);
}

#[test]
fn decrement_goes_negative() {
    let mut counter = CounterState::default();
    counter.decrement();
    assert_eq!(counter.count, -1);
    assert_eq!(counter.label(), "Count: -1");
}

#[test]
fn reset_returns_to_zero() {
    let mut counter = CounterState { count: 42 };
    counter.reset();
    assert_eq!(counter, CounterState::default());
}
