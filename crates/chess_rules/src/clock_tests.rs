use super::*;

#[test]
fn test_moves_charge_the_mover() {
    let t0 = Instant::now();
    let mut clock = GameClock::start_at(t0);

    clock.record_move_at(Color::White, t0 + Duration::from_secs(3));
    clock.record_move_at(Color::Black, t0 + Duration::from_secs(10));
    clock.record_move_at(Color::White, t0 + Duration::from_secs(11));

    assert_eq!(clock.elapsed(Color::White), Duration::from_secs(4));
    assert_eq!(clock.elapsed(Color::Black), Duration::from_secs(7));
}

#[test]
fn test_out_of_order_instant_charges_nothing() {
    let t0 = Instant::now();
    let mut clock = GameClock::start_at(t0 + Duration::from_secs(5));
    clock.record_move_at(Color::White, t0);
    assert_eq!(clock.elapsed(Color::White), Duration::ZERO);
}

#[test]
fn test_fresh_clock_is_zero() {
    let clock = GameClock::start();
    assert_eq!(clock.elapsed(Color::White), Duration::ZERO);
    assert_eq!(clock.elapsed(Color::Black), Duration::ZERO);
}

#[test]
fn test_format_time() {
    assert_eq!(GameClock::format_time(Duration::from_secs(75)), "1:15");
    assert_eq!(GameClock::format_time(Duration::from_millis(4_250)), "0:04.2");
    assert_eq!(GameClock::format_time(Duration::from_secs(3_600)), "60:00");
}
