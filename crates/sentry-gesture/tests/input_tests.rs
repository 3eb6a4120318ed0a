use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll};

use futures_test::task::new_count_waker;
use sentry_gesture::{
    serve_press, ButtonIrq, Debouncer, EventFlags, GestureHandler, Outcome, BUTTON_PRESSED,
    DEBOUNCE_MS,
};

const OTHER: u32 = 1 << 4;

// ---------------------------------------------------------------------------
// Debounce
// ---------------------------------------------------------------------------

#[test]
fn chatter_within_window_is_dropped() {
    let flags = EventFlags::new();
    let irq = ButtonIrq::new(&flags);

    let mut signalled = Vec::new();
    for t in [0, 50, 150, 250] {
        if irq.on_rising_edge(t) {
            signalled.push(t);
            assert_eq!(flags.get() & BUTTON_PRESSED, BUTTON_PRESSED);
            flags.clear(BUTTON_PRESSED);
        }
    }
    assert_eq!(signalled, [0, 250]);
}

#[test]
fn rejected_edge_only_reports_false() {
    let flags = EventFlags::new();
    let irq = ButtonIrq::new(&flags);

    assert!(irq.on_rising_edge(1_000));
    flags.clear(BUTTON_PRESSED);

    assert!(!irq.on_rising_edge(1_100));
    assert_eq!(flags.get(), 0);
    assert_eq!(irq.debouncer().last_accepted(), Some(1_000));
}

#[test]
fn accepted_edges_are_at_least_one_window_apart() {
    let debouncer = Debouncer::new(DEBOUNCE_MS);
    let mut t = 0u64;
    let mut accepted = Vec::new();
    // Irregular edge spacing from 1 to 97 ms.
    for i in 0..500u64 {
        t += 1 + (i * 37) % 97;
        if debouncer.accept(t) {
            accepted.push(t);
        }
    }
    assert!(accepted.len() > 1);
    for pair in accepted.windows(2) {
        assert!(pair[1] - pair[0] >= DEBOUNCE_MS, "{:?}", pair);
    }
    assert_eq!(debouncer.last_accepted(), accepted.last().copied());
}

#[test]
fn edge_exactly_one_window_later_passes() {
    let debouncer = Debouncer::new(200);
    assert_eq!(debouncer.last_accepted(), None);
    assert!(debouncer.accept(1_000));
    assert!(!debouncer.accept(1_199));
    assert!(debouncer.accept(1_200));
}

// ---------------------------------------------------------------------------
// Event flags
// ---------------------------------------------------------------------------

#[futures_test::test]
async fn wait_any_returns_and_clears_hit_bits() {
    let flags = EventFlags::new();
    flags.set(BUTTON_PRESSED | OTHER);

    assert_eq!(flags.wait_any(BUTTON_PRESSED).await, BUTTON_PRESSED);
    assert_eq!(flags.get(), OTHER);
}

#[test]
fn wait_any_parks_until_set() {
    let flags = EventFlags::new();
    let (waker, count) = new_count_waker();
    let mut cx = Context::from_waker(&waker);

    let mut fut = pin!(flags.wait_any(BUTTON_PRESSED));
    assert_eq!(fut.as_mut().poll(&mut cx), Poll::Pending);

    flags.set(OTHER);
    assert_eq!(fut.as_mut().poll(&mut cx), Poll::Pending);

    flags.set(BUTTON_PRESSED);
    assert!(count.get() >= 2);
    assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(BUTTON_PRESSED));
    assert_eq!(flags.get(), OTHER);
}

#[test]
fn wait_all_needs_every_bit() {
    let flags = EventFlags::new();
    let (waker, _count) = new_count_waker();
    let mut cx = Context::from_waker(&waker);
    let mask = BUTTON_PRESSED | OTHER;

    let mut fut = pin!(flags.wait_all(mask));
    flags.set(BUTTON_PRESSED);
    assert_eq!(fut.as_mut().poll(&mut cx), Poll::Pending);
    assert_eq!(flags.get(), BUTTON_PRESSED);

    flags.set(OTHER);
    assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(mask));
    assert_eq!(flags.get(), 0);
}

#[test]
fn one_set_wakes_one_wait() {
    let flags = EventFlags::new();
    let (waker, _count) = new_count_waker();
    let mut cx = Context::from_waker(&waker);

    flags.set(BUTTON_PRESSED);
    flags.set(BUTTON_PRESSED);

    let mut first = pin!(flags.wait_any(BUTTON_PRESSED));
    assert!(first.as_mut().poll(&mut cx).is_ready());
    let mut second = pin!(flags.wait_any(BUTTON_PRESSED));
    assert!(second.as_mut().poll(&mut cx).is_pending());
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

#[derive(Default)]
struct CountingHandler {
    presses: usize,
}

impl GestureHandler for CountingHandler {
    async fn handle_press(&mut self) -> Outcome {
        self.presses += 1;
        Outcome::Recorded { samples: self.presses }
    }
}

#[test]
fn press_during_handling_is_served_once_afterwards() {
    let flags = EventFlags::new();
    let irq = ButtonIrq::new(&flags);
    let mut handler = CountingHandler::default();
    let (waker, _count) = new_count_waker();
    let mut cx = Context::from_waker(&waker);

    {
        let mut idle = pin!(serve_press(&flags, &mut handler));
        assert!(idle.as_mut().poll(&mut cx).is_pending());
    }
    assert_eq!(handler.presses, 0);

    assert!(irq.on_rising_edge(10));
    // Edges while the first press is pending: one passes debounce.
    assert!(!irq.on_rising_edge(100));
    assert!(irq.on_rising_edge(400));

    let served = pin!(serve_press(&flags, &mut handler)).as_mut().poll(&mut cx);
    assert_eq!(served, Poll::Ready(Outcome::Recorded { samples: 1 }));
    assert_eq!(flags.get(), 0);

    {
        let mut next = pin!(serve_press(&flags, &mut handler));
        assert!(next.as_mut().poll(&mut cx).is_pending());

        irq.on_rising_edge(700);
        assert_eq!(
            next.as_mut().poll(&mut cx),
            Poll::Ready(Outcome::Recorded { samples: 2 })
        );
    }
    assert_eq!(handler.presses, 2);
}
