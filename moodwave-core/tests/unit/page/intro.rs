use super::*;

#[test]
fn fires_once_after_delay() {
    let mut t = IntroFadeTimer::new(200, "rainbow-visible");
    assert!(t.poll(10_000).is_none());

    t.arm(1_000);
    assert_eq!(t.due_at_ms(), Some(1_200));
    assert!(t.poll(1_199).is_none());
    assert_eq!(
        t.poll(1_200),
        Some(UiMutation::RevealIntro {
            class: "rainbow-visible".to_owned()
        })
    );
    assert!(t.has_fired());
    assert!(t.poll(5_000).is_none());
}

#[test]
fn rearming_does_not_reschedule() {
    let mut t = IntroFadeTimer::new(200, "rainbow-visible");
    t.arm(0);
    t.arm(900);
    assert_eq!(t.due_at_ms(), Some(200));
}

#[test]
fn late_load_saturates_instead_of_overflowing() {
    let mut t = IntroFadeTimer::new(200, "rainbow-visible");
    t.arm(u64::MAX);
    assert_eq!(t.due_at_ms(), Some(u64::MAX));
    assert!(t.poll(u64::MAX).is_some());
}
