//! A visitor scrolls down the page, opens the menu, picks a link.
//!
//! Run with: cargo test -p folio_ui --test chrome_flow

use folio_fx::{ManualObserver, ScrollReveal};
use folio_ui::{
    active_item, stagger_delay_ms, ChromeConfig, HeaderState, MobileMenu, RevealStyle,
    ScrollToTop, TitleRotator,
};
use proptest::prelude::*;

#[test]
fn scrolling_session() {
    let config = ChromeConfig::default();
    let mut header = HeaderState::new(config.header_offset);
    let mut top = ScrollToTop::new(config.scroll_top_offset);

    let mut header_flips = 0;
    let mut top_flips = 0;
    for y in [0.0, 5.0, 11.0, 120.0, 301.0, 900.0, 250.0, 0.0] {
        header_flips += u32::from(header.on_scroll(y));
        top_flips += u32::from(top.on_scroll(y));
    }

    assert_eq!(header_flips, 2);
    assert_eq!(top_flips, 2);
    assert!(!header.is_scrolled());
    assert!(!top.is_visible());
}

#[test]
fn menu_link_closes_menu_and_highlights_route() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    assert!(menu.is_open());

    let chosen = active_item("/blog/42").unwrap();
    menu.close();

    assert_eq!(chosen.label, "Blog");
    assert!(!menu.is_open());
}

#[test]
fn revealed_cards_stagger_in() {
    let config = ChromeConfig::default();
    let observer = ManualObserver::new();
    let mut grid = ScrollReveal::new(observer.clone());
    grid.register(Some(&"projects"));

    let delays = |revealed| -> Vec<u32> {
        (0..3)
            .map(|i| stagger_delay_ms(i, config.card_stagger_ms, revealed))
            .collect()
    };
    assert_eq!(delays(grid.is_revealed()), vec![0, 0, 0]);
    assert_eq!(RevealStyle::Scale.classes(grid.is_revealed()), "opacity-0 scale-90");

    observer.set_visible_fraction(&"projects", 0.5);
    assert_eq!(delays(grid.is_revealed()), vec![0, 150, 300]);
    assert_eq!(RevealStyle::Scale.classes(grid.is_revealed()), "opacity-100 scale-100");
}

#[test]
fn hero_titles_follow_timer_ticks() {
    let config = ChromeConfig::default();
    let mut rotator = TitleRotator::new(config.titles.clone(), config.rotation_ms);

    let mut seen = vec![rotator.current().unwrap().to_owned()];
    for _ in 0..6 {
        assert!(rotator.advance(config.rotation_ms));
        seen.push(rotator.current().unwrap().to_owned());
    }

    assert_eq!(&seen[..6], &config.titles[..]);
    assert_eq!(seen[6], seen[0]);
}

proptest! {
    #[test]
    fn rotator_index_tracks_total_time(
        len in 2usize..8,
        period in 1u64..5000,
        ticks in prop::collection::vec(0u64..10_000, 0..50),
    ) {
        let titles = (0..len).map(|i| format!("t{i}")).collect();
        let mut rotator = TitleRotator::new(titles, period);
        let total: u64 = ticks.iter().sum();
        for tick in ticks {
            rotator.advance(tick);
        }
        prop_assert_eq!(rotator.index() as u64, (total / period) % len as u64);
    }

    #[test]
    fn stagger_is_zero_until_revealed(index in any::<u32>(), step in any::<u32>()) {
        prop_assert_eq!(stagger_delay_ms(index, step, false), 0);
        prop_assert_eq!(stagger_delay_ms(index, step, true), index.saturating_mul(step));
    }
}
