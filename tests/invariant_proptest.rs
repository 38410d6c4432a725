//! Property tests: arbitrary sequences of launcher operations never leave
//! more than one game running or more than one panel on the surface.

mod support;

use proptest::prelude::*;
use support::*;
use tui_arcade::core::{
    DisplaySurface, ExitHookBinder, SessionState, SessionSwitcher, SwitchOutcome,
};
use tui_arcade::types::{LauncherEvent, Panel};

#[derive(Debug, Clone)]
enum Op {
    Select(&'static str),
    ReturnToMenu,
    PressQuit,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => prop::sample::select(vec!["Snake", "TicTacToe", "Broken", "Chess"]).prop_map(Op::Select),
        1 => Just(Op::ReturnToMenu),
        1 => Just(Op::PressQuit),
    ]
}

proptest! {
    #[test]
    fn at_most_one_game_running(ops in proptest::collection::vec(op(), 1..40)) {
        let log = new_log();
        let mut registry = fake_registry(&log);
        registry.register(broken_descriptor("Broken")).unwrap();
        let (binder, mut events) = ExitHookBinder::channel();
        let mut s = SessionSwitcher::new(
            registry,
            RecordingSurface::new(log.clone()),
            FakeMenu::default(),
            binder,
        );

        for op in ops {
            match op {
                Op::Select(title) => {
                    let _ = s.select(title);
                }
                Op::ReturnToMenu => s.return_to_menu(),
                Op::PressQuit => {
                    if let Some(controller) = s.active_controller_mut() {
                        controller.quit_control_mut().press();
                    }
                    while let Ok(LauncherEvent::ReturnToMenu(title)) = events.try_recv() {
                        if s.state().is_active(&title) {
                            s.return_to_menu();
                        }
                    }
                }
            }

            prop_assert!(s.registry().running_count() <= 1);
            prop_assert!(s.registry().live_titles().len() <= 1);
            match s.state() {
                SessionState::Idle => {
                    prop_assert_eq!(s.surface().attached(), Some(&Panel::Menu));
                    prop_assert_eq!(s.registry().running_count(), 0);
                }
                SessionState::Active(title) => {
                    prop_assert_eq!(s.surface().attached(), Some(&Panel::game(title.clone())));
                    prop_assert!(s.registry().live_triad(title).is_some_and(|t| t.is_running()));
                }
            }
        }
    }

    #[test]
    fn repeated_select_builds_once(title in prop::sample::select(vec!["Snake", "TicTacToe"]), repeats in 2usize..6) {
        let log = new_log();
        let (binder, _events) = ExitHookBinder::channel();
        let mut s = SessionSwitcher::new(
            fake_registry(&log),
            RecordingSurface::new(log.clone()),
            FakeMenu::default(),
            binder,
        );

        prop_assert!(matches!(s.select(title).unwrap(), SwitchOutcome::Activated { .. }), "select did not activate");
        for _ in 1..repeats {
            prop_assert_eq!(s.select(title).unwrap(), SwitchOutcome::Unchanged);
        }
        let builds = entries(&log).iter().filter(|e| **e == format!("build {title}")).count();
        prop_assert_eq!(builds, 1);
    }
}
