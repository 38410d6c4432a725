use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_arcade::core::{shutdown_gate, Launcher};
use tui_arcade::games::default_registry;
use tui_arcade::term::{encode_diff_into, FrameBuffer, IconMenu, TerminalSurface};
use tui_arcade::types::LauncherAction;

fn arcade() -> Launcher<TerminalSurface, IconMenu> {
    let (signal, _gate) = shutdown_gate();
    Launcher::new(
        default_registry().expect("bundled catalog"),
        TerminalSurface::new(80, 24),
        IconMenu::new(),
        signal,
    )
}

fn bench_switch(c: &mut Criterion) {
    let mut launcher = arcade();

    c.bench_function("select_snake_then_tictactoe", |b| {
        b.iter(|| {
            let _ = launcher.on_select(black_box("Snake"));
            let _ = launcher.on_select(black_box("TicTacToe"));
        })
    });
}

fn bench_quit_round_trip(c: &mut Criterion) {
    let mut launcher = arcade();

    c.bench_function("confirm_then_back", |b| {
        b.iter(|| {
            launcher.handle_action(LauncherAction::Confirm);
            launcher.handle_action(LauncherAction::Back);
        })
    });
}

fn bench_render_menu(c: &mut Criterion) {
    let launcher = arcade();
    let mut prev = FrameBuffer::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("render_menu_diff", |b| {
        b.iter(|| {
            launcher.switcher().render_into(&mut fb);
            out.clear();
            encode_diff_into(&prev, &fb, &mut out).unwrap();
            std::mem::swap(&mut prev, &mut fb);
            black_box(out.len());
        })
    });
}

criterion_group!(benches, bench_switch, bench_quit_round_trip, bench_render_menu);
criterion_main!(benches);
