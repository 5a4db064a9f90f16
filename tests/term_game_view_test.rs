use tui_hangman::core::{GameState, GALLOWS};
use tui_hangman::term::{end_message, GameView, Viewport, EXIT_PROMPT};
use tui_hangman::types::Phase;

fn state_after(word: &str, guesses: &str) -> GameState {
    let mut state = GameState::new(word);
    for c in guesses.chars() {
        state.apply_guess(c).unwrap();
    }
    state
}

#[test]
fn term_view_draws_two_bordered_panels() {
    let fb = GameView::default().render(&GameState::new("cat"), Viewport::new(80, 24));

    // Gallows panel: 20x20 at (1,1).
    assert_eq!(fb.get(1, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(20, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(1, 20).unwrap().ch, '└');
    assert_eq!(fb.get(20, 20).unwrap().ch, '┘');

    // Status panel fills the rest of the row, leaving a two-column margin.
    assert_eq!(fb.get(22, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(77, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(22, 20).unwrap().ch, '└');
    assert_eq!(fb.get(77, 20).unwrap().ch, '┘');
    assert_eq!(fb.get(78, 1).unwrap().ch, ' ');
}

#[test]
fn term_view_centers_the_gallows_in_the_panel_interior() {
    let fb = GameView::default().render(&GameState::new("cat"), Viewport::new(80, 24));

    // Interior is 18x18 at (2,2); the art is 9x7, so it starts at (6,7).
    for (i, row) in GALLOWS[0].iter().enumerate() {
        let y = 7 + i as u16;
        let drawn: String = (6..6 + row.chars().count() as u16)
            .map(|x| fb.get(x, y).unwrap().ch)
            .collect();
        assert_eq!(&drawn, row, "row {i}");
    }
}

#[test]
fn term_view_draws_the_stage_for_the_failure_count() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let fb = view.render(&GameState::new("cat"), vp);
    assert_eq!(fb.get(8, 9).unwrap().ch, ' ');

    let fb = view.render(&state_after("cat", "x"), vp);
    assert_eq!(fb.get(8, 9).unwrap().ch, 'O');

    let fb = view.render(&state_after("cat", "xyzwer"), vp);
    assert!(fb.row_text(11).contains("/ \\"));
}

#[test]
fn term_view_status_panel_lists_progress() {
    let state = state_after("cat", "tXa");
    let fb = GameView::default().render(&state, Viewport::new(120, 24));

    // Text starts two columns inside the status panel border.
    let first: String = fb.row_text(2).chars().skip(24).collect();
    assert!(first.starts_with("Welcome to hangman.  Press \"q\""));
    assert!(fb.row_text(3).contains("You have 6 chance(s) left"));
    assert!(fb
        .row_text(5)
        .contains("You've chosen the following letters: t x a"));
    assert!(fb.row_text(7).contains("Your word so far is (_ a t): a t"));
}

#[test]
fn term_view_wraps_long_status_lines_inside_the_panel() {
    let fb = GameView::default().render(&GameState::new("cat"), Viewport::new(80, 24));

    assert!(fb.row_text(2).contains("to quit out"));
    assert!(fb.row_text(3).contains("of the game."));
    // Nothing spills over the right border.
    for y in 2..20 {
        assert_eq!(fb.get(77, y).unwrap().ch, '│', "row {y}");
    }
}

#[test]
fn term_view_end_screen_is_centered() {
    let state = state_after("cat", "xcat");
    let fb = GameView::default().render_end(&state, Phase::Won, Viewport::new(80, 24));

    let message = end_message(&state, Phase::Won);
    assert_eq!(
        message,
        "Congratulations, you solved the word \"cat\" in 1 attempt(s)"
    );

    let row = fb.row_text(12);
    assert_eq!(row.trim(), message);
    assert_eq!(row.len() - row.trim_start().len(), (80 - message.len()) / 2);

    let prompt = fb.row_text(14);
    assert_eq!(prompt.trim(), EXIT_PROMPT);
    assert_eq!(prompt.len() - prompt.trim_start().len(), (80 - EXIT_PROMPT.len()) / 2);

    // The panels are gone.
    assert!(!fb.text().contains('┌'));
}

#[test]
fn term_view_end_screen_reports_a_loss() {
    let state = state_after("cat", "bdefghi");
    let fb = GameView::default().render_end(&state, Phase::Lost, Viewport::new(80, 24));
    assert!(fb
        .text()
        .contains("You failed to guess the word \"cat\" after 7 attempts"));
}

#[test]
fn term_view_survives_a_tiny_viewport() {
    let view = GameView::default();
    let state = state_after("cat", "xyz");
    for (w, h) in [(0, 0), (1, 1), (10, 5), (30, 3)] {
        let fb = view.render(&state, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
        let fb = view.render_end(&state, Phase::Lost, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
