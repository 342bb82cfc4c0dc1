use tui_2048::core::{GameState, Grid};
use tui_2048::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use tui_2048::types::Direction;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn chars_at(fb: &FrameBuffer, x: u16, y: u16, len: u16) -> String {
    (x..x + len).map(|cx| fb.get(cx, y).unwrap().ch).collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(4, 1).unwrap().snapshot();
    let view = GameView::default();

    // 4 tiles of 7 columns plus 5 gutters, plus border => 35 wide.
    // 4 tiles of 3 rows plus 5 gutters, plus border => 19 tall.
    let fb = view.render(&snap, Viewport::new(35, 19));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');
    assert_eq!(fb.get(34, 0).unwrap().ch, '╮');
    assert_eq!(fb.get(0, 18).unwrap().ch, '╰');
    assert_eq!(fb.get(34, 18).unwrap().ch, '╯');
}

#[test]
fn term_view_centers_tile_value() {
    let grid = Grid::from_values(&[
        vec![2048, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 8],
    ])
    .unwrap();
    let snap = GameState::from_grid(grid, 1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(35, 19));

    // Tile (0,0) starts at (2,2); its label sits on the middle row.
    assert_eq!(chars_at(&fb, 3, 3, 4), "2048");
    // Tile (3,3) starts at (26,14).
    assert_eq!(chars_at(&fb, 26, 15, 7), "   8   ");
}

#[test]
fn term_view_marks_spawned_tiles() {
    let snap = GameState::new(4, 7).unwrap().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(35, 19));
    let markers = screen_text(&fb).chars().filter(|&c| c == '·').count();
    assert_eq!(markers, 2);
}

#[test]
fn term_view_shades_merged_tiles() {
    let grid = Grid::from_values(&[
        vec![2, 2, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ])
    .unwrap();
    let game = GameState::from_grid(grid, 3).apply_move(Direction::Left);
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(35, 19));

    let plain_four = Rgb::new(237, 224, 200);
    // Single-digit label: 2 + (7 - 1) / 2 = 5.
    let cell = fb.get(5, 3).unwrap();
    assert_eq!(cell.ch, '4');
    assert_ne!(cell.style.bg, plain_four);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(4, 1).unwrap().snapshot();
    snap.score = 1234;
    snap.moves = 56;

    let view = GameView::default();
    let all = screen_text(&view.render(&snap, Viewport::new(60, 19)));
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("MOVES"));
    assert!(all.contains("56"));

    let narrow = screen_text(&view.render(&snap, Viewport::new(35, 19)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let grid = Grid::from_values(&[vec![2, 4], vec![4, 2]]).unwrap();
    let snap = GameState::from_grid(grid, 1).snapshot();
    assert!(snap.is_over);

    let fb = GameView::default().render(&snap, Viewport::new(19, 11));
    assert!(fb.row_text(5).contains("GAME OVER"));
    assert!(fb.row_text(6).contains("r: restart"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(4, 1).unwrap().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(35, 27));

    // start_y = (27 - 19) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '╭');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(4, 1).unwrap().snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(35, 27));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');
}
