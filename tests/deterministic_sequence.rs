use grid_snake::canvas::Framebuffer;
use grid_snake::config::{BACKGROUND_COLOR, DEFAULT_BOARD, SNAKE_BODY_COLOR, SNAKE_HEAD_COLOR};
use grid_snake::food::Food;
use grid_snake::game::{Control, Game};
use grid_snake::geometry::Position;
use grid_snake::input::{Direction, InputEvent, Key};
use grid_snake::renderer::{render_initial, render_tick};
use grid_snake::snake::Outcome;

#[test]
fn stepwise_growth_turns_and_restart() {
    let mut game = Game::new_with_seed(DEFAULT_BOARD, 42).expect("game starts");
    let mut surface = Framebuffer::new(640, 480, BACKGROUND_COLOR);
    render_initial(&mut surface, &game);

    game.food = Food::new(Position::new(340, 240));
    let outcome = game.tick().expect("tick succeeds");
    render_tick(&mut surface, &game, outcome);
    assert_eq!(outcome, Outcome::AteFood);
    assert_eq!(game.snake.len(), 2);
    assert_eq!(surface.pixel(350, 250), Some(SNAKE_HEAD_COLOR));
    assert_eq!(surface.pixel(330, 250), Some(SNAKE_BODY_COLOR));

    // Grow to five cells in a straight line, then curl back into the body.
    for x in [360, 380, 400] {
        game.food = Food::new(Position::new(x, 240));
        assert_eq!(game.tick().expect("tick succeeds"), Outcome::AteFood);
    }
    assert_eq!(game.snake.len(), 5);
    assert_eq!(game.snake.target_length(), 5);

    game.food = Food::new(Position::new(0, 0));
    for key in [Key::Down, Key::Left, Key::Up] {
        let control = game.handle_events([InputEvent::KeyDown(key)]);
        assert_eq!(control, Control::Continue);

        let outcome = game.tick().expect("tick succeeds");
        render_tick(&mut surface, &game, outcome);
        if key == Key::Up {
            assert_eq!(outcome, Outcome::SelfCollision);
        } else {
            assert_eq!(outcome, Outcome::Moved);
        }
    }

    assert_eq!(game.snake.len(), 1);
    assert_eq!(game.snake.head(), Position::new(320, 240));
    assert_eq!(game.snake.direction(), Direction::Right);
    assert!(!game.snake.occupies(game.food.position));
    assert_eq!(surface.pixel(330, 250), Some(SNAKE_HEAD_COLOR));
    if game.food.position != Position::new(380, 240) {
        assert_eq!(surface.pixel(390, 250), Some(BACKGROUND_COLOR));
    }
}

#[test]
fn snake_crosses_the_board_edge() {
    let mut game = Game::new_with_seed(DEFAULT_BOARD, 7).expect("game starts");
    game.food = Food::new(Position::new(0, 0));

    game.handle_events([InputEvent::KeyDown(Key::Up)]);
    for _ in 0..12 {
        game.tick().expect("tick succeeds");
    }
    assert_eq!(game.snake.head(), Position::new(320, 0));

    game.tick().expect("tick succeeds");
    assert_eq!(game.snake.head(), Position::new(320, 460));
}

#[test]
fn quit_ends_processing() {
    let mut game = Game::new_with_seed(DEFAULT_BOARD, 1).expect("game starts");

    assert_eq!(game.handle_events([InputEvent::Quit]), Control::Quit);
}
