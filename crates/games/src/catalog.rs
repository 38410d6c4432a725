//! The launcher's built-in catalog.

use crate::core::{GameDescriptor, GameRegistry, LauncherError};
use crate::snake::{self, SnakeController, SnakeModel, SnakeView};
use crate::tictactoe::{self, TicTacToeController, TicTacToeModel, TicTacToeView};

const SNAKE_BOARD: (u16, u16) = (20, 10);

pub fn snake_descriptor() -> GameDescriptor {
    GameDescriptor::new(
        snake::TITLE,
        snake::ICON_PATH,
        || SnakeModel::new(SNAKE_BOARD.0, SNAKE_BOARD.1),
        || Ok(SnakeView::new()),
        |view, model| Ok(SnakeController::new(view, model)),
    )
}

pub fn tictactoe_descriptor() -> GameDescriptor {
    GameDescriptor::new(
        tictactoe::TITLE,
        tictactoe::ICON_PATH,
        || Ok(TicTacToeModel::new()),
        || Ok(TicTacToeView::new()),
        |view, model| Ok(TicTacToeController::new(view, model)),
    )
}

/// Registry holding every bundled game, in menu order.
pub fn default_registry() -> Result<GameRegistry, LauncherError> {
    let mut registry = GameRegistry::new();
    registry.register(snake_descriptor())?;
    registry.register(tictactoe_descriptor())?;
    Ok(registry)
}
