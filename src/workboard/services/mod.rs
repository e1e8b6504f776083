//! Application services for the kanban board.

mod board;

pub use board::{BoardService, BoardServiceError, BoardServiceResult};
