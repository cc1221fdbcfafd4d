pub mod collision;
pub mod command;
pub mod constants;
pub mod entity;
pub mod error;
pub mod game;
pub mod game_map;
pub mod logging;
pub mod parse;
pub mod player;
