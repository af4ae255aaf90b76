//! ASCII tile maps
//!
//! Each character is one `BLOCK_SIZE` tile:
//! - `#`: wall
//! - `E`: exit
//! - `M`: monster spawn
//! - `P`: player spawn
//!
//! Anything else is open floor.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{Exit, Monster, Player, Tile, Wall};
use crate::consts::BLOCK_SIZE;

pub const WALL: char = '#';
pub const EXIT: char = 'E';
pub const MONSTER: char = 'M';
pub const PLAYER: char = 'P';

/// A level layout as a grid of characters (row-major)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameMap {
    pub rows: Vec<Vec<char>>,
}

impl GameMap {
    /// Parse a multi-line string, one row per line
    pub fn parse(text: &str) -> Self {
        Self {
            rows: text.lines().map(|line| line.chars().collect()).collect(),
        }
    }

    pub fn from_rows(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|row| row.chars().collect()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    /// Pixel positions of every cell holding `symbol`, scanning row by row
    pub fn tiles_for(&self, symbol: char) -> Vec<IVec2> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(move |&(_, &cell)| cell == symbol)
                    .map(move |(col, _)| IVec2::new(col as i32, row as i32) * BLOCK_SIZE)
            })
            .collect()
    }

    pub fn walls(&self) -> Vec<Wall> {
        self.tiles_for(WALL).into_iter().map(Tile::at).collect()
    }

    pub fn exits(&self) -> Vec<Exit> {
        self.tiles_for(EXIT).into_iter().map(Tile::at).collect()
    }

    pub fn monsters(&self) -> Vec<Monster> {
        self.tiles_for(MONSTER).into_iter().map(Monster::at).collect()
    }

    /// First player spawn, if the map has one
    pub fn player(&self) -> Option<Player> {
        self.tiles_for(PLAYER).first().copied().map(Player::at)
    }

    /// The levels shipped with the game
    pub fn builtin_levels() -> Vec<GameMap> {
        vec![
            Self::from_rows(&[
                "#EEE################",
                "#   #              #",
                "#   #          M   #",
                "# M #              #",
                "#   #    #####     #",
                "#                  #",
                "#     M            #",
                "#              M   #",
                "#####              #",
                "#                  #",
                "#                  #",
                "#   #              #",
                "#   #    #####     #",
                "#                  #",
                "#                  #",
                "#####         #    #",
                "#   #   #     #  M #",
                "# P     #          #",
                "#       #          #",
                "####################",
            ]),
            Self::from_rows(&[
                "####################",
                "#                  E",
                "#   M              E",
                "#                  E",
                "#       ############",
                "#                  #",
                "#            M     #",
                "#    ##########    #",
                "#                  #",
                "#                  #",
                "#   M              #",
                "#                  #",
                "#      ####  ##    #",
                "#                  #",
                "#              #   #",
                "#  ###        #    #",
                "#       #    #   M #",
                "# M     #    #     #",
                "#       # P  #     #",
                "####################",
            ]),
        ]
    }
}
