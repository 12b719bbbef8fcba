//! 棋盘坐标定义

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_FILES, BOARD_RANKS};
use crate::error::ProtocolError;

/// 棋盘格坐标（代数记法，a1 到 h8）
///
/// `file` 为列（0 = a 列），`rank` 为行（0 = 第 1 行）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// 创建坐标，越界返回 None
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if (file as usize) < BOARD_FILES && (rank as usize) < BOARD_RANKS {
            Some(Square { file, rank })
        } else {
            None
        }
    }

    /// 列（0 = a 列）
    pub fn file(&self) -> u8 {
        self.file
    }

    /// 行（0 = 第 1 行）
    pub fn rank(&self) -> u8 {
        self.rank
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProtocolError::InvalidSquare {
            text: s.to_string(),
        };

        let mut chars = s.chars();
        let file_char = chars.next().ok_or_else(invalid)?;
        let rank_char = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        if !('a'..='h').contains(&file_char) || !('1'..='8').contains(&rank_char) {
            return Err(invalid());
        }

        Ok(Square {
            file: file_char as u8 - b'a',
            rank: rank_char as u8 - b'1',
        })
    }
}
