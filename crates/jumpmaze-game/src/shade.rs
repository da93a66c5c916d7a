//! How each board position is presented to the player.

use std::fmt;

use jumpmaze_core::Point;

use crate::session::Session;

/// A 24-bit RGB colour packed into a `u32` as `0x00RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

// -- Palette --

pub const BACKGROUND: Color = Color::from_rgb(0x1e, 0x1e, 0x1e);
/// Jump cell with nothing to point out.
pub const JUMP: Color = Color::from_rgb(0xc0, 0xc0, 0xc0);
/// Jump cell the player can never reach.
pub const JUMP_DIMMED: Color = Color::from_rgb(0x90, 0x90, 0x90);
/// Exit with no rating shown.
pub const EXIT: Color = Color::from_rgb(0x80, 0x80, 0x80);
pub const CURRENT: Color = Color::from_rgb(0xff, 0xff, 0xff);
pub const SELECTABLE: Color = Color::from_rgb(0xff, 0xff, 0xff);

/// Colour of the hardest reachable exit.
pub const EXIT_HARD: Color = Color::from_rgb(255, 128, 128);
/// Colour of an exit reached from the start in no time.
pub const EXIT_EASY: Color = Color::from_rgb(128, 255, 128);

fn mix_channel(a: u8, b: u8, amount: f64) -> u8 {
    (a as f64 * amount + b as f64 * (1.0 - amount)) as u8
}

/// Blend between [`EXIT_EASY`] at 0 and [`EXIT_HARD`] at 1.
pub fn difficulty_color(rating: f64) -> Color {
    let t = rating.clamp(0.0, 1.0);
    Color::from_rgb(
        mix_channel(EXIT_HARD.r(), EXIT_EASY.r(), t),
        mix_channel(EXIT_HARD.g(), EXIT_EASY.g(), t),
        mix_channel(EXIT_HARD.b(), EXIT_EASY.b(), t),
    )
}

/// What a board position looks like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shade {
    /// Off the board or an empty position.
    Background,
    /// The player's position.
    Current,
    /// A landing of a current legal jump.
    Selectable,
    /// An exit; `rating` is shown only when it is reachable and help is on.
    Exit { rating: Option<f64> },
    /// A jump cell; `dimmed` when help is on and it can never be reached.
    Jump { dimmed: bool },
}

impl Shade {
    pub fn color(self) -> Color {
        match self {
            Self::Background => BACKGROUND,
            Self::Current => CURRENT,
            Self::Selectable => SELECTABLE,
            Self::Exit { rating: Some(r) } => difficulty_color(r),
            Self::Exit { rating: None } => EXIT,
            Self::Jump { dimmed: true } => JUMP_DIMMED,
            Self::Jump { dimmed: false } => JUMP,
        }
    }
}

impl Session {
    /// Shade of the position `p`.
    ///
    /// Exits that are legal landings always show as selectable; jump cells
    /// only do so while help is on.
    pub fn shade(&self, p: Point) -> Shade {
        let Some(cell) = self.board().get(p) else {
            return Shade::Background;
        };
        let help = self.help_enabled();
        if cell.is_exit() {
            if self.is_selectable(p) {
                return Shade::Selectable;
            }
            let rating = if help { self.discovery().rating(p) } else { None };
            return Shade::Exit { rating };
        }
        if p == self.position() {
            Shade::Current
        } else if help && self.is_selectable(p) {
            Shade::Selectable
        } else {
            Shade::Jump {
                dimmed: help && !self.discovery().contains(p),
            }
        }
    }
}
