//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides convenience methods for applying ANSI
//! styling via the `colored` crate. Implementations for `&str` and `String`
//! are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn room_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn creature_style(&self) -> ColoredString;
    fn damage_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn engine_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn room_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn creature_style(&self) -> ColoredString {
        self.truecolor(13, 130, 60).bold()
    }
    fn damage_style(&self) -> ColoredString {
        self.truecolor(230, 80, 80)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn engine_style(&self) -> ColoredString {
        self.dimmed()
    }
}

impl GameStyle for String {
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn creature_style(&self) -> ColoredString {
        self.as_str().creature_style()
    }
    fn damage_style(&self) -> ColoredString {
        self.as_str().damage_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn engine_style(&self) -> ColoredString {
        self.as_str().engine_style()
    }
}
