//! Operator commands and the LEDs they address.
//!
//! The command table is fixed:
//!
//! | Input   | Action                    |
//! |---------|---------------------------|
//! | `blue`  | send `LED-1`              |
//! | `green` | send `LED-2`              |
//! | `red`   | send `LED-3`              |
//! | `exit`  | leave the console loop    |
//!
//! Matching is exact and case-sensitive. Surrounding whitespace is part of
//! the input, so `" blue"` or `"Blue"` are not commands.

use std::fmt;

/// The indicator lights on the remote device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Led {
    /// Blue LED (`LED-1`)
    Blue,
    /// Green LED (`LED-2`)
    Green,
    /// Red LED (`LED-3`)
    Red,
}

impl Led {
    /// All LEDs in device index order.
    pub const ALL: [Led; 3] = [Led::Blue, Led::Green, Led::Red];

    /// 1-based index the device uses for this LED.
    pub fn index(&self) -> u8 {
        match self {
            Led::Blue => 1,
            Led::Green => 2,
            Led::Red => 3,
        }
    }

    /// Look up an LED by its 1-based device index.
    pub fn from_index(index: u8) -> Option<Led> {
        match index {
            1 => Some(Led::Blue),
            2 => Some(Led::Green),
            3 => Some(Led::Red),
            _ => None,
        }
    }

    /// Datagram label that toggles this LED.
    pub fn label(&self) -> &'static str {
        match self {
            Led::Blue => "LED-1",
            Led::Green => "LED-2",
            Led::Red => "LED-3",
        }
    }

    /// Color name, which is also the operator command word.
    pub fn color(&self) -> &'static str {
        match self {
            Led::Blue => "blue",
            Led::Green => "green",
            Led::Red => "red",
        }
    }
}

impl fmt::Display for Led {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color())
    }
}

/// A recognized operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip one LED on the device.
    Toggle(Led),
    /// Leave the console loop.
    Exit,
}

impl Command {
    /// Word that ends the console loop.
    pub const EXIT_WORD: &'static str = "exit";

    /// Look up an input line in the command table.
    ///
    /// `input` must already have its line terminator removed. Returns `None`
    /// for anything that is not exactly one of the command words.
    pub fn lookup(input: &str) -> Option<Command> {
        match input {
            "blue" => Some(Command::Toggle(Led::Blue)),
            "green" => Some(Command::Toggle(Led::Green)),
            "red" => Some(Command::Toggle(Led::Red)),
            Self::EXIT_WORD => Some(Command::Exit),
            _ => None,
        }
    }

    /// Payload to transmit for this command, or `None` for `exit`.
    pub fn payload(&self) -> Option<&'static str> {
        match self {
            Command::Toggle(led) => Some(led.label()),
            Command::Exit => None,
        }
    }

    /// The input word that produces this command.
    pub fn word(&self) -> &'static str {
        match self {
            Command::Toggle(led) => led.color(),
            Command::Exit => Self::EXIT_WORD,
        }
    }
}
