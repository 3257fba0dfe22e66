//! One-byte commands understood by the indicator.

/// Byte for [`Command::Next`].
pub const NEXT_BYTE: u8 = b'N';
/// Byte for [`Command::Previous`].
pub const PREVIOUS_BYTE: u8 = b'P';
/// Byte for [`Command::Current`].
pub const CURRENT_BYTE: u8 = b'C';

/// Actions that can be requested of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Advance to the next state.
    Next,
    /// Retreat to the previous state.
    Previous,
    /// Report the current state without changing it.
    Current,
}

impl Command {
    /// Decodes a received byte. Unknown bytes yield `None`.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            NEXT_BYTE => Some(Command::Next),
            PREVIOUS_BYTE => Some(Command::Previous),
            CURRENT_BYTE => Some(Command::Current),
            _ => None,
        }
    }

    /// Encodes the command as sent by a host.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        match self {
            Command::Next => NEXT_BYTE,
            Command::Previous => PREVIOUS_BYTE,
            Command::Current => CURRENT_BYTE,
        }
    }

    /// Returns `true` if executing this command can change the state.
    #[inline]
    pub const fn is_mutating(self) -> bool {
        !matches!(self, Command::Current)
    }
}

/// A byte that is not one of the command symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownCommand(pub u8);

impl core::fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown command byte 0x{:02X}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownCommand {}

impl TryFrom<u8> for Command {
    type Error = UnknownCommand;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Command::from_byte(byte).ok_or(UnknownCommand(byte))
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        command.as_byte()
    }
}
