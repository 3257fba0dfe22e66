//! The four-position indicator state.

/// Mask selecting the two bits that encode a state.
const STATE_MASK: u8 = 0b11;

/// Which of the two indicator outputs are lit.
///
/// Discriminants are the identifiers sent over the wire, and they double as a
/// 2-bit counter: stepping forward or backward is `± 1` modulo 4, so the
/// transition graph is always a single cycle of length four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IndicatorState {
    /// Both outputs inactive.
    #[default]
    BothOff = 0,
    /// Only output A active.
    FirstOnly = 1,
    /// Only output B active.
    SecondOnly = 2,
    /// Both outputs active.
    BothOn = 3,
}

impl IndicatorState {
    /// All states in wire order.
    pub const ALL: [IndicatorState; 4] = [
        IndicatorState::BothOff,
        IndicatorState::FirstOnly,
        IndicatorState::SecondOnly,
        IndicatorState::BothOn,
    ];

    /// Builds a state from the low two bits of `id`. Higher bits are ignored.
    #[inline]
    pub const fn from_id(id: u8) -> Self {
        match id & STATE_MASK {
            0 => IndicatorState::BothOff,
            1 => IndicatorState::FirstOnly,
            2 => IndicatorState::SecondOnly,
            _ => IndicatorState::BothOn,
        }
    }

    /// Raw identifier transmitted over serial (0-3, not ASCII).
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Human-facing state number, 1-4.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self.id() + 1
    }

    /// The state after this one, wrapping from `BothOn` to `BothOff`.
    #[inline]
    pub const fn next(self) -> Self {
        Self::from_id(self.id().wrapping_add(1))
    }

    /// The state before this one, wrapping from `BothOff` to `BothOn`.
    #[inline]
    pub const fn prev(self) -> Self {
        Self::from_id(self.id().wrapping_sub(1))
    }

    /// Output pattern `(a, b)` for this state.
    #[inline]
    pub const fn outputs(self) -> (bool, bool) {
        let id = self.id();
        (id & 0b01 != 0, id & 0b10 != 0)
    }
}

/// A reply byte that is not a state id (0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidStateId(pub u8);

impl core::fmt::Display for InvalidStateId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid state id 0x{:02X}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidStateId {}

impl TryFrom<u8> for IndicatorState {
    type Error = InvalidStateId;

    /// Strict decode of a wire id. Unlike [`IndicatorState::from_id`], any byte
    /// above 3 is rejected.
    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if id > STATE_MASK {
            return Err(InvalidStateId(id));
        }
        Ok(Self::from_id(id))
    }
}

impl From<IndicatorState> for u8 {
    fn from(state: IndicatorState) -> Self {
        state.id()
    }
}

impl core::fmt::Display for IndicatorState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "State {}", self.ordinal())
    }
}
