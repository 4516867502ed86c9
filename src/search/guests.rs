use serde::{Deserialize, Serialize};

pub const MAX_ADULTS: u32 = 16;
pub const MAX_CHILDREN: u32 = 10;
pub const MAX_INFANTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestKind {
    Adults,
    Children,
    Infants,
}

/// Guest breakdown picked in the search bar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl Default for GuestCounts {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

impl GuestCounts {
    /// Guests that count against a property's capacity. Infants don't.
    pub fn total(&self) -> u32 {
        self.adults + self.children
    }

    pub fn increment(&mut self, kind: GuestKind) {
        match kind {
            GuestKind::Adults if self.adults < MAX_ADULTS => self.adults += 1,
            GuestKind::Children if self.children < MAX_CHILDREN => self.children += 1,
            GuestKind::Infants if self.infants < MAX_INFANTS => self.infants += 1,
            _ => {}
        }
    }

    pub fn decrement(&mut self, kind: GuestKind) {
        match kind {
            GuestKind::Adults if self.adults > 1 => self.adults -= 1,
            GuestKind::Children if self.children > 0 => self.children -= 1,
            GuestKind::Infants if self.infants > 0 => self.infants -= 1,
            _ => {}
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
