//! The general listing settings for lsr.
//!
//! Each flag here is a default that the matching command-line flag can only
//! switch on, never off.

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    long: bool,
    readable: bool,
}

impl General {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn long(&self) -> bool {
        self.long
    }

    #[inline]
    pub fn readable(&self) -> bool {
        self.readable
    }
}
