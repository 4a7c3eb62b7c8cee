//! Validated route numbers.
//!
//! Metro Transit route numbers live in [2, 852]; anything outside that range
//! is rejected before a request is ever issued.

use std::fmt;
use std::str::FromStr;

use crate::error::{NexTripError, Result};

pub const ROUTE_MIN: u16 = 2;
pub const ROUTE_MAX: u16 = 852;

/// A route number that has passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RouteId(u16);

impl RouteId {
    /// Parse a raw input string into a route id.
    ///
    /// Trims surrounding whitespace, then requires an integer in
    /// [`ROUTE_MIN`, `ROUTE_MAX`].
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || NexTripError::InvalidRoute {
            input: raw.to_string(),
        };

        let number: u16 = raw.trim().parse().map_err(|_| invalid())?;
        if !(ROUTE_MIN..=ROUTE_MAX).contains(&number) {
            return Err(invalid());
        }
        Ok(Self(number))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RouteId {
    type Err = NexTripError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
