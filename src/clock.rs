//! Provides "today" to code that stamps new transactions.

use time::{Date, OffsetDateTime};

use crate::{Error, timezone::get_local_offset};

/// A source for the current calendar date.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> Date;
}

/// Reads today's date from the system clock in a configured timezone.
#[derive(Debug, Clone)]
pub struct SystemClock {
    timezone: String,
}

impl SystemClock {
    /// Create a clock for `canonical_timezone`, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if the timezone is not known.
    pub fn new(canonical_timezone: &str) -> Result<Self, Error> {
        match get_local_offset(canonical_timezone) {
            Some(_) => Ok(Self {
                timezone: canonical_timezone.to_owned(),
            }),
            None => Err(Error::InvalidTimezoneError(canonical_timezone.to_owned())),
        }
    }

    /// The canonical name of the configured timezone.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        // Validated in `new`.
        let offset = get_local_offset(&self.timezone).unwrap_or_else(|| {
            tracing::warn!("Could not get offset for {}, using UTC", self.timezone);
            time::UtcOffset::UTC
        });

        OffsetDateTime::now_utc().to_offset(offset).date()
    }
}

/// A clock that is stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
