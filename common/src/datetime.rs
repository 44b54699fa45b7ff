//! Date and time utilities.

use std::{cmp::Ordering, marker::PhantomData, time::Duration};

use derive_more::Debug;
use time::{format_description::BorrowedFormatItem, macros::format_description};

/// Untyped date and time.
pub type DateTime = DateTimeOf;

/// Format of [`DateTimeOf::to_minutes_string()`].
const MINUTES_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]/[month]/[day] [hour]:[minute]");

/// UTC date and time.
#[derive(Debug)]
pub struct DateTimeOf<Of: ?Sized = ()> {
    /// Inner representation of the date and time.
    inner: time::OffsetDateTime,

    /// Type parameter describing the kind of date and time.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateTimeOf<Of> {
    /// Creates a new [`DateTime`] representing the current date and time.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn now() -> Self {
        let inner = time::OffsetDateTime::now_utc();
        Self {
            _of: PhantomData,
            inner: inner
                .replace_microsecond(inner.microsecond())
                .expect("infallible"),
        }
    }

    /// Creates a new [`DateTime`] from the provided [`UNIX_EPOCH`] timestamp.
    ///
    /// [`None`] is returned if the timestamp is invalid.
    ///
    /// [`UNIX_EPOCH`]: std::time::UNIX_EPOCH
    #[must_use]
    pub fn from_unix_timestamp(timestamp: i64) -> Option<Self> {
        Some(Self {
            inner: time::OffsetDateTime::from_unix_timestamp(timestamp).ok()?,
            _of: PhantomData,
        })
    }

    /// Returns the [`UNIX_EPOCH`] timestamp of this [`DateTime`].
    ///
    /// [`UNIX_EPOCH`]: std::time::UNIX_EPOCH
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.inner.unix_timestamp()
    }

    /// Returns the [`DateTime`] formatted as `YYYY/MM/DD hh:mm`.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_minutes_string(&self) -> String {
        self.inner.format(MINUTES_FORMAT).unwrap_or_else(|e| {
            panic!("cannot format `DateTime` in minutes: {e}")
        })
    }

    /// Returns the [`Duration`] left from this [`DateTime`] until the `later`
    /// one.
    ///
    /// [`Duration::ZERO`] is returned if `later` has already passed.
    #[must_use]
    pub fn until<L: ?Sized>(&self, later: DateTimeOf<L>) -> Duration {
        (later.inner - self.inner).try_into().unwrap_or(Duration::ZERO)
    }

    /// Returns this [`DateTime`] moved forward by the provided [`Duration`].
    ///
    /// Saturates at the latest representable [`DateTime`].
    #[must_use]
    pub fn saturating_add(self, duration: Duration) -> Self {
        let duration =
            time::Duration::try_from(duration).unwrap_or(time::Duration::MAX);
        Self {
            inner: self.inner.saturating_add(duration),
            _of: PhantomData,
        }
    }

    /// Coerces one kind of [`DateTime`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateTimeOf<NewOf> {
        DateTimeOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> Copy for DateTimeOf<Of> {}
impl<Of: ?Sized> Clone for DateTimeOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateTimeOf<Of> {}
impl<Of: ?Sized> PartialEq for DateTimeOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateTimeOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateTimeOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub mod serde {
    //! Module providing integration with [`serde`] crate.

    use super::DateTimeOf;

    pub mod unix_timestamp {
        //! Module providing serialization and deserialization of [`DateTimeOf`]
        //! as a Unix timestamp.

        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        use super::DateTimeOf;

        /// Serializes the [`DateTimeOf`] as a Unix timestamp.
        ///
        /// # Errors
        ///
        /// Returns an error if the timestamp is invalid.
        pub fn serialize<Of, S>(
            dt: &DateTimeOf<Of>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            Of: ?Sized,
        {
            serializer.serialize_i64(dt.unix_timestamp())
        }

        /// Deserializes the Unix timestamp into a [`DateTimeOf`].
        ///
        /// # Errors
        ///
        /// Returns an error if the timestamp is invalid.
        pub fn deserialize<'de, D, Of>(
            deserializer: D,
        ) -> Result<DateTimeOf<Of>, D::Error>
        where
            D: Deserializer<'de>,
            Of: ?Sized,
        {
            DateTimeOf::from_unix_timestamp(i64::deserialize(deserializer)?)
                .ok_or_else(|| Error::custom("invalid timestamp"))
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use super::DateTime;

    #[test]
    fn formats_in_minutes() {
        let dt = DateTime::from_unix_timestamp(1_698_184_831).unwrap();

        assert_eq!(dt.to_minutes_string(), "2023/10/24 22:00");
    }

    #[test]
    fn saturates_remaining_duration() {
        let dt = DateTime::from_unix_timestamp(1_000).unwrap();
        let later = dt.saturating_add(Duration::from_secs(90));

        assert_eq!(dt.until(later), Duration::from_secs(90));
        assert_eq!(later.until(dt), Duration::ZERO);
    }

    #[test]
    fn saturates_far_future() {
        let now = DateTime::now();

        let latest = now.saturating_add(Duration::MAX);
        assert!(latest > now);
        assert_eq!(latest.saturating_add(Duration::from_secs(1)), latest);
        assert!(now.until(latest) > Duration::ZERO);

        let years = Duration::from_secs(300_000 * 365 * 24 * 60 * 60);
        let far = now.saturating_add(years);
        assert!(far > now);
        assert!(far <= latest);
    }
}
