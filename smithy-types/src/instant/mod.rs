/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds and nanoseconds since the Unix epoch
///
/// Both JSON protocols used by the service crates put timestamps on the wire as epoch seconds,
/// so that is what the serde implementations produce and accept.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// `fraction` must be in `[0, 1)`; a fraction that rounds up to a whole second carries over
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * f64::from(NANOS_PER_SECOND)).round() as u32;
        if nanos >= NANOS_PER_SECOND {
            Instant {
                seconds: epoch_seconds + 1,
                subsecond_nanos: 0,
            }
        } else {
            Instant {
                seconds: epoch_seconds,
                subsecond_nanos: nanos,
            }
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + f64::from(self.subsecond_nanos) / f64::from(NANOS_PER_SECOND)
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }
}

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.has_nanos() {
            serializer.serialize_f64(self.epoch_fractional_seconds())
        } else {
            serializer.serialize_i64(self.seconds)
        }
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a timestamp in epoch seconds")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Instant::from_epoch_seconds(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Instant::from_epoch_seconds(v as i64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Instant::from_f64(v))
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::Instant;
    use proptest::prelude::*;

    #[test]
    fn epoch_seconds_on_the_wire() {
        let whole = Instant::from_epoch_seconds(1614952162);
        assert_eq!(serde_json::to_string(&whole).unwrap(), "1614952162");
        let fractional: Instant = serde_json::from_str("1614952162.25").unwrap();
        assert_eq!(
            fractional,
            Instant::from_secs_and_nanos(1614952162, 250_000_000)
        );
        let integral: Instant = serde_json::from_str("1614952162").unwrap();
        assert_eq!(integral, whole);
    }

    #[test]
    fn fractions_that_round_to_a_second_carry_over() {
        assert_eq!(
            Instant::from_f64(0.9999999996),
            Instant::from_epoch_seconds(1)
        );
        assert_eq!(
            Instant::from_fractional_seconds(1614952161, 0.99999999999),
            Instant::from_epoch_seconds(1614952162)
        );
        let parsed: Instant = serde_json::from_str("1614952161.9999999999").unwrap();
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "1614952162");
    }

    proptest! {
        #[test]
        fn subsecond_nanos_stay_in_range(secs in 0i64..4_102_444_800, fraction in 0f64..1f64) {
            let instant = Instant::from_fractional_seconds(secs, fraction);
            prop_assert!(instant.subsecond_nanos < 1_000_000_000);
            prop_assert!(instant.seconds == secs || instant.seconds == secs + 1);
        }

        #[test]
        fn whole_seconds_survive_json(secs in 0i64..4_102_444_800) {
            let instant = Instant::from_epoch_seconds(secs);
            let parsed: Instant = serde_json::from_str(&serde_json::to_string(&instant).unwrap()).unwrap();
            prop_assert_eq!(parsed, instant);
        }
    }
}
