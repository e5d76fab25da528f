// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timer-driven auto advance with hover pause.
//!
//! [`Autoplay`] only tracks whether a repeating timer *should* be armed; the
//! backend owns the real timer and executes the [`TimerCommand`]s this state
//! machine hands back. Start and stop are idempotent so at most one timer is
//! ever live per carousel.

use core::num::NonZeroU32;

/// Autoplay delay as configured on the carousel root.
///
/// `None` means autoplay is disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AutoplayConfig {
    /// Interval between advances, in milliseconds.
    pub delay_ms: Option<NonZeroU32>,
}

impl AutoplayConfig {
    /// Autoplay disabled.
    pub const DISABLED: Self = Self { delay_ms: None };

    /// Autoplay every `delay_ms` milliseconds; zero disables it.
    #[must_use]
    pub const fn every(delay_ms: u32) -> Self {
        Self {
            delay_ms: NonZeroU32::new(delay_ms),
        }
    }

    /// Parses a `data-autoplay` attribute value.
    ///
    /// Leading whitespace is skipped, an optional sign is accepted and the
    /// leading run of decimal digits is used; anything after it is ignored.
    /// Missing, empty, non-numeric, zero and negative values disable
    /// autoplay. Values past `u32::MAX` saturate.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::DISABLED;
        };
        let s = value.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let mut ms: u32 = 0;
        let mut any = false;
        for b in digits.bytes().take_while(u8::is_ascii_digit) {
            any = true;
            ms = ms.saturating_mul(10).saturating_add(u32::from(b - b'0'));
        }
        if !any || negative {
            return Self::DISABLED;
        }
        Self::every(ms)
    }

    /// Whether autoplay is enabled.
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.delay_ms.is_some()
    }
}

/// What the backend must do with its interval timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerCommand {
    /// Start a repeating timer with this period in milliseconds.
    Arm(NonZeroU32),
    /// Clear the running timer.
    Disarm,
}

/// Armed/disarmed state of the autoplay timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Autoplay {
    config: AutoplayConfig,
    armed: bool,
}

impl Autoplay {
    /// Creates a disarmed autoplay state.
    #[must_use]
    pub const fn new(config: AutoplayConfig) -> Self {
        Self {
            config,
            armed: false,
        }
    }

    /// The configuration this state was built from.
    #[must_use]
    pub const fn config(&self) -> AutoplayConfig {
        self.config
    }

    /// Whether a timer is currently armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Arms the timer if autoplay is enabled and nothing is armed yet.
    pub fn start(&mut self) -> Option<TimerCommand> {
        let delay = self.config.delay_ms?;
        if self.armed {
            return None;
        }
        self.armed = true;
        Some(TimerCommand::Arm(delay))
    }

    /// Disarms the timer if one is armed.
    pub fn stop(&mut self) -> Option<TimerCommand> {
        if !self.armed {
            return None;
        }
        self.armed = false;
        Some(TimerCommand::Disarm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delay(ms: u32) -> NonZeroU32 {
        NonZeroU32::new(ms).unwrap()
    }

    #[test]
    fn attribute_parsing_is_lenient() {
        let parse = |s| AutoplayConfig::from_attribute(Some(s)).delay_ms;
        assert_eq!(parse("4000"), Some(delay(4000)));
        assert_eq!(parse("  250ms"), Some(delay(250)));
        assert_eq!(parse("+15"), Some(delay(15)));
        assert_eq!(parse("0"), None);
        assert_eq!(parse("-300"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("soon"), None);
        assert_eq!(parse("99999999999"), Some(delay(u32::MAX)));
        assert_eq!(AutoplayConfig::from_attribute(None), AutoplayConfig::DISABLED);
    }

    #[test]
    fn disabled_never_arms() {
        let mut a = Autoplay::new(AutoplayConfig::DISABLED);
        assert_eq!(a.start(), None);
        assert!(!a.is_armed());
        assert_eq!(a.stop(), None);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut a = Autoplay::new(AutoplayConfig::every(100));
        assert_eq!(a.start(), Some(TimerCommand::Arm(delay(100))));
        assert_eq!(a.start(), None);
        assert!(a.is_armed());
        assert_eq!(a.stop(), Some(TimerCommand::Disarm));
        assert_eq!(a.stop(), None);
        assert_eq!(a.start(), Some(TimerCommand::Arm(delay(100))));
    }
}
