//! Chaos mode: random failure injection.
//!
//! When chaos mode is on, each gated action (login, add to cart, coupon
//! apply, checkout, feedback send) fails on its own independent draw with
//! probability [`FAILURE_PROBABILITY`]. When it is off no draw is taken.
//!
//! The random source is injectable so tests can pin outcomes:
//!
//! ```rust
//! use qa_playground_storefront::chaos::{Chaos, FixedSource};
//!
//! let mut chaos = Chaos::new(FixedSource::always_fail());
//! assert!(!chaos.maybe_chaos()); // disabled
//! chaos.set_enabled(true);
//! assert!(chaos.maybe_chaos());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability that a gated action fails while chaos mode is on.
pub const FAILURE_PROBABILITY: f64 = 0.25;

/// A source of uniform draws in `[0, 1)`.
pub trait ChaosSource: Send {
    /// Draw the next value in `[0, 1)`.
    fn draw(&mut self) -> f64;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl ChaosSource for ThreadRngSource {
    fn draw(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible draws from a seeded RNG.
#[derive(Debug, Clone)]
pub struct SeededSource(StdRng);

impl SeededSource {
    /// Seed the sequence.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl ChaosSource for SeededSource {
    fn draw(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Returns the same value on every draw.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub f64);

impl FixedSource {
    /// Every gated action fails while chaos mode is on.
    #[must_use]
    pub const fn always_fail() -> Self {
        Self(0.0)
    }

    /// No gated action ever fails.
    #[must_use]
    pub const fn never_fail() -> Self {
        Self(0.999)
    }
}

impl ChaosSource for FixedSource {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

/// The chaos-mode toggle plus its random source.
pub struct Chaos {
    enabled: bool,
    source: Box<dyn ChaosSource>,
}

impl Chaos {
    /// Chaos mode starts disabled.
    #[must_use]
    pub fn new(source: impl ChaosSource + 'static) -> Self {
        Self {
            enabled: false,
            source: Box::new(source),
        }
    }

    /// Returns true if chaos mode is on.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn chaos mode on or off.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip chaos mode and return the new state.
    pub const fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Label for the toggle button.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        if self.enabled { "Chaos: ON" } else { "Chaos: OFF" }
    }

    /// Returns true if the current action should fail.
    pub fn maybe_chaos(&mut self) -> bool {
        self.enabled && self.source.draw() < FAILURE_PROBABILITY
    }
}

impl Default for Chaos {
    fn default() -> Self {
        Self::new(ThreadRngSource)
    }
}

impl std::fmt::Debug for Chaos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chaos")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts draws so tests can assert none happen.
    struct CountingSource(std::sync::Arc<std::sync::atomic::AtomicUsize>);

    impl ChaosSource for CountingSource {
        fn draw(&mut self) -> f64 {
            self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            0.0
        }
    }

    #[test]
    fn test_disabled_never_fires_and_never_draws() {
        let draws = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let mut chaos = Chaos::new(CountingSource(draws.clone()));
        for _ in 0..100 {
            assert!(!chaos.maybe_chaos());
        }
        assert_eq!(draws.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut chaos = Chaos::new(FixedSource(FAILURE_PROBABILITY));
        chaos.set_enabled(true);
        assert!(!chaos.maybe_chaos());

        let mut chaos = Chaos::new(FixedSource(0.2499));
        chaos.set_enabled(true);
        assert!(chaos.maybe_chaos());
    }

    #[test]
    fn test_toggle_and_label() {
        let mut chaos = Chaos::new(FixedSource::never_fail());
        assert_eq!(chaos.label(), "Chaos: OFF");
        assert!(chaos.toggle());
        assert_eq!(chaos.label(), "Chaos: ON");
        assert!(!chaos.toggle());
        assert!(!chaos.is_enabled());
    }

    #[test]
    fn test_seeded_rate_is_about_a_quarter() {
        let mut chaos = Chaos::new(SeededSource::new(7));
        chaos.set_enabled(true);

        let trials = 4000;
        let fired = (0..trials).filter(|_| chaos.maybe_chaos()).count();
        #[allow(clippy::cast_precision_loss)]
        let rate = fired as f64 / f64::from(trials);
        assert!((0.20..=0.30).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn test_thread_rng_draws_are_in_range() {
        let mut source = ThreadRngSource;
        for _ in 0..1000 {
            let v = source.draw();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
