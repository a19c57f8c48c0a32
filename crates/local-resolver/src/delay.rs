use std::time::Duration;

use rand::Rng;

/// How long the local resolver pretends to type before answering.
///
/// The delay never affects the answer itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypingDelay {
    /// Answer immediately.
    #[default]
    None,
    /// Always wait for the same duration.
    Fixed(Duration),
    /// Wait for a random duration in `min..=max`.
    Random {
        /// The shortest delay.
        min: Duration,
        /// The longest delay.
        max: Duration,
    },
}

impl TypingDelay {
    /// The delay used by the stock widget, 1 to 2 seconds.
    pub const HUMAN: TypingDelay = TypingDelay::Random {
        min: Duration::from_millis(1000),
        max: Duration::from_millis(2000),
    };

    /// Picks a concrete duration for one answer.
    pub fn sample(&self) -> Option<Duration> {
        match *self {
            TypingDelay::None => None,
            TypingDelay::Fixed(duration) => Some(duration),
            TypingDelay::Random { min, max } => {
                if max <= min {
                    return Some(min);
                }
                let min_ms = min.as_millis() as u64;
                let max_ms = max.as_millis() as u64;
                let ms = rand::thread_rng().gen_range(min_ms..=max_ms);
                Some(Duration::from_millis(ms))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_bounds() {
        assert_eq!(TypingDelay::None.sample(), None);
        assert_eq!(
            TypingDelay::Fixed(Duration::from_secs(1)).sample(),
            Some(Duration::from_secs(1))
        );
        for _ in 0..100 {
            let delay = TypingDelay::HUMAN.sample().unwrap();
            assert!(delay >= Duration::from_millis(1000));
            assert!(delay <= Duration::from_millis(2000));
        }
    }

    #[test]
    fn test_inverted_range() {
        let delay = TypingDelay::Random {
            min: Duration::from_secs(2),
            max: Duration::from_secs(1),
        };
        assert_eq!(delay.sample(), Some(Duration::from_secs(2)));
    }
}
