pub mod network;

use std::time::Duration;

use crate::prelude::*;

/// Geographic position reported by a sensing capability.
///
/// Latitude and longitude are trusted from the source and not re-validated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Location-sensing capability.
#[expect(async_fn_in_trait)]
pub trait PositionSource {
    /// Acquire the current position.
    ///
    /// `high_accuracy` is a hint: sources with a single accuracy tier may ignore it.
    /// `timeout` caps the attempt; an attempt that outlives it must fail.
    async fn acquire(&self, high_accuracy: bool, timeout: Duration) -> Result<Coordinates>;
}

pub const HIGH_ACCURACY_TIMEOUT: Duration = Duration::from_secs(10);
pub const FALLBACK_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error("location sensing is not available")]
    Unsupported,

    #[error("failed to acquire a position: {0:#}")]
    Acquisition(Error),
}

/// Acquire the current position with the two-stage accuracy fallback.
///
/// A high-accuracy attempt runs first with the shorter timeout. On any failure a
/// coarse attempt runs with the longer, more tolerant timeout. Only the second
/// failure is surfaced; the first is logged and swallowed.
#[instrument(skip_all)]
pub async fn current_position(source: &impl PositionSource) -> Result<Coordinates, PositionError> {
    match source.acquire(true, HIGH_ACCURACY_TIMEOUT).await {
        Ok(position) => Ok(position),
        Err(error) => {
            debug!("high-accuracy attempt failed: {error:#}");
            source
                .acquire(false, FALLBACK_TIMEOUT)
                .await
                .map_err(PositionError::Acquisition)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque};

    use super::*;

    struct ScriptedSource {
        responses: RefCell<VecDeque<Result<Coordinates>>>,
        calls: RefCell<Vec<(bool, Duration)>>,
    }

    impl ScriptedSource {
        fn new(responses: impl IntoIterator<Item = Result<Coordinates>>) -> Self {
            Self {
                responses: RefCell::new(responses.into_iter().collect()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl PositionSource for ScriptedSource {
        async fn acquire(&self, high_accuracy: bool, timeout: Duration) -> Result<Coordinates> {
            self.calls.borrow_mut().push((high_accuracy, timeout));
            self.responses.borrow_mut().pop_front().expect("unexpected acquisition attempt")
        }
    }

    const POSITION: Coordinates = Coordinates { lat: 48.8566, lon: 2.3522 };

    #[tokio::test]
    async fn high_accuracy_success_skips_fallback_ok() -> Result {
        let source = ScriptedSource::new([Ok(POSITION)]);
        let position = current_position(&source).await?;
        assert_eq!(position, POSITION);
        assert_eq!(*source.calls.borrow(), [(true, HIGH_ACCURACY_TIMEOUT)]);
        Ok(())
    }

    #[tokio::test]
    async fn fallback_attempted_once_after_failure_ok() -> Result {
        let source = ScriptedSource::new([Err(anyhow!("timed out")), Ok(POSITION)]);
        let position = current_position(&source).await?;
        assert_eq!(position, POSITION);
        assert_eq!(
            *source.calls.borrow(),
            [(true, HIGH_ACCURACY_TIMEOUT), (false, FALLBACK_TIMEOUT)],
        );
        Ok(())
    }

    #[tokio::test]
    async fn final_error_carries_fallback_message_ok() {
        let source =
            ScriptedSource::new([Err(anyhow!("permission denied")), Err(anyhow!("no signal"))]);
        let error = current_position(&source).await.unwrap_err();
        assert_eq!(error.to_string(), "failed to acquire a position: no signal");
    }
}
