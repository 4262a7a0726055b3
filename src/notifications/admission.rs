// SPDX-License-Identifier: MPL-2.0
//! Admission policy: queue a new toast or turn it away.
//!
//! Rejection is a normal outcome, not an error. In single-toast mode a busy
//! screen means "no room" rather than "show later".

use super::notification::{ToastId, ToastOptions};
use crate::config::ToastConfig;
use serde::{Deserialize, Serialize};

/// Why a toast was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Single-toast mode and a toast is already showing.
    Busy,
    /// The configured pending-queue cap is reached.
    PendingFull,
}

/// Outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted(ToastId),
    Rejected(RejectReason),
}

impl Admission {
    #[must_use]
    pub fn id(&self) -> Option<&ToastId> {
        match self {
            Admission::Admitted(id) => Some(id),
            Admission::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn into_id(self) -> Option<ToastId> {
        match self {
            Admission::Admitted(id) => Some(id),
            Admission::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted(_))
    }
}

/// Decides whether a request may enter the pending queue.
///
/// # Errors
///
/// Returns the rejection reason when the request must be dropped.
pub fn check(
    options: &ToastOptions,
    config: &ToastConfig,
    active_len: usize,
    pending_len: usize,
) -> Result<(), RejectReason> {
    let allow_multiple = options.allow_multiple.unwrap_or(config.allow_multiple);
    if !allow_multiple && active_len > 0 {
        return Err(RejectReason::Busy);
    }
    if config.max_pending.is_some_and(|cap| pending_len >= cap) {
        return Err(RejectReason::PendingFull);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi() -> ToastConfig {
        ToastConfig {
            allow_multiple: true,
            ..ToastConfig::default()
        }
    }

    #[test]
    fn single_mode_admits_when_idle() {
        assert_eq!(check(&ToastOptions::new(), &ToastConfig::default(), 0, 0), Ok(()));
    }

    #[test]
    fn single_mode_rejects_when_busy() {
        assert_eq!(
            check(&ToastOptions::new(), &ToastConfig::default(), 1, 0),
            Err(RejectReason::Busy)
        );
    }

    #[test]
    fn request_override_beats_provider_default() {
        let options = ToastOptions::new().allow_multiple(true);
        assert_eq!(check(&options, &ToastConfig::default(), 3, 0), Ok(()));

        let options = ToastOptions::new().allow_multiple(false);
        assert_eq!(check(&options, &multi(), 1, 0), Err(RejectReason::Busy));
    }

    #[test]
    fn pending_queue_is_unbounded_by_default() {
        assert_eq!(check(&ToastOptions::new(), &multi(), 4, 10_000), Ok(()));
    }

    #[test]
    fn pending_cap_rejects_when_full() {
        let config = ToastConfig {
            max_pending: Some(2),
            ..multi()
        };
        assert_eq!(check(&ToastOptions::new(), &config, 4, 1), Ok(()));
        assert_eq!(
            check(&ToastOptions::new(), &config, 4, 2),
            Err(RejectReason::PendingFull)
        );
    }

    #[test]
    fn admission_accessors() {
        let admitted = Admission::Admitted(ToastId::from("a"));
        assert!(admitted.is_admitted());
        assert_eq!(admitted.id(), Some(&ToastId::from("a")));
        assert!(Admission::Rejected(RejectReason::Busy).into_id().is_none());
    }
}
