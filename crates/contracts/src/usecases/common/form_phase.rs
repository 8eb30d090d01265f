/// Lifecycle of one form between submits.
///
/// ```text
/// Idle -> Validating -> Rejected -> Idle
///                    -> Accepted -> Confirming -> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Rejected,
    Accepted,
    Confirming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Reject,
    Accept,
    /// Confirmation banner shown.
    Confirm,
    /// Validation alert closed by the user.
    Acknowledge,
    /// Banner closed by timeout, close button, backdrop click or Escape.
    Dismiss,
}

impl FormPhase {
    /// Apply `event`. Events that don't fit the current phase are ignored.
    pub fn next(self, event: FormEvent) -> FormPhase {
        use FormEvent::*;
        use FormPhase::*;

        match (self, event) {
            (Idle, Submit) => Validating,
            (Validating, Reject) => Rejected,
            (Validating, Accept) => Accepted,
            (Rejected, Acknowledge) => Idle,
            (Accepted, Confirm) => Confirming,
            (Confirming, Dismiss) => Idle,
            // A new submit while the banner is still up starts over.
            (Confirming, Submit) => Validating,
            (phase, _) => phase,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormPhase::Idle => "idle",
            FormPhase::Validating => "validating",
            FormPhase::Rejected => "rejected",
            FormPhase::Accepted => "accepted",
            FormPhase::Confirming => "confirming",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_path() {
        let phase = FormPhase::Idle
            .next(FormEvent::Submit)
            .next(FormEvent::Reject);
        assert_eq!(phase, FormPhase::Rejected);
        assert_eq!(phase.next(FormEvent::Acknowledge), FormPhase::Idle);
    }

    #[test]
    fn test_accepted_path() {
        let phase = FormPhase::Idle
            .next(FormEvent::Submit)
            .next(FormEvent::Accept)
            .next(FormEvent::Confirm);
        assert_eq!(phase, FormPhase::Confirming);
        assert_eq!(phase.next(FormEvent::Dismiss), FormPhase::Idle);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let idle = FormPhase::Confirming.next(FormEvent::Dismiss);
        assert_eq!(idle.next(FormEvent::Dismiss), FormPhase::Idle);
    }

    #[test]
    fn test_out_of_order_events_are_ignored() {
        assert_eq!(FormPhase::Idle.next(FormEvent::Accept), FormPhase::Idle);
        assert_eq!(
            FormPhase::Validating.next(FormEvent::Dismiss),
            FormPhase::Validating
        );
        assert_eq!(
            FormPhase::Rejected.next(FormEvent::Submit),
            FormPhase::Rejected
        );
    }
}
