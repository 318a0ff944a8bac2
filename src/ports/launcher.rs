use crate::domain::{AppError, Invocation};

/// Execution step for one phase's worth of invocations.
///
/// `logs` is either empty (no redirection) or pairs up with `calls` one to
/// one. Implementations must not return before every launch of the phase has
/// completed; the caller relies on this as the barrier between phases.
pub trait PhaseLauncher {
    fn launch(&self, calls: &[Invocation], logs: &[String]) -> Result<(), AppError>;
}

/// Reject a non-empty log list that does not pair up with the calls.
pub(crate) fn check_pairing(calls: &[Invocation], logs: &[String]) -> Result<(), AppError> {
    if !logs.is_empty() && calls.len() != logs.len() {
        return Err(AppError::LogCountMismatch { calls: calls.len(), logs: logs.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlanOptions;

    fn invocations(count: u32) -> Vec<Invocation> {
        PlanOptions {
            config_ref: "config.py".to_string(),
            run: Some(count),
            seeds: (0..count as i64).collect(),
            ..Default::default()
        }
        .resolve()
        .run_invocations()
    }

    #[test]
    fn empty_log_list_means_no_redirection_and_passes() {
        assert!(check_pairing(&invocations(3), &[]).is_ok());
    }

    #[test]
    fn paired_log_list_passes() {
        let logs = vec!["a.log".to_string(), "b.log".to_string()];
        assert!(check_pairing(&invocations(2), &logs).is_ok());
    }

    #[test]
    fn mismatched_log_list_is_rejected() {
        let logs = vec!["a.log".to_string()];
        let result = check_pairing(&invocations(3), &logs);
        assert!(matches!(result, Err(AppError::LogCountMismatch { calls: 3, logs: 1 })));
    }
}
