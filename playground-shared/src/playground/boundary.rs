use thiserror::Error;

/// Error raised on purpose by the buggy child of the boundary demo.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("💥 Intentional error from BuggyComponent!")]
pub struct IntentionalFailure;

/// Render step of the buggy child: fails whenever asked to.
///
/// # Errors
/// Returns [`IntentionalFailure`] when `should_fail` is set.
pub fn buggy_render(should_fail: bool) -> Result<&'static str, IntentionalFailure> {
    if should_fail {
        Err(IntentionalFailure)
    } else {
        Ok("✅ Component rendered without errors.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_until_told_to_fail() {
        assert!(buggy_render(false).is_ok());
        let err = buggy_render(true).unwrap_err();
        assert_eq!(err.to_string(), "💥 Intentional error from BuggyComponent!");
    }
}
