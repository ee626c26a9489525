pub type WheelResult<T> = Result<T, WheelError>;

#[derive(thiserror::Error, Debug)]
pub enum WheelError {
    /// `spin` was requested with zero remaining attendees. Advisory: the
    /// caller shows a "no attendees left" notice; session state is untouched.
    #[error("empty pool: {0}")]
    EmptyPool(String),

    #[error("session error: {0}")]
    Session(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WheelError {
    pub fn empty_pool(msg: impl Into<String>) -> Self {
        Self::EmptyPool(msg.into())
    }

    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            WheelError::empty_pool("x")
                .to_string()
                .contains("empty pool:")
        );
        assert!(WheelError::session("x").to_string().contains("session error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = WheelError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
