/// Error type for building or decoding question records.
#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    /// Weights are enabled but do not pair up one-to-one with the choices.
    #[error("Weight count mismatch: {choices} choices but {weights} weights")]
    WeightCountMismatch { choices: usize, weights: usize },

    /// Weights are disabled but the record still carries some.
    #[error("Weights are disabled but {weights} weights were given")]
    UnexpectedWeights { weights: usize },

    /// The JSON payload could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuestionError {
    /// Check if this error is a violation of the choice/weight pairing.
    pub fn is_weight_mismatch(&self) -> bool {
        matches!(
            self,
            Self::WeightCountMismatch { .. } | Self::UnexpectedWeights { .. }
        )
    }
}
