use thiserror::Error;

/// Feil som når kalleren. Manglende sprangsjikt er IKKE en feil –
/// det representeres som `None` i et vellykket resultat.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// For få målinger for stasjonen. Kan ikke prøves på nytt før mer
    /// data er lastet opp.
    #[error("Not enough data points for analysis (minimum {min}, got {got})")]
    InsufficientData { got: usize, min: usize },
}
