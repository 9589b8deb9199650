/// A single whitespace-delimited token
pub type Word = String;

/// Calendar-day label, taken verbatim from the ingested records
pub type DayLabel = String;

/// Conditional co-occurrence probability in `[0, 1]`
pub type Probability = f64;
