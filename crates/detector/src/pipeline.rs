//! Detection pipeline - day-by-day orchestration
//!
//! ```text
//!   WarmingUp ──(first current day)──► Detecting ──(finish)──► Done
//! ```
//!
//! While warming up, each history day only updates the baseline. While
//! detecting, each day is scored against the baseline as it stood at the
//! end of the previous day, its documents are appended, and only then is
//! the baseline updated with that day.

use crate::baseline::{Vocabulary, VocabularyBaseline};
use crate::config::{DayErrorPolicy, DetectionConfig};
use crate::context::ContextWordMiner;
use crate::error::{DetectionError, Result};
use crate::frequency::DayFrequency;
use crate::primary::PrimaryWordDetector;
use crate::strength::WordStrength;
use crate::threshold::ThresholdPair;
use serde::{Deserialize, Serialize};
use trendwatch_core::{ContextDocument, DayBucket, DayLabel};

/// Pipeline lifecycle phase
///
/// The switch to `Detecting` is lazy: it happens on the first
/// [`DetectionPipeline::detect_day`] call, once every history day has been
/// folded in. A run with no current days goes from `WarmingUp` straight to
/// `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Folding history days into the baseline, no output
    WarmingUp,
    /// Scoring current days and emitting documents
    Detecting,
    /// Report taken, no further days accepted
    Done,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::WarmingUp => write!(f, "warming up"),
            Phase::Detecting => write!(f, "detecting"),
            Phase::Done => write!(f, "done"),
        }
    }
}

/// What happened to one processed day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayOutcome {
    /// History day folded into the baseline
    WarmedUp,
    /// Current day scored
    Detected {
        thresholds: ThresholdPair,
        primary_words: usize,
        documents: usize,
    },
    /// Day withheld under [`DayErrorPolicy::SkipDay`]
    Skipped { reason: String },
}

/// Per-day record kept in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub day: DayLabel,
    /// Phase the day was processed in
    pub phase: Phase,
    /// Token count of the day
    pub tokens: usize,
    pub outcome: DayOutcome,
}

/// Result of a detection run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Documents of all current days, in day order then primary rank
    pub documents: Vec<ContextDocument>,
    /// One entry per processed day, history first
    pub days: Vec<DaySummary>,
}

impl DetectionReport {
    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents mined from a given day
    pub fn documents_for<'a>(&'a self, day: &'a str) -> impl Iterator<Item = &'a ContextDocument> {
        self.documents.iter().filter(move |d| d.day == day)
    }

    /// Days withheld from the output
    pub fn skipped_days(&self) -> impl Iterator<Item = &DaySummary> {
        self.days
            .iter()
            .filter(|d| matches!(d.outcome, DayOutcome::Skipped { .. }))
    }
}

/// Owns the baseline and drives days through the detection steps
pub struct DetectionPipeline {
    config: DetectionConfig,
    baseline: VocabularyBaseline,
    detector: PrimaryWordDetector,
    miner: ContextWordMiner,
    phase: Phase,
    report: DetectionReport,
}

impl DetectionPipeline {
    /// Create a pipeline with every vocabulary word at a zero baseline
    pub fn new(config: DetectionConfig, vocabulary: &Vocabulary) -> Result<Self> {
        config.validate()?;
        let baseline = VocabularyBaseline::from_vocabulary(vocabulary, config.smoothing()?);

        Ok(Self {
            detector: PrimaryWordDetector::new(config.primary_fraction),
            miner: ContextWordMiner::new(config.context_limit),
            config,
            baseline,
            phase: Phase::WarmingUp,
            report: DetectionReport::default(),
        })
    }

    /// Run a full detection: build the vocabulary, warm up on `history`,
    /// detect on `current`.
    ///
    /// Day failures are handled according to `config.on_day_error`. Under
    /// [`DayErrorPolicy::Abort`] only the error is returned and the days
    /// processed before it are dropped. To keep them, drive the pipeline
    /// with [`warm_up_day`](Self::warm_up_day) and
    /// [`detect_day`](Self::detect_day): a failed day leaves the pipeline
    /// usable, and [`finish`](Self::finish) still returns everything
    /// appended so far.
    pub fn run(
        config: DetectionConfig,
        history: &[DayBucket],
        current: &[DayBucket],
    ) -> Result<DetectionReport> {
        let vocabulary = Vocabulary::build(history, current);
        let mut pipeline = Self::new(config, &vocabulary)?;

        log::info!(
            "Warming up baseline over {} history days ({} words)",
            history.len(),
            vocabulary.len()
        );
        for bucket in history {
            if let Err(e) = pipeline.warm_up_day(bucket) {
                pipeline.handle_day_error(bucket, e)?;
            }
        }

        for bucket in current {
            if let Err(e) = pipeline.detect_day(bucket) {
                pipeline.handle_day_error(bucket, e)?;
            }
        }

        pipeline.finish()
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Baseline as accumulated so far
    pub fn baseline(&self) -> &VocabularyBaseline {
        &self.baseline
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Documents emitted so far
    pub fn documents(&self) -> &[ContextDocument] {
        &self.report.documents
    }

    /// Fold one history day into the baseline
    pub fn warm_up_day(&mut self, bucket: &DayBucket) -> Result<()> {
        self.expect_phase(Phase::WarmingUp)?;

        let frequency = DayFrequency::compute(bucket)?;
        self.baseline.update(&frequency);

        log::debug!(
            "Warm-up day {}: {} tokens, {} distinct words",
            bucket.day(),
            frequency.total_tokens(),
            frequency.len()
        );
        self.report.days.push(DaySummary {
            day: bucket.day().to_string(),
            phase: Phase::WarmingUp,
            tokens: frequency.total_tokens(),
            outcome: DayOutcome::WarmedUp,
        });
        Ok(())
    }

    /// Score one current day and append its documents.
    ///
    /// The first call ends the warm-up. All-or-nothing: on error nothing is
    /// appended and the baseline does not see the day. Returns the number
    /// of documents appended.
    pub fn detect_day(&mut self, bucket: &DayBucket) -> Result<usize> {
        self.enter_detection()?;

        let frequency = DayFrequency::compute(bucket)?;
        let strength = WordStrength::score(&self.baseline, &frequency);
        let thresholds = ThresholdPair::compute(&strength, &self.config.threshold)?;
        let primaries = self.detector.detect(&frequency, &strength, thresholds.alpha);
        let documents =
            self.miner
                .mine(&frequency, &strength, thresholds.w, &primaries, bucket)?;

        log::debug!(
            "Day {}: {} tokens, Q1={:.4} Q2={:.4} Q3={:.4}, w={:.4}, alpha={:.4}, {} primary, {} documents",
            bucket.day(),
            frequency.total_tokens(),
            thresholds.quartiles.q1,
            thresholds.quartiles.q2,
            thresholds.quartiles.q3,
            thresholds.w,
            thresholds.alpha,
            primaries.len(),
            documents.len()
        );

        let count = documents.len();
        self.report.documents.extend(documents);
        self.report.days.push(DaySummary {
            day: bucket.day().to_string(),
            phase: Phase::Detecting,
            tokens: frequency.total_tokens(),
            outcome: DayOutcome::Detected {
                thresholds,
                primary_words: primaries.len(),
                documents: count,
            },
        });

        // the day's own frequencies only reach the baseline after scoring
        self.baseline.update(&frequency);
        Ok(count)
    }

    /// End the run and take the report
    pub fn finish(&mut self) -> Result<DetectionReport> {
        if self.phase == Phase::Done {
            return Err(DetectionError::InvalidPhase {
                expected: Phase::Detecting,
                actual: Phase::Done,
            });
        }
        self.phase = Phase::Done;

        let report = std::mem::take(&mut self.report);
        log::info!(
            "Detection complete: {} documents over {} days ({} skipped)",
            report.len(),
            report.days.len(),
            report.skipped_days().count()
        );
        Ok(report)
    }

    /// Apply the day-error policy to a failed day
    fn handle_day_error(&mut self, bucket: &DayBucket, error: DetectionError) -> Result<()> {
        if self.config.on_day_error == DayErrorPolicy::Abort || !error.is_day_local() {
            return Err(error);
        }

        log::warn!("Skipping day {}: {}", bucket.day(), error);
        self.report.days.push(DaySummary {
            day: bucket.day().to_string(),
            phase: self.phase,
            tokens: bucket.token_count(),
            outcome: DayOutcome::Skipped {
                reason: error.to_string(),
            },
        });
        Ok(())
    }

    fn enter_detection(&mut self) -> Result<()> {
        match self.phase {
            Phase::WarmingUp => {
                log::info!(
                    "Warm-up finished after {} days, detecting",
                    self.baseline.days_applied()
                );
                self.phase = Phase::Detecting;
                Ok(())
            }
            Phase::Detecting => Ok(()),
            Phase::Done => Err(DetectionError::InvalidPhase {
                expected: Phase::Detecting,
                actual: Phase::Done,
            }),
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DetectionError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(label: &str, texts: &[&str]) -> DayBucket {
        DayBucket::from_texts(label, texts.iter().copied())
    }

    #[test]
    fn test_phase_transitions() {
        let history = vec![day("h1", &["a b c"])];
        let current = vec![day("c1", &["a b c d"])];
        let vocab = Vocabulary::build(&history, &current);
        let mut pipeline = DetectionPipeline::new(DetectionConfig::default(), &vocab).unwrap();

        assert_eq!(pipeline.phase(), Phase::WarmingUp);
        pipeline.warm_up_day(&history[0]).unwrap();
        assert_eq!(pipeline.phase(), Phase::WarmingUp);

        // too few distinct scores, but the phase still advances
        assert!(pipeline.detect_day(&current[0]).is_err());
        assert_eq!(pipeline.phase(), Phase::Detecting);

        assert_eq!(
            pipeline.warm_up_day(&history[0]),
            Err(DetectionError::InvalidPhase {
                expected: Phase::WarmingUp,
                actual: Phase::Detecting,
            })
        );

        pipeline.finish().unwrap();
        assert_eq!(pipeline.phase(), Phase::Done);
        assert!(pipeline.detect_day(&current[0]).is_err());
        assert!(pipeline.finish().is_err());
    }

    #[test]
    fn test_failed_day_leaves_baseline_untouched() {
        let current = vec![day("c1", &["solo"])];
        let vocab = Vocabulary::build(&[], &current);
        let mut pipeline = DetectionPipeline::new(DetectionConfig::default(), &vocab).unwrap();

        let err = pipeline.detect_day(&current[0]).unwrap_err();
        assert!(matches!(err, DetectionError::InsufficientData { .. }));
        assert_eq!(pipeline.baseline().get("solo"), 0.0);
        assert_eq!(pipeline.baseline().days_applied(), 0);
        assert!(pipeline.documents().is_empty());
    }

    #[test]
    fn test_failed_day_keeps_earlier_documents() {
        let history: Vec<DayBucket> = (0..30)
            .map(|i| {
                let mut b = day(&format!("h{:02}", i), &["the cat sat", "the dog ran", "a bird flew"]);
                if i == 0 {
                    b.push("quake coast");
                }
                b
            })
            .collect();
        let burst = day(
            "c1",
            &[
                "the cat sat",
                "the dog ran",
                "a bird flew",
                "quake hits coast",
                "quake coast damage",
                "quake alert",
            ],
        );
        let lonely = day("c2", &["solo"]);
        let config = DetectionConfig {
            primary_fraction: 1.0,
            ..Default::default()
        };

        let aborted = DetectionPipeline::run(
            config.clone(),
            &history,
            &[burst.clone(), lonely.clone()],
        );
        assert!(matches!(aborted, Err(DetectionError::InsufficientData { .. })));

        let vocab = Vocabulary::build(&history, &[burst.clone(), lonely.clone()]);
        let mut pipeline = DetectionPipeline::new(config, &vocab).unwrap();
        for bucket in &history {
            pipeline.warm_up_day(bucket).unwrap();
        }
        assert_eq!(pipeline.detect_day(&burst).unwrap(), 1);
        assert!(pipeline.detect_day(&lonely).is_err());

        let report = pipeline.finish().unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.documents[0].primary(), "quake");
        assert_eq!(report.documents[0].day, "c1");
    }

    #[test]
    fn test_no_current_days_skips_detecting() {
        let history = vec![day("h1", &["a b c"]), day("h2", &["a b"])];
        let vocab = Vocabulary::build(&history, &[]);
        let mut pipeline = DetectionPipeline::new(DetectionConfig::default(), &vocab).unwrap();
        for bucket in &history {
            pipeline.warm_up_day(bucket).unwrap();
        }
        assert_eq!(pipeline.phase(), Phase::WarmingUp);

        let report = pipeline.finish().unwrap();
        assert_eq!(pipeline.phase(), Phase::Done);
        assert!(report.is_empty());
        assert!(report.days.iter().all(|d| d.phase == Phase::WarmingUp));

        let via_run = DetectionPipeline::run(DetectionConfig::default(), &history, &[]).unwrap();
        assert_eq!(via_run, report);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DetectionConfig {
            smoothing_factor: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            DetectionPipeline::new(config, &Vocabulary::default()),
            Err(DetectionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::WarmingUp.to_string(), "warming up");
        assert_eq!(Phase::Done.to_string(), "done");
    }
}
