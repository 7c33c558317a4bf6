//! Ranks historical questions to use as few-shot examples.
//!
//! Each candidate's score is its average feedback rating plus a jitter of
//! `temperature * (u - 0.5)`, with `u` drawn fresh for every candidate on
//! every call. Equal scores fall back to ascending question id.

use crate::error::Result;
use crate::models::question::RatedQuestion;
use crate::services::question_service::QuestionService;
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_EXAMPLE_LIMIT: usize = 25;
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ScoredExample {
    pub id: i32,
    pub text: String,
    pub avg_ranking: f64,
    pub random_factor: f64,
    pub score: f64,
}

/// Clamps the jitter scale into `[0, 1]`; NaN is treated as 0.
pub fn clamp_temperature(temperature: f64) -> f64 {
    if temperature.is_nan() {
        0.0
    } else {
        temperature.clamp(0.0, 1.0)
    }
}

pub fn rank_examples<R: Rng + ?Sized>(
    candidates: Vec<RatedQuestion>,
    limit: usize,
    temperature: f64,
    rng: &mut R,
) -> Vec<ScoredExample> {
    let temperature = clamp_temperature(temperature);

    let mut scored: Vec<ScoredExample> = candidates
        .into_iter()
        .map(|candidate| {
            let random_factor = temperature * (rng.gen::<f64>() - 0.5);
            ScoredExample {
                id: candidate.id,
                text: candidate.text,
                avg_ranking: candidate.avg_ranking,
                random_factor,
                score: candidate.avg_ranking + random_factor,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.id.cmp(&b.id)));
    scored.truncate(limit);
    scored
}

#[derive(Clone)]
pub struct ExampleSelector {
    questions: QuestionService,
}

impl ExampleSelector {
    pub fn new(questions: QuestionService) -> Self {
        Self { questions }
    }

    pub async fn select(&self, limit: usize, temperature: f64) -> Result<Vec<ScoredExample>> {
        let candidates = self.questions.rated_questions().await?;
        let total = candidates.len();
        let examples = rank_examples(candidates, limit, temperature, &mut rand::thread_rng());
        tracing::debug!(total, selected = examples.len(), temperature, "Examples ranked");
        Ok(examples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rated(id: i32, avg: f64) -> RatedQuestion {
        RatedQuestion {
            id,
            text: format!("question {}", id),
            avg_ranking: avg,
        }
    }

    fn sample() -> Vec<RatedQuestion> {
        vec![
            rated(1, 0.0),
            rated(2, 1.0),
            rated(3, -1.0),
            rated(4, 0.5),
            rated(5, 1.0),
        ]
    }

    #[test]
    fn zero_temperature_scores_by_average_only() {
        let mut rng = StdRng::seed_from_u64(7);
        let ranked = rank_examples(sample(), 10, 0.0, &mut rng);

        let ids: Vec<i32> = ranked.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 5, 4, 1, 3]);
        for example in &ranked {
            assert_eq!(example.random_factor, 0.0);
            assert_eq!(example.score, example.avg_ranking);
        }
    }

    #[test]
    fn zero_temperature_is_reproducible_across_calls() {
        let first = rank_examples(sample(), 10, 0.0, &mut StdRng::seed_from_u64(1));
        let second = rank_examples(sample(), 10, 0.0, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn ties_break_on_ascending_id() {
        let candidates = vec![rated(9, 0.0), rated(3, 0.0), rated(6, 0.0)];
        let ranked = rank_examples(candidates, 10, 0.0, &mut StdRng::seed_from_u64(0));
        let ids: Vec<i32> = ranked.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 6, 9]);
    }

    #[test]
    fn result_is_truncated_to_limit() {
        let ranked = rank_examples(sample(), 2, 0.0, &mut StdRng::seed_from_u64(0));
        assert_eq!(ranked.len(), 2);

        let none = rank_examples(sample(), 0, 0.5, &mut StdRng::seed_from_u64(0));
        assert!(none.is_empty());
    }

    #[test]
    fn jitter_stays_within_half_temperature() {
        let mut rng = StdRng::seed_from_u64(42);
        let candidates: Vec<RatedQuestion> = (0..200).map(|id| rated(id, 0.0)).collect();
        let ranked = rank_examples(candidates, 200, 0.8, &mut rng);

        assert_eq!(ranked.len(), 200);
        for example in &ranked {
            assert!(example.random_factor >= -0.4 && example.random_factor < 0.4);
            assert_eq!(example.score, example.avg_ranking + example.random_factor);
        }
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn jitter_differs_between_invocations() {
        let mut rng = StdRng::seed_from_u64(5);
        let first = rank_examples(sample(), 10, 1.0, &mut rng);
        let second = rank_examples(sample(), 10, 1.0, &mut rng);
        let factors = |ranked: &[ScoredExample]| {
            ranked
                .iter()
                .map(|e| (e.id, e.random_factor))
                .collect::<Vec<_>>()
        };
        assert_ne!(factors(&first[..]), factors(&second[..]));
    }

    #[test]
    fn temperature_is_clamped() {
        assert_eq!(clamp_temperature(-3.0), 0.0);
        assert_eq!(clamp_temperature(7.0), 1.0);
        assert_eq!(clamp_temperature(f64::NAN), 0.0);
        assert_eq!(clamp_temperature(0.25), 0.25);

        let ranked = rank_examples(sample(), 10, -1.0, &mut StdRng::seed_from_u64(3));
        assert!(ranked.iter().all(|e| e.random_factor == 0.0));
    }
}
