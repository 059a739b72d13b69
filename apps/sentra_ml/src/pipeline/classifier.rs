use serde::Deserialize;
use serde_json::Value;

use crate::error::PredictError;

/// Linear decision function over the tf-idf features.
///
/// Two classes are encoded with a single coefficient row: a positive score
/// selects the second class. More classes use one row per class and argmax.
/// `classes` holds JSON values so string and integer label sets both pass
/// through untouched.
#[derive(Debug, Deserialize)]
pub struct LinearClassifier {
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
    pub classes: Vec<Value>,
}

impl LinearClassifier {
    pub fn predict(&self, features: &[(usize, f64)]) -> Result<Value, PredictError> {
        let scores = self.decision(features)?;
        let winner = if self.classes.len() == 2 && scores.len() == 1 {
            usize::from(scores[0] > 0.0)
        } else {
            scores
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| i)
                .ok_or(PredictError::Shape(0))?
        };
        self.classes
            .get(winner)
            .cloned()
            .ok_or(PredictError::Shape(winner))
    }

    fn decision(&self, features: &[(usize, f64)]) -> Result<Vec<f64>, PredictError> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, b)| {
                let mut score = *b;
                for &(col, v) in features {
                    let w = row.get(col).copied().ok_or(PredictError::Shape(col))?;
                    score += w * v;
                }
                Ok(score)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn binary_positive_score_selects_second_class() {
        let c = LinearClassifier {
            coef: vec![vec![1.0, -1.0]],
            intercept: vec![0.0],
            classes: vec![json!("negative"), json!("positive")],
        };
        assert_eq!(c.predict(&[(0, 1.0)]).unwrap(), json!("positive"));
        assert_eq!(c.predict(&[(1, 1.0)]).unwrap(), json!("negative"));
    }

    #[test]
    fn binary_zero_score_selects_first_class() {
        let c = LinearClassifier {
            coef: vec![vec![1.0]],
            intercept: vec![0.0],
            classes: vec![json!("negative"), json!("positive")],
        };
        assert_eq!(c.predict(&[]).unwrap(), json!("negative"));
    }

    #[test]
    fn multiclass_takes_argmax() {
        let c = LinearClassifier {
            coef: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![-1.0, -1.0]],
            intercept: vec![0.0, 0.5, 0.0],
            classes: vec![json!("a"), json!("b"), json!("c")],
        };
        assert_eq!(c.predict(&[(0, 2.0)]).unwrap(), json!("a"));
        assert_eq!(c.predict(&[(1, 0.4)]).unwrap(), json!("b"));
    }

    #[test]
    fn intercept_shifts_the_decision() {
        let c = LinearClassifier {
            coef: vec![vec![1.0]],
            intercept: vec![-2.0],
            classes: vec![json!("neg"), json!("pos")],
        };
        assert_eq!(c.predict(&[(0, 1.0)]).unwrap(), json!("neg"));
        assert_eq!(c.predict(&[(0, 3.0)]).unwrap(), json!("pos"));
    }
}
