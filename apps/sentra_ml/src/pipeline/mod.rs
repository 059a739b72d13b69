mod classifier;
mod tfidf;
mod vectorizer;

pub use classifier::LinearClassifier;
pub use tfidf::TfidfTransform;
pub use vectorizer::CountVectorizer;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::PredictError;

/// The three stages of the trained artifact, in application order:
/// text -> term counts -> tf-idf features -> label.
#[derive(Debug, Deserialize)]
pub struct Pipeline {
    pub vectorizer: CountVectorizer,
    pub tfidf: TfidfTransform,
    pub classifier: LinearClassifier,
}

impl Pipeline {
    /// Reads and deserializes the artifact, then cross-checks the stage
    /// dimensions so prediction can assume a consistent model.
    pub fn load(path: &Path) -> Result<Self, PredictError> {
        let file = File::open(path)
            .map_err(|e| PredictError::Artifact(format!("{}: {}", path.display(), e)))?;
        let pipeline: Pipeline = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| PredictError::Artifact(format!("{}: {}", path.display(), e)))?;
        pipeline.validate()?;
        Ok(pipeline)
    }

    fn validate(&self) -> Result<(), PredictError> {
        let dims = self.tfidf.idf.len();
        if let Some(&col) = self.vectorizer.vocabulary.values().max() {
            if col >= dims {
                return Err(PredictError::Artifact(format!(
                    "vocabulary column {col} outside {dims} idf weights"
                )));
            }
        }
        if self.classifier.coef.is_empty() {
            return Err(PredictError::Artifact("classifier has no coefficient rows".into()));
        }
        if self.classifier.coef.iter().any(|row| row.len() != dims) {
            return Err(PredictError::Artifact(format!(
                "classifier rows do not all have {dims} coefficients"
            )));
        }
        if self.classifier.coef.len() != self.classifier.intercept.len() {
            return Err(PredictError::Artifact(
                "one intercept per coefficient row expected".into(),
            ));
        }
        let rows = self.classifier.coef.len();
        let classes = self.classifier.classes.len();
        // Binary models carry a single row for two classes.
        if !(rows == 1 && classes == 2) && rows != classes {
            return Err(PredictError::Artifact(format!(
                "{classes} classes for {rows} coefficient rows"
            )));
        }
        Ok(())
    }

    /// Runs one text through all three stages.
    pub fn predict(&self, text: &str) -> Result<Value, PredictError> {
        let counts = self.vectorizer.transform(text);
        let features = self.tfidf.transform(&counts)?;
        self.classifier.predict(&features)
    }
}
