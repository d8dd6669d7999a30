use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Entropy source failed: {source}")]
    Entropy {
        #[source]
        source: rand::Error,
    },
}
