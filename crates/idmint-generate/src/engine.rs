use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorContext, GeneratorRegistry};
use crate::model::{Batch, GenerateOptions, GeneratorRequest};

/// Entry point for generating seeded batches of identifiers.
#[derive(Debug, Clone)]
pub struct BatchEngine {
    options: GenerateOptions,
}

impl BatchEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate `count` rows with one column per request.
    ///
    /// Every column draws from its own RNG seeded by the batch seed and the
    /// column position, so adding a column never changes the others.
    pub fn run(
        &self,
        registry: &GeneratorRegistry,
        requests: &[GeneratorRequest],
    ) -> Result<Batch, GenerationError> {
        if requests.is_empty() {
            return Err(GenerationError::InvalidParams(
                "at least one generator is required".to_string(),
            ));
        }

        let start = Instant::now();
        let generators = requests
            .iter()
            .map(|request| -> Result<&dyn Generator, GenerationError> {
                let generator = registry.require(&request.id)?;
                generator.validate(request.params.as_ref())?;
                Ok(generator)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let GenerateOptions {
            seed,
            count,
            ref locale,
        } = self.options;

        info!(
            seed,
            rows = count,
            columns = requests.len(),
            locale = %locale,
            "batch started"
        );

        let ctx = GeneratorContext { locale };
        let mut rows: Vec<Vec<String>> = (0..count)
            .map(|_| Vec::with_capacity(requests.len()))
            .collect();

        for (index, (request, generator)) in requests.iter().zip(generators).enumerate() {
            let column_seed = hash_seed(seed, &column_key(index, &request.id));
            debug!(generator = %request.id, index, column_seed, "generating column");

            let mut rng = ChaCha8Rng::seed_from_u64(column_seed);
            for row in &mut rows {
                row.push(generator.generate(&ctx, request.params.as_ref(), &mut rng)?);
            }
        }

        info!(
            rows = rows.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "batch finished"
        );

        Ok(Batch {
            seed,
            locale: locale.clone(),
            columns: requests.iter().map(|request| request.id.clone()).collect(),
            rows,
        })
    }
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

fn column_key(index: usize, id: &str) -> String {
    format!("{index}:{id}")
}
