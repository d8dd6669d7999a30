use tracing::{error, info};

use crate::{
    args::{BenchArgs, Mode},
    bench::{self, DownloadPlan, Endpoint, UploadPlan},
    content::{Alphabet, ContentGenerator},
    error::{AppError, AppResult},
    metrics::{LatencySamples, Operation},
};

use super::summary::{AbortNote, print_summary};

/// Run the benchmark selected by `args.mode` and print its statistics.
pub(crate) async fn run_bench(args: &BenchArgs) -> AppResult<()> {
    match args.mode {
        Mode::Upload => run_upload_mode(args).await,
        Mode::Download => run_download_mode(args).await,
    }
}

async fn run_upload_mode(args: &BenchArgs) -> AppResult<()> {
    // Alphabet problems are configuration errors and must surface before any I/O.
    let alphabet = resolve_alphabet(args.alphabet.as_deref())?;
    let endpoint = Endpoint::new(&args.host, args.port)?;
    let client = bench::build_client()?;

    let plan = UploadPlan {
        file_size: args.file_size,
        file_count: args.file_count.get(),
        manifest: args.manifest.clone(),
        scratch_dir: args.scratch_dir.clone(),
    };
    let mut generator = ContentGenerator::new(alphabet);
    let mut samples = LatencySamples::new(Operation::Upload);

    let result =
        bench::run_upload(&client, &endpoint, &plan, &mut generator, &mut samples).await;
    finish(&samples, result, Some(plan.file_count))
}

async fn run_download_mode(args: &BenchArgs) -> AppResult<()> {
    let endpoint = Endpoint::new(&args.host, args.port)?;
    let client = bench::build_client()?;

    let plan = DownloadPlan {
        manifest: args.manifest.clone(),
        download_dir: args.download_dir.clone(),
    };
    let mut samples = LatencySamples::new(Operation::Download);

    let result = bench::run_download(&client, &endpoint, &plan, &mut samples).await;
    finish(&samples, result, None)
}

fn resolve_alphabet(alphabet: Option<&str>) -> AppResult<Alphabet> {
    alphabet.map_or_else(
        || Ok(Alphabet::standard()),
        |symbols| Alphabet::new(symbols.as_bytes()).map_err(AppError::config),
    )
}

/// Statistics are printed for every sample gathered, even when the run aborts.
fn finish(samples: &LatencySamples, result: AppResult<()>, expected: Option<u64>) -> AppResult<()> {
    let summary = samples.summary();
    match result {
        Ok(()) => {
            info!("{} run finished", summary.operation.label());
            print_summary(&summary, None);
            Ok(())
        }
        Err(err) => {
            if err.is_unexpected_status() {
                error!("Storage service rejected the request: {}", err);
            } else {
                error!("Run aborted: {}", err);
            }
            let note = AbortNote {
                completed: summary.count,
                expected,
            };
            print_summary(&summary, Some(&note));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn resolve_alphabet_defaults_to_standard() -> Result<(), String> {
        let alphabet = resolve_alphabet(None).map_err(|err| err.to_string())?;
        if alphabet != Alphabet::standard() {
            return Err("Expected the standard alphabet".to_owned());
        }
        let custom = resolve_alphabet(Some("ACGT")).map_err(|err| err.to_string())?;
        if custom.as_bytes() != b"ACGT" {
            return Err("Expected the custom alphabet".to_owned());
        }
        Ok(())
    }

    #[test]
    fn resolve_alphabet_rejects_single_symbol() -> Result<(), String> {
        match resolve_alphabet(Some("x")) {
            Err(AppError::Config(ConfigError::AlphabetSize { len: 1 })) => Ok(()),
            other => Err(format!("Expected AlphabetSize, got {:?}", other)),
        }
    }

    #[test]
    fn resolve_alphabet_rejects_repeated_symbol() -> Result<(), String> {
        match resolve_alphabet(Some("aab")) {
            Err(AppError::Config(ConfigError::DuplicateSymbol { byte: b'a' })) => Ok(()),
            other => Err(format!("Expected DuplicateSymbol, got {:?}", other)),
        }
    }

    #[test]
    fn finish_propagates_failure() -> Result<(), String> {
        let samples = LatencySamples::new(Operation::Download);
        let failure = Err(AppError::validation(
            crate::error::ValidationError::EmptyHost,
        ));
        if finish(&samples, failure, None).is_ok() {
            return Err("Expected the failure to propagate".to_owned());
        }
        if finish(&samples, Ok(()), None).is_err() {
            return Err("Expected success".to_owned());
        }
        Ok(())
    }
}
