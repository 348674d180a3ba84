use std::env;
use std::io;

use idmint_generate::generators::GeneratorRegistry;
use idmint_generate::output::csv::write_batch_csv;
use idmint_generate::{BatchEngine, GenerateOptions, GeneratorRequest};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let mut options = GenerateOptions::default();
    let mut requests = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => options.seed = args.next().ok_or("missing --seed value")?.parse()?,
            "--count" => options.count = args.next().ok_or("missing --count value")?.parse()?,
            "--locale" => options.locale = args.next().ok_or("missing --locale value")?,
            _ => requests.push(GeneratorRequest::new(arg)),
        }
    }

    if requests.is_empty() {
        requests = vec![
            GeneratorRequest::new("code.isbn"),
            GeneratorRequest::new("code.ean"),
            GeneratorRequest::new("code.imei"),
        ];
    }

    let batch = BatchEngine::new(options).run(&GeneratorRegistry::new(), &requests)?;
    write_batch_csv(io::stdout().lock(), &batch)?;
    Ok(())
}
