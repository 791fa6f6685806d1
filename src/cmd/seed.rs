//! Default command: generate the dataset.

use super::GenerateArgs;
use anyhow::Context;
use store_seed::progress::row_progress_bar;
use store_seed::{
    FakeProvider, GenerateError, GenerateStats, Generator, GeneratorConfig, SeedYamlConfig,
    StatementWriter,
};

/// Build the effective configuration: defaults, then YAML file, then flags
pub fn resolve_config(args: &GenerateArgs) -> anyhow::Result<GeneratorConfig> {
    let mut config = GeneratorConfig::default();

    if let Some(ref path) = args.config {
        let yaml = SeedYamlConfig::load(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?;
        config.merge_yaml(&yaml);
    }

    if let Some(n) = args.customers {
        config.customer_count = n;
    }
    if let Some(m) = args.orders {
        config.order_count = m;
    }
    if let Some(p) = args.products {
        config.product_count = p;
    }
    if let Some(k) = args.max_products_per_order {
        config.max_products_per_order = k;
    }
    if args.schema {
        config.include_schema = true;
    }

    Ok(config)
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;

    let mut gen = Generator::new(config, FakeProvider::thread_local(), rand::rng())?;

    let pb = if args.progress {
        let pb = row_progress_bar(gen.total_units());
        let pb_clone = pb.clone();
        gen = gen.with_progress(move |n| pb_clone.set_position(n));
        Some(pb)
    } else {
        None
    };

    let mut writer =
        StatementWriter::open(args.output.as_deref()).with_context(|| match args.output {
            Some(ref path) => format!("failed to create output file {}", path.display()),
            None => "failed to open stdout".to_string(),
        })?;

    let result = gen.generate(&mut writer);

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let stats = match result {
        Ok(stats) => stats,
        // Downstream reader closed stdout (e.g. `| head`); stop quietly
        Err(ref e) if args.output.is_none() && is_broken_pipe(e) => {
            log::debug!("stdout closed by reader, stopping");
            return Ok(());
        }
        Err(e) => return Err(e).context("generation aborted"),
    };

    if args.verbose {
        print_summary(&stats);
    }
    if let Some(ref path) = args.output {
        if args.verbose || args.progress {
            eprintln!(
                "Wrote {} statements to {}",
                stats.total_statements(),
                path.display()
            );
        }
    }

    Ok(())
}

fn is_broken_pipe(err: &GenerateError) -> bool {
    matches!(err, GenerateError::Io(io) if io.kind() == std::io::ErrorKind::BrokenPipe)
}

fn print_summary(stats: &GenerateStats) {
    eprintln!();
    eprintln!("Seed Statistics:");
    eprintln!("  Customers: {}", stats.customers);
    eprintln!("  Orders: {}", stats.orders);
    if stats.products > 0 {
        eprintln!("  Products: {}", stats.products);
        eprintln!("  Order-product links: {}", stats.order_products);
    }
    if stats.schema_statements > 0 {
        eprintln!("  Schema statements: {}", stats.schema_statements);
    }
    eprintln!("  Total statements: {}", stats.total_statements());
    if stats.quoted_values > 0 {
        eprintln!();
        eprintln!(
            "  Warning: {} value(s) contain unescaped single quotes",
            stats.quoted_values
        );
    }
}
