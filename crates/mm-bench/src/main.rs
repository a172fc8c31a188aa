use std::path::Path;
use std::process::ExitCode;

use log::{error, info};
use mm_bench::{logging, run, BenchConfig};

fn main() -> ExitCode {
    let config = match std::env::args_os().nth(1) {
        Some(path) => match BenchConfig::load(Path::new(&path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("failed to load config {}: {}", Path::new(&path).display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => BenchConfig::default(),
    };

    if let Err(e) = logging::init(config.log.level) {
        eprintln!("failed to install logger: {}", e);
    }

    info!(
        "multiplying [{}x{}] @ [{}x{}] for {} iterations in {}",
        config.matrices.rows,
        config.matrices.inner,
        config.matrices.inner,
        config.matrices.rows,
        config.run.iterations,
        config.run.data_dir.display()
    );

    match run(&config) {
        Ok(summary) => {
            info!(
                "Average reference multiplication time: {:.4} seconds",
                summary.average_reference()
            );
            info!(
                "Average row-parallel multiplication time: {:.4} seconds",
                summary.average_parallel()
            );
            info!(
                "Average sequential multiplication time: {:.4} seconds",
                summary.average_sequential()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
