use std::path::Path;
use std::process::ExitCode;

use route_uploader::{
    processors::RunState,
    util::secrets::{Secrets, SecretsError},
    App,
};

#[tokio::main]
async fn main() -> ExitCode {
    println!("Campus Route Uploader");
    println!("{}", "=".repeat(50));

    let secrets = match Secrets::read() {
        Ok(secrets) => secrets,
        Err(err @ SecretsError::NotFound(_)) => {
            eprintln!("ERROR: {}", err);
            eprintln!();
            eprintln!("To connect to the route store:");
            eprintln!("1. Create secrets.toml in the working directory");
            eprintln!("2. Add the connection string: db_url = \"mongodb://...\"");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let app = match App::connect(&secrets).await {
        Ok(app) => app,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "all_routes.json".to_string());
    let report = app.upload_routes(Path::new(&source)).await;

    println!();
    println!(
        "Loaded: {}, Succeeded: {}, Failed: {}",
        report.loaded,
        report.succeeded,
        report.failed()
    );
    for failure in &report.failures {
        println!("  ✗ {}: {}", failure.route_id, failure.reason);
    }

    match report.state {
        RunState::Done => {
            println!("\n✓ Done!");
            ExitCode::SUCCESS
        }
        RunState::Cancelled => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
