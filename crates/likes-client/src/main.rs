//! likes-toggle entry point
//!
//! Run with:
//! ```bash
//! LIKES_API_BASE_URL=http://localhost:5000 cargo run -p likes-client -- 42 43
//! ```
//!
//! Toggles the like on every message id given on the command line.
//! Configuration is loaded from environment variables.

use likes_client::{HttpToggleLikeApi, ToggleLikeApi};
use likes_common::{try_init_tracing_with_config, AppError, AppResult, LikesConfig, TracingConfig};
use likes_core::MessageId;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, code = e.error_code(), "likes-toggle failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let config = LikesConfig::from_env()?;

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let ids = std::env::args()
        .skip(1)
        .map(|arg| MessageId::parse(&arg).map_err(|e| AppError::invalid_input(format!("{arg:?}: {e}"))))
        .collect::<AppResult<Vec<_>>>()?;
    if ids.is_empty() {
        return Err(AppError::invalid_input("usage: likes-toggle <message-id>..."));
    }

    info!(
        env = ?config.app.env,
        base_url = %config.api.base_url,
        count = ids.len(),
        "Configuration loaded"
    );

    let api = HttpToggleLikeApi::new(&config.api)?;
    let mut failures = 0_usize;

    for id in &ids {
        let result = api
            .toggle_like(id)
            .await
            .map_err(AppError::from)
            .and_then(|response| response.outcome().map_err(AppError::from));

        match result {
            Ok(outcome) => {
                info!(message_id = %id, %outcome, "Toggled like");
                println!("{id}\t{outcome}");
            }
            Err(e) => {
                warn!(message_id = %id, error = %e, code = e.error_code(), "Toggle failed");
                println!("{id}\terror: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(AppError::internal(std::io::Error::other(format!(
            "{failures} of {} toggles failed",
            ids.len()
        ))));
    }

    Ok(())
}
