//! `folio serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::DEFAULT_CONFIG_PATH;
use folio_server::{ServerConfig, run_server};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to the portfolio document.
    #[arg(short, long, env = "FOLIO_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Host to bind to.
    #[arg(long, env = "FOLIO_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to.
    #[arg(short, long, env = "FOLIO_PORT", default_value_t = 8501)]
    port: u16,

    /// Enable verbose output (request and fetch logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        Output::new().serve_banner(&self.host, self.port, &self.config);

        let server_config = ServerConfig {
            host: self.host,
            port: self.port,
            config_path: self.config,
            verbose: self.verbose,
            version: version.to_owned(),
        };
        run_server(server_config).await?;

        Ok(())
    }
}
