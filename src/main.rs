use clap::Parser;
use corpus_search::app::{run_interactive, write_results};
use corpus_search::config::toml_config::TomlConfig;
use corpus_search::config::LogFormat;
use corpus_search::utils::error::{exit_code, CorpusError};
use corpus_search::utils::{logger, validation::Validate};
use corpus_search::{renderer_for, source_from_config, CliConfig, Controls, SearchSession, Settings};

/// Reports a startup configuration error and exits; unreadable files exit with 3.
fn exit_on_config_error(context: &str, e: CorpusError) -> ! {
    tracing::error!("{}: {}", context, e);
    eprintln!("{}: {}", context, e);
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting corpus-search");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let file_config = match &cli.config {
        Some(path) => {
            let context = format!("Cannot use config file '{}'", path);
            let config = TomlConfig::from_file(path)
                .unwrap_or_else(|e| exit_on_config_error(&context, e));
            if let Err(e) = config.validate() {
                exit_on_config_error(&context, e);
            }
            Some(config)
        }
        None => None,
    };

    let settings = Settings::resolve(&cli, file_config.as_ref());
    if let Err(e) = settings.validate() {
        exit_on_config_error("Configuration validation failed", e);
    }

    let renderer = renderer_for(settings.format, settings.render.clone());
    let mut session = SearchSession::new(renderer, settings.render.language);

    // A broken source is reported like a failed fetch: empty corpus, visible status.
    match source_from_config(&settings) {
        Ok(source) => {
            session.load(source.as_ref()).await;
        }
        Err(e) => {
            tracing::error!("Cannot create corpus source: {}", e);
            session.mark_failed(&e);
        }
    }
    eprintln!("{}", session.status_message());

    let mut controls = Controls::new(cli.query.clone().unwrap_or_default(), settings.initial_filter());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.interactive {
        let stdin = std::io::stdin();
        run_interactive(&session, &mut controls, stdin.lock(), &mut out)?;
    } else {
        write_results(&mut out, &session, &controls.current_query())?;
    }

    Ok(())
}
