use anyhow::Context;
use clap::Parser;
use groom_estimate::core::{ConfigProvider, InquirySink};
use groom_estimate::utils::{error::EstimatorError, logger, validation::Validate};
use groom_estimate::{
    load_catalog, CliConfig, Estimator, FileSink, LocalStorage, MailtoMessage, StdoutSink,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    // nothing can be priced until both catalogs are in
    let catalog = match load_catalog(&settings).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(
                "Catalog load failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    };

    let mut estimator = Estimator::new(catalog);

    if cli.list {
        print_options(&estimator);
        return Ok(());
    }

    if let Some(breed) = &cli.breed {
        estimator.select_breed(breed);
    }
    if let Some(service) = &cli.service {
        estimator.select_service(service);
    }
    for addon in &cli.addons {
        estimator.toggle_addon(addon);
    }
    if let Some(notes) = &cli.notes {
        estimator.set_notes(notes);
    }

    println!("{}", estimator.displayed_total());

    let inquiry = estimator.build_inquiry();
    println!();
    for line in inquiry.lines() {
        println!("{}", line);
    }
    println!();

    let message = MailtoMessage::new(settings.recipient(), settings.subject(), &inquiry);
    StdoutSink.deliver(&message).await?;

    if let Some(path) = settings.output_path() {
        let sink = FileSink::new(LocalStorage::new(path.to_string()));
        let saved = sink
            .deliver(&message)
            .await
            .with_context(|| format!("could not save inquiry under {}", path))?;
        eprintln!("Inquiry saved to {}", saved);
    }

    Ok(())
}

fn print_options(estimator: &Estimator) {
    println!("Breeds:");
    for breed in estimator.breed_options() {
        println!("  {}", breed);
    }

    println!("Services:");
    for kind in groom_estimate::ServiceKind::ALL {
        println!("  {:<12} {}", kind.key(), kind.label());
    }

    println!("Add-ons:");
    for (_, label) in estimator.addon_options() {
        println!("  {}", label);
    }
}

fn exit_with(e: &EstimatorError) -> ! {
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}
