use anyhow::Context;
use clap::Parser;
use role_forms::utils::{logger, validation::Validate};
use role_forms::{CliConfig, RequestContext, RoleFormConfig, TomlConfig, TwoStageRoleForm};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            config.validate().context("invalid config file")?;
            Some(config)
        }
        None => None,
    };

    let settings = cli.settings(file_config.as_ref());

    if cli.log_json {
        logger::init_json_logger(settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Building {} role form", settings.variant);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let supplier = RoleFormConfig::for_variant(settings.variant);
    let form = TwoStageRoleForm::new(supplier);
    let edit = form
        .build_validated(&RequestContext::default())
        .with_context(|| format!("{} role form failed validation", settings.variant))?;

    let rendered = settings.format.render(&edit)?;
    println!("{}", rendered);

    tracing::info!(
        "Rendered {} options for template {}",
        edit.literal_options.len(),
        edit.template().unwrap_or_default()
    );

    Ok(())
}
