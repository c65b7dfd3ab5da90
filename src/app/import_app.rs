use crate::app::CommandContext;
use crate::config::cli::ImportAppArgs;
use crate::core::import::{import_application, load_archive, resolve_import_path, source_environment};
use crate::domain::model::ImportOptions;
use crate::domain::ports::EnvironmentResolver;
use crate::utils::error::Result;
use std::io::Write;

pub async fn execute<W: Write>(ctx: &CommandContext, args: &ImportAppArgs, out: &mut W) -> Result<()> {
    let store_endpoint = ctx.config.store_endpoint(&args.env.environment)?;

    if let Some(source) = source_environment(&args.file) {
        tracing::info!("Source Environment: {}", source);
    }

    let path = resolve_import_path(&ctx.config.export_directory(), &args.file);
    tracing::info!("ZipFilePath: {}", path.display());
    let archive = load_archive(&path)?;

    let client = ctx.client_for(&args.env).await?;
    let options = ImportOptions {
        preserve_owner: args.preserve_owner,
        add_subscriptions: args.add_subscriptions,
    };
    let status = import_application(&client, &store_endpoint, archive, options).await?;

    tracing::debug!("Import completed with {}", status);
    writeln!(
        out,
        "Successfully imported Application '{}'",
        args.file.display()
    )?;
    Ok(())
}
