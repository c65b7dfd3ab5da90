use crate::app::CommandContext;
use crate::config::cli::ExportAppArgs;
use crate::config::LocalStorage;
use crate::core::export::{export_application, export_file_name, write_exported_archive};
use crate::domain::ports::EnvironmentResolver;
use crate::utils::error::Result;
use std::io::Write;

pub async fn execute<W: Write>(ctx: &CommandContext, args: &ExportAppArgs, out: &mut W) -> Result<()> {
    let environment = &args.env.environment;
    let file_name = export_file_name(args.env.username.as_deref(), &args.name)?;
    let store_endpoint = ctx.config.store_endpoint(environment)?;
    let client = ctx.client_for(&args.env).await?;

    let archive = export_application(&client, &store_endpoint, &args.name).await?;

    let storage = LocalStorage::new(ctx.config.export_directory());
    let path = write_exported_archive(&storage, environment, &file_name, &archive).await?;

    writeln!(out, "Successfully exported Application!")?;
    writeln!(out, "Find the exported Application at {}", path.display())?;
    Ok(())
}
