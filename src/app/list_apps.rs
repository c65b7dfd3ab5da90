use crate::app::CommandContext;
use crate::config::cli::ListAppsArgs;
use crate::core::apps::list_applications;
use crate::core::render::{render_applications, OutputFormat};
use crate::domain::ports::EnvironmentResolver;
use crate::utils::error::Result;
use std::io::Write;

pub async fn execute<W: Write>(ctx: &CommandContext, args: &ListAppsArgs, out: &mut W) -> Result<()> {
    let environment = &args.env.environment;
    let endpoint = ctx.config.application_list_endpoint(environment)?;
    let client = ctx.client_for(&args.env).await?;

    let apps = list_applications(&client, &endpoint, args.query.as_deref()).await?;

    if args.format == OutputFormat::Table {
        writeln!(out, "Environment: {}", environment)?;
        writeln!(out, "No. of Applications: {}", apps.count)?;
        if apps.count > 0 {
            writeln!(out, "{}", render_applications(&apps, args.format)?)?;
        }
    } else {
        writeln!(out, "{}", render_applications(&apps, args.format)?)?;
    }

    Ok(())
}
