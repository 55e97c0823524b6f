use std::{fs, path::Path};

use anyhow::{Context, Ok, Result, bail};

use super::super::args::ExportCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary, ExportSummary},
};

use crate::{
    context::{CheckContext, LoadOptions},
    export::{export_file_name, render_csv},
};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let options = LoadOptions {
        locales_root: args.common.locales_root.clone(),
        source_locale: args.common.source_locale.clone(),
    };
    let ctx = CheckContext::load(Path::new("."), &options)?;

    if let Some(locale) = &args.locale {
        if *locale == ctx.source_locale {
            bail!(
                "Locale '{}' is the source locale; pass a target locale or omit --locale",
                locale
            );
        }
        if !ctx.dictionaries.contains_key(locale) {
            bail!(
                "Locale '{}' not found. Available locales: {}",
                locale,
                ctx.dictionaries
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }

    let csv = render_csv(&ctx.source_locale, &ctx.dictionaries, args.locale.as_deref());

    let out_dir = args.out.clone().unwrap_or_else(|| Path::new(".").to_path_buf());
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let file_name = export_file_name(&ctx.config.product, args.locale.as_deref());
    let path = out_dir.join(file_name);
    fs::write(&path, &csv).with_context(|| format!("Failed to write {}", path.display()))?;

    let locale_count = match &args.locale {
        Some(_) => 1,
        None => ctx.locale_file_count().saturating_sub(1),
    };
    let locale_files_checked = ctx.locale_file_count();
    let key_count = ctx.source_key_count();

    Ok(finish(
        CommandSummary::Export(ExportSummary {
            path,
            locale_count,
            key_count,
        }),
        Vec::new(),
        ctx.parse_warnings,
        locale_files_checked,
        key_count,
        true,
    ))
}
