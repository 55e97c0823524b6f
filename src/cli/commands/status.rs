use std::path::Path;

use anyhow::{Ok, Result};

use super::super::args::StatusCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary, StatusSummary},
};

use crate::{
    context::{CheckContext, LoadOptions},
    report::build_report,
    workflow::{render_table, summarize},
};

pub fn status(cmd: StatusCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let options = LoadOptions {
        locales_root: args.common.locales_root.clone(),
        source_locale: args.common.source_locale.clone(),
    };
    let ctx = CheckContext::load(Path::new("."), &options)?;

    let set = build_report(&ctx.source_locale, &ctx.dictionaries);
    let table = render_table(&summarize(&set));

    let locale_files_checked = ctx.locale_file_count();
    let keys_checked = ctx.source_key_count();

    Ok(finish(
        CommandSummary::Status(StatusSummary {
            source_locale: set.source_locale.clone(),
            table,
            orphan_count: set.extra_anywhere.len(),
        }),
        Vec::new(),
        ctx.parse_warnings,
        locale_files_checked,
        keys_checked,
        true,
    ))
}
