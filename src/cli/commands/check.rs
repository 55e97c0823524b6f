use std::path::Path;

use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    context::{CheckContext, LoadOptions},
    issues::{Issue, ParseErrorIssue},
    rules::{
        keys::{check_missing_key_issues, check_orphan_key_issues},
        markup::check_markup_issues,
        placeholders::check_placeholder_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Missing,
    Orphan,
    Placeholders,
    Markup,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Missing,
            CheckRule::Orphan,
            CheckRule::Placeholders,
            CheckRule::Markup,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let options = LoadOptions {
        locales_root: args.common.locales_root.clone(),
        source_locale: args.common.source_locale.clone(),
    };
    let ctx = CheckContext::load(Path::new("."), &options)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Missing => {
                let issues = check_missing_key_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::MissingKey));
            }
            CheckRule::Orphan => {
                let issues = check_orphan_key_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::OrphanKey));
            }
            CheckRule::Placeholders => {
                let issues = check_placeholder_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::Markup => {
                let issues = check_markup_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::MarkupMismatch));
            }
        }
    }

    all_issues.extend(ctx.parse_warnings.iter().map(|w| {
        Issue::ParseError(ParseErrorIssue {
            file_path: w.file_path.clone(),
            error: w.error.clone(),
        })
    }));

    let locale_files_checked = ctx.locale_file_count();
    let keys_checked = ctx.source_key_count();

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.parse_warnings,
        locale_files_checked,
        keys_checked,
        true,
    ))
}
