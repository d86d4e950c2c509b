//! Repository commands: add-repo, remove-repo and list-repos

use crate::cli::{AddRepoArgs, ListReposArgs, RemoveRepoArgs};
use crate::error::Result;
use crate::operations::Context;
use crate::operations::repository::{RepositoryInfo, RepositoryOperation};
use crate::ui::output;

pub fn add(ctx: &Context<'_>, args: AddRepoArgs) -> Result<()> {
    RepositoryOperation::new(ctx).add(&args.url, args.format.as_deref())
}

pub fn remove(ctx: &Context<'_>, args: RemoveRepoArgs) -> Result<()> {
    let outcome = RepositoryOperation::new(ctx).remove(&args.name)?;
    super::report(outcome);
    Ok(())
}

pub fn list(ctx: &Context<'_>, _args: ListReposArgs) -> Result<()> {
    let repositories = RepositoryOperation::new(ctx).list()?;

    if repositories.is_empty() {
        output::line("No repositories added. Use 'tarman add-repo <url>' to add one.");
        return Ok(());
    }

    output::heading("Repositories:");
    for repository in &repositories {
        output::line(&describe(repository));
    }
    Ok(())
}

fn describe(repository: &RepositoryInfo) -> String {
    let noun = if repository.recipes == 1 {
        "recipe"
    } else {
        "recipes"
    };
    format!(" --- {} ({} {noun})", repository.name, repository.recipes)
}
