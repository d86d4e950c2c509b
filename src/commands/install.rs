//! Install command
//!
//! Installs a package from a local archive, a direct URL or a repository
//! recipe. See [`InstallOperation`] for the steps.

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::operations::Context;
use crate::operations::install::{InstallOperation, InstallRequest};

pub fn run(ctx: &Context<'_>, args: InstallArgs) -> Result<()> {
    let request = InstallRequest::try_from(&args)?;
    let outcome = InstallOperation::new(ctx).execute(&request)?;
    super::report(outcome);
    Ok(())
}
