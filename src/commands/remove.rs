//! Remove command

use crate::cli::RemoveArgs;
use crate::error::Result;
use crate::operations::Context;
use crate::operations::remove::RemoveOperation;

pub fn run(ctx: &Context<'_>, args: RemoveArgs) -> Result<()> {
    let outcome = RemoveOperation::new(ctx).execute(&args.name)?;
    super::report(outcome);
    Ok(())
}
