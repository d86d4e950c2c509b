//! Update and update-all commands

use crate::cli::{UpdateAllArgs, UpdateArgs};
use crate::error::Result;
use crate::operations::Context;
use crate::operations::update::UpdateOperation;

pub fn run(ctx: &Context<'_>, args: UpdateArgs) -> Result<()> {
    UpdateOperation::new(ctx).execute(&args.name)
}

pub fn run_all(ctx: &Context<'_>, _args: UpdateAllArgs) -> Result<()> {
    UpdateOperation::new(ctx).execute_all()
}
