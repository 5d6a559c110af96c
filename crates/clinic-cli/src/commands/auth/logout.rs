use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    cleared: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let cleared = ctx.sessions.clear()?;
    ctx.set_identity(None);
    output(&LogoutResponse { cleared }, flags.format)
}
