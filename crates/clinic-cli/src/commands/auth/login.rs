use anyhow::Context;

use clinic_auth::resolve_login;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `clinic login`. With `--as` the identity is resolved but not
/// stored.
pub fn handle(args: &LoginArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = resolve_login(&ctx.store, &args.identifier, &ctx.config.login)?;

    if ctx.is_one_shot() {
        tracing::debug!("one-shot identity, session file left untouched");
    } else {
        ctx.sessions
            .save(&identity)
            .with_context(|| format!("failed to store login in {}", ctx.sessions.path().display()))?;
    }

    let response = identity.to_login_response();
    ctx.set_identity(Some(identity));
    output(&response, flags.format)
}
