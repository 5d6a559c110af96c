use serde::Serialize;

use clinic_core::enums::{Access, Panel};
use clinic_store::letters::{render_referral_letter, write_letter};

use crate::cli::GlobalFlags;
use crate::commands::shared::access::{check_owner, require};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct LetterResponse {
    pub referral_id: String,
    pub path: String,
}

pub fn run(id: &str, stdout: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = require(ctx, Panel::Referrals, Access::Read)?;
    check_owner(identity, &ctx.store.get_referral(id)?.patient_id)?;

    let letter = format!(
        "{}\n\n{}",
        ctx.config.general.clinic_name,
        render_referral_letter(&ctx.store, id)?
    );
    if stdout {
        print!("{letter}");
        return Ok(());
    }

    let path = write_letter(&ctx.config.storage.letters_dir(), id, &letter)?;
    output(
        &LetterResponse {
            referral_id: id.to_string(),
            path: path.display().to_string(),
        },
        flags.format,
    )
}
