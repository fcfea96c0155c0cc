use anyhow::{Result, bail};
use antillas_core::chat::CannedResponseDispatcher;
use antillas_core::theme::Palette;

use super::context::AppContext;
use super::render::print_exchange;

pub fn run(ctx: &AppContext, region: Option<&str>, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Nothing to ask");
    }
    let region = ctx.resolve_region(region)?;
    let reply = CannedResponseDispatcher::new().respond(text, region);
    print_exchange(&reply, Palette::for_region(region, ctx.config.default_color_scheme));
    Ok(())
}
