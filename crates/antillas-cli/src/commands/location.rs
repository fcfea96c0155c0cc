use anyhow::Result;
use antillas_core::Region;
use antillas_core::location::SelectionPhase;
use antillas_core::theme::Palette;
use colored::Colorize;

use super::context::AppContext;
use super::render::accent;

pub fn show(ctx: &AppContext) -> Result<()> {
    let selection = ctx.store.current_selection();
    let region = selection.selected_region;
    let palette = Palette::for_region(region, ctx.config.default_color_scheme);

    let status = match selection.phase() {
        SelectionPhase::Confirmed => "confirmed".green(),
        SelectionPhase::Unconfirmed => "not confirmed".yellow(),
    };
    println!(
        "{} {} ({}) - {}",
        region.flag(),
        accent(region.display_name(), palette).bold(),
        region.id(),
        status
    );
    println!(
        "  theme: {} primary {} / secondary {}",
        ctx.config.default_color_scheme, palette.primary, palette.secondary
    );
    Ok(())
}

pub fn list() -> Result<()> {
    for region in Region::all() {
        println!(
            "{} {:<8} {:<15} {:<4} {}",
            region.flag(),
            region.id(),
            region.display_name(),
            region.currency_symbol(),
            region.cities().join(", ")
        );
    }
    Ok(())
}

pub fn select(ctx: &AppContext, region: &str) -> Result<()> {
    let selection = ctx.store.select_region(region)?;
    println!(
        "✅ Location set to {} {}",
        selection.selected_region.flag(),
        selection.selected_region.display_name()
    );
    Ok(())
}

pub fn reset(ctx: &AppContext) -> Result<()> {
    ctx.store.reset_selection();
    println!("Location selection cleared. You will be asked again next time.");
    Ok(())
}
