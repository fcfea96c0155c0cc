//! Terminal rendering of assistant exchanges.

use antillas_core::chat::{ChatExchange, RecommendationItem};
use antillas_core::theme::Palette;
use colored::{ColoredString, Colorize};

/// Colors `text` with the palette's primary color.
pub fn accent(text: &str, palette: &Palette) -> ColoredString {
    match palette.primary_rgb() {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

pub fn print_exchange(exchange: &ChatExchange, palette: &Palette) {
    let time = exchange.timestamp.format("%H:%M");
    if exchange.is_from_user() {
        println!("{} {}", "You".bold(), time.to_string().dimmed());
    } else {
        println!("{} {}", accent("AI", palette).bold(), time.to_string().dimmed());
    }
    println!("{}", exchange.text);

    for item in &exchange.recommendations {
        println!("  {}", recommendation_line(item, palette));
    }

    if !exchange.suggestions.is_empty() {
        let chips: Vec<String> = exchange
            .suggestions
            .iter()
            .map(|suggestion| format!("[{}]", suggestion))
            .collect();
        println!("  {}", accent(&chips.join(" "), palette));
    }
    println!();
}

fn recommendation_line(item: &RecommendationItem, palette: &Palette) -> String {
    format!(
        "{} {:.1}  {} by {} | {} | {}",
        "★".yellow(),
        item.rating,
        item.title.bold(),
        accent(&item.attributed_name, palette),
        item.display_price,
        item.availability_label.green(),
    )
}
