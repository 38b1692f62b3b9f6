use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use jnr_store_catalog::CatalogQueryEngine;

use super::print_rows;

pub(crate) fn run_home(engine: &CatalogQueryEngine) {
    let home = engine.home_sections();

    if home.hero.is_empty() {
        log::info!("{}", "Hero slider: (no slides)".if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        log::info!("{}", "Hero slider".if_supports_color(Stdout, |t| t.bold()));
        for game in &home.hero {
            let badge = game.hero_badge.as_deref().unwrap_or("Featured");
            log::info!(
                "  {} {} {}",
                format!("[{badge}]").if_supports_color(Stdout, |t| t.magenta()),
                game.display_title(),
                game.hero_chips().join(" · ").if_supports_color(Stdout, |t| t.dimmed()),
            );
            if let Some(description) = &game.short_description {
                log::info!("      {description}");
            }
        }
    }
    crate::log_blank();

    print_rows("Featured", &home.featured);
    crate::log_blank();
    print_rows("Recent multiplayer", &home.recent_multiplayer);
    crate::log_blank();
    print_rows("Trending", &home.trending);
    crate::log_blank();
    log::info!(
        "{} games in the catalog",
        home.total_games.if_supports_color(Stdout, |t| t.bold())
    );
}
