use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use jnr_store_catalog::CatalogQueryEngine;
use jnr_store_core::{DownloadKind, DownloadSummary, GameRecord, Rating, requirement_label};

use crate::CliError;

use super::{print_rows, star_bar};

/// Print the detail page for `id`.
///
/// Related games are drawn at random; `seed` makes the pick repeatable.
pub(crate) fn run_show(
    engine: &CatalogQueryEngine,
    id: &str,
    related_count: usize,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let game = engine.find(id.trim()).ok_or_else(|| CliError::not_found(id.trim()))?;

    print_header(game);
    print_downloads(game);
    print_requirements(game);

    if !game.installation_steps.is_empty() {
        crate::log_blank();
        log::info!("{}", "Installation".if_supports_color(Stdout, |t| t.bold()));
        for (i, step) in game.installation_steps.iter().enumerate() {
            log::info!("  {}. {step}", i + 1);
        }
        if let Some(video) = &game.installation_video_url {
            log::info!("  Video: {}", video.if_supports_color(Stdout, |t| t.cyan()));
        }
    }

    if related_count > 0 {
        let related = match seed {
            Some(seed) => engine.related(game, related_count, &mut Pcg64Mcg::seed_from_u64(seed)),
            None => engine.related(game, related_count, &mut rand::thread_rng()),
        };
        crate::log_blank();
        print_rows("You may also like", &related);
    }

    Ok(())
}

fn print_header(game: &GameRecord) {
    log::info!("{}", game.display_title().if_supports_color(Stdout, |t| t.bold()));

    let chips = game.hero_chips();
    if !chips.is_empty() {
        log::info!("  {}", chips.join(" · ").if_supports_color(Stdout, |t| t.magenta()));
    }

    match game.rating.as_deref().and_then(Rating::parse) {
        Some(rating) => log::info!(
            "  Rating:   {} {}/{}",
            star_bar(&rating).if_supports_color(Stdout, |t| t.yellow()),
            rating,
            rating.max
        ),
        None => log::info!("  Rating:   {}", game.rating.as_deref().unwrap_or("N/A")),
    }
    log::info!("  Genre:    {}", game.card_meta());
    log::info!(
        "  Released: {}",
        game.release_date
            .as_deref()
            .or(game.year.as_deref())
            .unwrap_or("N/A")
    );
    log::info!(
        "  Views:    {}   Downloads: {}",
        game.views,
        game.downloads
    );

    if let Some(about) = game.about_game.as_deref().or(game.short_description.as_deref()) {
        crate::log_blank();
        log::info!("  {about}");
    }

    if !game.screenshots.is_empty() {
        log::info!(
            "  {}",
            format!("{} screenshots", game.screenshots.len()).if_supports_color(Stdout, |t| t.dimmed())
        );
    }
}

fn print_downloads(game: &GameRecord) {
    let summary = DownloadSummary::for_record(game);
    crate::log_blank();
    log::info!(
        "{} {}",
        "Downloads".if_supports_color(Stdout, |t| t.bold()),
        format!("(setup size: {})", summary.setup_size).if_supports_color(Stdout, |t| t.dimmed()),
    );

    if !summary.has_links() {
        log::info!("  No download links available.");
        return;
    }

    for option in &summary.options {
        let size = option.size.as_deref().unwrap_or("");
        match (option.kind, option.url) {
            (DownloadKind::Parts, _) => {
                log::info!("  {} ({size})", option.label);
                for part in &summary.parts {
                    log::info!(
                        "    Part {}: {} ({})",
                        part.number,
                        part.url.if_supports_color(Stdout, |t| t.cyan()),
                        part.size
                    );
                }
            }
            (_, Some(url)) => log::info!(
                "  {}: {} {}",
                option.label,
                url.if_supports_color(Stdout, |t| t.cyan()),
                size
            ),
            (_, None) => log::info!("  {}", option.label),
        }
    }

    if let Some(password) = summary.rar_password {
        log::info!("  RAR password: {}", password.if_supports_color(Stdout, |t| t.green()));
    }
    if let Some(password) = summary.online_fix_password {
        log::info!(
            "  Online-fix RAR password: {}",
            password.if_supports_color(Stdout, |t| t.green())
        );
    }
}

fn print_requirements(game: &GameRecord) {
    let requirements = &game.system_requirements;
    for (heading, specs) in [
        ("Minimum requirements", &requirements.minimum),
        ("Recommended requirements", &requirements.recommended),
    ] {
        if specs.is_empty() {
            continue;
        }
        crate::log_blank();
        log::info!("{}", heading.if_supports_color(Stdout, |t| t.bold()));
        for (key, value) in specs {
            log::info!("  {:<12} {value}", format!("{}:", requirement_label(key)));
        }
    }
}
