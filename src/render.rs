use crate::locale::Locale;
use crate::models::EpisodeView;
use crate::presenter::HomePage;
use crate::util::encode_path_segment;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

const LATEST_THUMBNAIL_SIZE: u32 = 192;
const TABLE_THUMBNAIL_SIZE: u32 = 120;

/// Link target of an episode's detail view.
pub fn episode_href(episode: &EpisodeView) -> String {
	format!("/episodes/{}", encode_path_segment(&episode.id))
}

/// Render the whole homepage as one HTML document.
pub fn render_home(page: &HomePage, locale: &Locale) -> String {
	let labels = &locale.labels;
	let mut html = String::with_capacity(4096);

	html.push_str(&format!(
		"<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<div class=\"homepage\">\n",
		attr(locale.code),
		text(labels.latest_heading)
	));

	html.push_str(&format!(
		"<section class=\"latest-episodes\">\n<h2>{}</h2>\n<ul>\n",
		text(labels.latest_heading)
	));
	for episode in &page.latest_episodes {
		html.push_str(&latest_item(episode, locale));
	}
	html.push_str("</ul>\n</section>\n");

	html.push_str(&format!(
		"<section class=\"all-episodes\">\n<h2>{}</h2>\n<table cellspacing=\"0\">\n<thead>\n<tr><th></th><th>{}</th><th>{}</th><th>{}</th><th>{}</th><th></th></tr>\n</thead>\n<tbody>\n",
		text(labels.all_heading),
		text(labels.podcast_column),
		text(labels.members_column),
		text(labels.date_column),
		text(labels.duration_column)
	));
	for episode in &page.all_episodes {
		html.push_str(&table_row(episode, locale));
	}
	html.push_str("</tbody>\n</table>\n</section>\n</div>\n</body>\n</html>\n");
	html
}

fn latest_item(episode: &EpisodeView, locale: &Locale) -> String {
	format!(
		"<li>\n{}\n<div class=\"episode-details\">\n<a href=\"{}\">{}</a>\n<p>{}</p>\n<span>{}</span>\n<span>{}</span>\n</div>\n{}\n</li>\n",
		thumbnail(episode, LATEST_THUMBNAIL_SIZE),
		attr(&episode_href(episode)),
		text(&episode.title),
		text(&episode.members),
		text(&episode.published_at),
		text(&episode.duration_as_string),
		play_button(episode, locale)
	)
}

fn table_row(episode: &EpisodeView, locale: &Locale) -> String {
	format!(
		"<tr>\n<td style=\"width: 72px\">{}</td>\n<td><a href=\"{}\">{}</a></td>\n<td>{}</td>\n<td style=\"width: 100px\">{}</td>\n<td>{}</td>\n<td>{}</td>\n</tr>\n",
		thumbnail(episode, TABLE_THUMBNAIL_SIZE),
		attr(&episode_href(episode)),
		text(&episode.title),
		text(&episode.members),
		text(&episode.published_at),
		text(&episode.duration_as_string),
		play_button(episode, locale)
	)
}

fn thumbnail(episode: &EpisodeView, size: u32) -> String {
	format!(
		"<img width=\"{size}\" height=\"{size}\" src=\"{}\" alt=\"{}\" style=\"object-fit: cover\">",
		attr(&episode.thumbnail),
		attr(&episode.title),
	)
}

fn play_button(episode: &EpisodeView, locale: &Locale) -> String {
	format!(
		"<button type=\"button\" class=\"play\" data-url=\"{}\" data-duration=\"{}\" aria-label=\"{}\">&#9654;</button>",
		attr(&episode.url),
		episode.duration,
		attr(locale.labels.play)
	)
}
