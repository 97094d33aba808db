use crate::models::EpisodeView;
use serde::Serialize;

/// How many episodes get the featured slot at the top of the page.
pub const LATEST_COUNT: usize = 2;

/// Split into the featured head and the remaining tail, preserving order.
pub fn partition<T>(mut episodes: Vec<T>) -> (Vec<T>, Vec<T>) {
	let rest = episodes.split_off(LATEST_COUNT.min(episodes.len()));
	(episodes, rest)
}

/// Everything the homepage renders, in the shape the rendering surface consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
	pub latest_episodes: Vec<EpisodeView>,
	pub all_episodes: Vec<EpisodeView>,
}

impl HomePage {
	pub fn from_episodes(episodes: Vec<EpisodeView>) -> Self {
		let (latest_episodes, all_episodes) = partition(episodes);
		HomePage {
			latest_episodes,
			all_episodes,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partition_small_inputs() {
		assert_eq!(partition::<char>(vec![]), (vec![], vec![]));
		assert_eq!(partition(vec!['a']), (vec!['a'], vec![]));
		assert_eq!(partition(vec!['a', 'b']), (vec!['a', 'b'], vec![]));
		assert_eq!(
			partition(vec!['a', 'b', 'c', 'd']),
			(vec!['a', 'b'], vec!['c', 'd'])
		);
	}

	#[test]
	fn partition_is_lossless() {
		for n in 0..20usize {
			let input = (0..n).collect::<Vec<usize>>();
			let (latest, rest) = partition(input.clone());
			assert_eq!(latest.len(), n.min(2));
			assert_eq!(latest.len() + rest.len(), n);
			let joined = latest.into_iter().chain(rest).collect::<Vec<usize>>();
			assert_eq!(joined, input);
		}
	}

	#[test]
	fn empty_page() {
		let page = HomePage::from_episodes(vec![]);
		assert_eq!(page, HomePage::default());
		assert_eq!(
			serde_json::to_string(&page).unwrap(),
			r#"{"latestEpisodes":[],"allEpisodes":[]}"#
		);
	}
}
