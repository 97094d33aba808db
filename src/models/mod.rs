pub mod episode;

pub use episode::{EpisodeView, RawEpisodeFile, RawEpisodeRecord};
