/// Month names and page labels for one display language.
///
/// Formatting never consults the host's locale database; callers pass one of
/// these tables explicitly.
#[derive(Debug, PartialEq, Eq)]
pub struct Locale {
	pub code: &'static str,
	/// Abbreviated month names, January first.
	pub months_abbreviated: [&'static str; 12],
	pub labels: Labels,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
	pub latest_heading: &'static str,
	pub all_heading: &'static str,
	pub podcast_column: &'static str,
	pub members_column: &'static str,
	pub date_column: &'static str,
	pub duration_column: &'static str,
	pub play: &'static str,
}

pub const PT_BR: Locale = Locale {
	code: "pt-BR",
	months_abbreviated: [
		"jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
	],
	labels: Labels {
		latest_heading: "Últimos lançamentos",
		all_heading: "Todos episódios",
		podcast_column: "Podcast",
		members_column: "Integrantes",
		date_column: "Data",
		duration_column: "Duração",
		play: "Tocar episódio",
	},
};

pub const EN_US: Locale = Locale {
	code: "en-US",
	months_abbreviated: [
		"Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
	],
	labels: Labels {
		latest_heading: "Latest releases",
		all_heading: "All episodes",
		podcast_column: "Podcast",
		members_column: "Members",
		date_column: "Date",
		duration_column: "Duration",
		play: "Play episode",
	},
};

const LOCALES: &[&Locale] = &[&PT_BR, &EN_US];

impl Locale {
	/// Looks a locale up by its BCP 47 code, ignoring case and `_` vs `-`.
	pub fn from_code(code: &str) -> Option<&'static Locale> {
		let code = code.trim().replace('_', "-");
		LOCALES
			.iter()
			.copied()
			.find(|l| l.code.eq_ignore_ascii_case(&code))
	}

	/// `month` is 1-based.
	pub fn month_abbreviation(&self, month: u32) -> &'static str {
		self.months_abbreviated[(month.saturating_sub(1) as usize) % 12]
	}
}
