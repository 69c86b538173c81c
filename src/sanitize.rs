use std::collections::HashSet;

use ammonia::Builder;

/// Strips markup and control characters from a player name.
///
/// No tags survive: `script` and `style` elements are dropped together with
/// their content, every other tag is removed and its text kept. The result is
/// trimmed, so a name made only of markup or whitespace comes back empty.
pub fn clean_name(raw: &str) -> String {
	let raw = strip_blank(&raw.replace('\u{a0}', " "));

	let cleaned = Builder::empty()
		.clean_content_tags(HashSet::from(["script", "style"]))
		.clean(&raw)
		.to_string();

	// The serializer writes a non-breaking space as an entity, which trim
	// would not see. Entities in the input decode to one as well.
	strip_blank(&cleaned.replace("&nbsp;", " "))
}

fn strip_blank(s: &str) -> String {
	s.chars()
		.filter(|c| !c.is_control())
		.collect::<String>()
		.trim()
		.to_string()
}
