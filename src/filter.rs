/// Returns the first `limit` `candidates` that contain `query`, in their original order.
///
/// Matching is a case-sensitive substring test, so prefix matches are included like any other.
/// An empty `query` matches everything, but callers close the popup instead of filtering in that case.
///
/// ```
/// use lending_autocomplete::filter::filter;
///
/// let candidates = ["Moby Dick", "Dune", "Dracula"];
/// assert_eq!(filter(&candidates, "D", 5), ["Dune", "Dracula"]);
/// ```
#[must_use]
pub fn filter<'a, S: AsRef<str>>(candidates: &'a [S], query: &str, limit: usize) -> Vec<&'a str> {
	candidates.iter().map(AsRef::as_ref).filter(|candidate| candidate.contains(query)).take(limit).collect()
}

#[cfg(test)]
mod tests {
	use super::filter;

	const TITLES: [&str; 7] = ["Dune", "Dracula", "Moby Dick", "The Dubliners", "dune messiah", "Children of Dune", "Emma"];

	#[test]
	fn order_is_preserved() {
		assert_eq!(filter(&["Moby Dick", "Dune", "Dracula"], "D", 5), ["Dune", "Dracula"]);
	}

	#[test]
	fn every_result_contains_the_query() {
		for query in ["D", "u", "Du", "ick", "Emma", "zzz"] {
			for limit in 0..=TITLES.len() + 1 {
				let found = filter(&TITLES, query, limit);
				assert!(found.len() <= limit);
				assert!(found.iter().all(|title| title.contains(query)), "{:?} for {:?}", found, query);
			}
		}
	}

	#[test]
	fn limit_truncates_from_the_front() {
		assert_eq!(filter(&TITLES, "D", 2), ["Dune", "Dracula"]);
		assert_eq!(filter(&TITLES, "D", 0), Vec::<&str>::new());
	}

	#[test]
	fn case_sensitive() {
		assert_eq!(filter(&TITLES, "dune", 5), ["dune messiah"]);
		assert_eq!(filter(&TITLES, "Dune", 5), ["Dune", "Children of Dune"]);
	}

	#[test]
	fn prefix_and_whole_matches_are_eligible() {
		assert_eq!(filter(&TITLES, "Emma", 5), ["Emma"]);
		assert_eq!(filter(&TITLES, "Dra", 5), ["Dracula"]);
	}

	#[test]
	fn no_match_is_empty() {
		assert!(filter(&TITLES, "Ulysses", 5).is_empty());
		assert!(filter::<&str>(&[], "D", 5).is_empty());
	}

	#[test]
	fn owned_candidates() {
		let owned: Vec<String> = TITLES.iter().map(|title| (*title).to_owned()).collect();
		assert_eq!(filter(&owned, "Moby", 5), ["Moby Dick"]);
	}
}
