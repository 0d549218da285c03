//! Generic filter / sort / paginate / tag stages.
//!
//! Every stage consumes an [`Items`] sequence and yields a new one, so the
//! same pipeline serves every entity shape of every domain. Filters and
//! pagination stay lazy; sorting has to buffer the whole input but never
//! touches the backend's own storage.
//!
//! ```rust,ignore
//! use mediaaccess::query::QueryExt;
//!
//! let page = backend
//!     .movies_basic()?
//!     .filter_genre(Some("Drama"))
//!     .sorted(SortBy::Year, OrderBy::Desc)
//!     .take_range(0, 20)
//!     .tagged(provider);
//! ```

use mediaaccess_common::{OrderBy, ProviderId, SortBy};

use crate::library::Items;
use crate::media::MediaEntity;

/// Pipeline stages available on every [`Items`] sequence.
pub trait QueryExt<'a, T>: Sized {
    /// Keep entities whose genre list contains `genre` exactly.
    /// `None` passes everything through.
    fn filter_genre(self, genre: Option<&str>) -> Items<'a, T>;

    /// Keep entities that belong to the category with id `category`.
    /// `None` passes everything through.
    fn filter_category(self, category: Option<&str>) -> Items<'a, T>;

    /// Keep entities for which `matches(entity, wanted)` holds.
    /// `None` passes everything through.
    fn filter_by(self, wanted: Option<&str>, matches: fn(&T, &str) -> bool) -> Items<'a, T>;

    /// Stable sort on one key. Ties keep their input order in both
    /// directions.
    fn sorted(self, sort: SortBy, order: OrderBy) -> Items<'a, T>;

    /// Elements at absolute positions `start..end`. `start >= end` yields
    /// nothing and a short input yields a short page.
    fn take_range(self, start: usize, end: usize) -> Items<'a, T>;

    /// Stamp every entity with the provider it came from.
    fn tagged(self, provider: ProviderId) -> Items<'a, T>;
}

impl<'a, T> QueryExt<'a, T> for Items<'a, T>
where
    T: MediaEntity + Send + 'a,
{
    fn filter_genre(self, genre: Option<&str>) -> Items<'a, T> {
        match genre {
            None => self,
            Some(genre) => {
                let genre = genre.to_string();
                Box::new(self.filter(move |e| e.genres().iter().any(|g| *g == genre)))
            }
        }
    }

    fn filter_category(self, category: Option<&str>) -> Items<'a, T> {
        match category {
            None => self,
            Some(category) => {
                let category = category.to_string();
                Box::new(self.filter(move |e| e.categories().iter().any(|c| c.id == category)))
            }
        }
    }

    fn filter_by(self, wanted: Option<&str>, matches: fn(&T, &str) -> bool) -> Items<'a, T> {
        match wanted {
            None => self,
            Some(wanted) => {
                let wanted = wanted.to_string();
                Box::new(self.filter(move |e| matches(e, &wanted)))
            }
        }
    }

    fn sorted(self, sort: SortBy, order: OrderBy) -> Items<'a, T> {
        let mut keyed: Vec<_> = self.map(|e| (e.sort_value(sort), e)).collect();
        // `sort_by` is stable; reversing the comparator rather than the
        // output keeps equal keys in input order for descending sorts too.
        keyed.sort_by(|(a, _), (b, _)| match order {
            OrderBy::Asc => a.compare(b),
            OrderBy::Desc => b.compare(a),
        });
        Box::new(keyed.into_iter().map(|(_, e)| e))
    }

    fn take_range(self, start: usize, end: usize) -> Items<'a, T> {
        Box::new(self.skip(start).take(end.saturating_sub(start)))
    }

    fn tagged(self, provider: ProviderId) -> Items<'a, T> {
        Box::new(self.map(move |mut e| {
            e.set_provider(provider);
            e
        }))
    }
}

/// Filter and ordering options shared by the list operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub genre: Option<String>,
    pub category: Option<String>,
    pub sort: SortBy,
    pub order: OrderBy,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn sort(mut self, sort: SortBy, order: OrderBy) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }

    /// Genre filter, category filter, then sort.
    pub fn apply<'a, T>(&self, items: Items<'a, T>) -> Items<'a, T>
    where
        T: MediaEntity + Send + 'a,
    {
        items
            .filter_genre(self.genre.as_deref())
            .filter_category(self.category.as_deref())
            .sorted(self.sort, self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::items;
    use crate::media::{Category, MovieBasic, TvEpisodeBasic};

    fn movie(id: &str, title: &str, year: Option<i32>, genres: &[&str]) -> MovieBasic {
        MovieBasic {
            id: id.into(),
            title: title.into(),
            year,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<MovieBasic> {
        vec![
            movie("1", "Heat", Some(1995), &["Crime", "Drama"]),
            movie("2", "alien", Some(1979), &["Horror", "Sci-Fi"]),
            movie("3", "Brazil", Some(1985), &["Sci-Fi"]),
            movie("4", "Unknown", None, &[]),
            movie("5", "Cube", Some(1997), &["Sci-Fi", "Horror"]),
        ]
    }

    fn ids<T: MediaEntity>(items: Items<'_, T>) -> Vec<String> {
        items.map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn absent_filters_are_identity() {
        let out = items(sample()).filter_genre(None).filter_category(None);
        assert_eq!(ids(out), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn genre_filter_is_exact_and_case_sensitive() {
        assert_eq!(ids(items(sample()).filter_genre(Some("Sci-Fi"))), vec!["2", "3", "5"]);
        assert!(ids(items(sample()).filter_genre(Some("sci-fi"))).is_empty());
        assert!(ids(items(sample()).filter_genre(Some("Sci"))).is_empty());
    }

    #[test]
    fn category_filter_matches_category_id() {
        let mut movies = sample();
        movies[0].categories = vec![Category::new("fav", "Favourites")];
        movies[2].categories = vec![Category::new("fav", "Favourites"), Category::new("x", "X")];

        assert_eq!(ids(items(movies.clone()).filter_category(Some("fav"))), vec!["1", "3"]);
        assert!(ids(items(movies).filter_category(Some("Favourites"))).is_empty());
    }

    #[test]
    fn filter_by_uses_field_accessor() {
        let episodes = vec![
            TvEpisodeBasic {
                id: "e1".into(),
                show_id: "s1".into(),
                ..Default::default()
            },
            TvEpisodeBasic {
                id: "e2".into(),
                show_id: "s2".into(),
                ..Default::default()
            },
        ];
        let out = items(episodes).filter_by(Some("s2"), |e, show| e.show_id == show);
        assert_eq!(ids(out), vec!["e2"]);
    }

    #[test]
    fn sort_ascending_puts_missing_first() {
        let out = items(sample()).sorted(SortBy::Year, OrderBy::Asc);
        assert_eq!(ids(out), vec!["4", "2", "3", "1", "5"]);
    }

    #[test]
    fn sort_descending() {
        let out = items(sample()).sorted(SortBy::Year, OrderBy::Desc);
        assert_eq!(ids(out), vec!["5", "1", "3", "2", "4"]);
    }

    #[test]
    fn sort_by_title_ignores_case() {
        let out = items(sample()).sorted(SortBy::Title, OrderBy::Asc);
        assert_eq!(ids(out), vec!["2", "3", "5", "1", "4"]);
    }

    #[test]
    fn sort_is_stable_in_both_directions() {
        let tied = vec![
            movie("a", "Same", Some(2000), &[]),
            movie("b", "Same", Some(2000), &[]),
            movie("c", "Same", Some(1990), &[]),
            movie("d", "Same", Some(2000), &[]),
        ];
        let asc = items(tied.clone()).sorted(SortBy::Year, OrderBy::Asc);
        assert_eq!(ids(asc), vec!["c", "a", "b", "d"]);
        let desc = items(tied).sorted(SortBy::Year, OrderBy::Desc);
        assert_eq!(ids(desc), vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn filters_are_idempotent() {
        let mut movies = sample();
        movies[1].categories = vec![Category::new("fav", "Favourites")];
        movies[4].categories = vec![Category::new("fav", "Favourites")];

        let once = ids(items(movies.clone()).filter_genre(Some("Horror")));
        let twice = ids(
            items(movies.clone())
                .filter_genre(Some("Horror"))
                .filter_genre(Some("Horror")),
        );
        assert_eq!(once, twice);

        let once = ids(items(movies.clone()).filter_category(Some("fav")));
        let twice = ids(
            items(movies.clone())
                .filter_category(Some("fav"))
                .filter_category(Some("fav")),
        );
        assert_eq!(once, twice);

        let from_80s = |m: &MovieBasic, decade: &str| {
            m.year.map_or(false, |y| y.to_string().starts_with(decade))
        };
        let once = ids(items(movies.clone()).filter_by(Some("198"), from_80s));
        let twice = ids(
            items(movies)
                .filter_by(Some("198"), from_80s)
                .filter_by(Some("198"), from_80s),
        );
        assert_eq!(once, vec!["3"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn descending_reverses_ascending_without_ties() {
        for sort in [SortBy::Title, SortBy::Year] {
            let asc = ids(items(sample()).sorted(sort, OrderBy::Asc));
            let mut desc = ids(items(sample()).sorted(sort, OrderBy::Desc));
            desc.reverse();
            assert_eq!(asc, desc, "{sort:?}");
        }
    }

    #[test]
    fn sort_is_deterministic() {
        let first = ids(items(sample()).sorted(SortBy::Genre, OrderBy::Asc));
        let second = ids(items(sample()).sorted(SortBy::Genre, OrderBy::Asc));
        assert_eq!(first, second);
    }

    #[test]
    fn range_is_start_inclusive_end_exclusive() {
        assert_eq!(ids(items(sample()).take_range(1, 3)), vec!["2", "3"]);
        assert_eq!(ids(items(sample()).take_range(0, 5)).len(), 5);
    }

    #[test]
    fn range_edge_cases() {
        assert!(ids(items(sample()).take_range(3, 3)).is_empty());
        assert!(ids(items(sample()).take_range(4, 2)).is_empty());
        assert_eq!(ids(items(sample()).take_range(3, 100)), vec!["4", "5"]);
        assert!(ids(items(sample()).take_range(10, 20)).is_empty());
    }

    #[test]
    fn range_stays_lazy() {
        let endless: Items<'_, MovieBasic> =
            Box::new((0..).map(|i| movie(&i.to_string(), "m", None, &[])));
        assert_eq!(ids(endless.take_range(2, 4)), vec!["2", "3"]);
    }

    #[test]
    fn tagging_sets_provider_on_every_item() {
        let provider = ProviderId::new(7);
        let out: Vec<_> = items(sample()).tagged(provider).collect();
        assert_eq!(out.len(), 5);
        assert!(out.iter().all(|m| m.provider == Some(provider)));
    }

    #[test]
    fn list_query_combines_stages() {
        let query = ListQuery::new()
            .genre("Sci-Fi")
            .sort(SortBy::Year, OrderBy::Desc);
        assert_eq!(ids(query.apply(items(sample()))), vec!["5", "3", "2"]);
    }
}
