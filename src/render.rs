//! Card View Models
//!
//! What the grid shows for a list of records, independent of the DOM.

use crate::models::{ActiveView, CatRecord, FavoriteRecord};

/// One visible card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub url: String,
}

impl CardModel {
    /// DOM id of the card's favorite button
    pub fn button_id(&self) -> String {
        format!("favoriteButton_{}", self.url)
    }
}

/// Build the cards for `urls`, skipping entries without a usable image.
/// Order is preserved; the same input always yields the same cards.
pub fn visible_cards<'a>(urls: impl IntoIterator<Item = Option<&'a str>>) -> Vec<CardModel> {
    urls.into_iter()
        .flatten()
        .filter(|url| !url.is_empty())
        .map(|url| CardModel { url: url.to_string() })
        .collect()
}

/// Cards for `view`: the feed for All, the stored favorites for Favorites
pub fn cards_for_view(view: ActiveView, feed: &[CatRecord], favorites: &[FavoriteRecord]) -> Vec<CardModel> {
    match view {
        ActiveView::All => visible_cards(feed.iter().map(CatRecord::image_url)),
        ActiveView::Favorites => visible_cards(favorites.iter().map(|fav| Some(fav.url.as_str()))),
    }
}

/// Favorite toggle appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteGlyph {
    pub glyph: &'static str,
    pub style: &'static str,
}

impl FavoriteGlyph {
    pub fn for_state(is_favorite: bool) -> Self {
        if is_favorite {
            Self { glyph: "❤️", style: "color: red;" }
        } else {
            Self { glyph: "🤍", style: "" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::FavoritesStore;
    use crate::storage::memory::MemorySlot;

    fn records(n: usize) -> Vec<CatRecord> {
        (0..n).map(|i| CatRecord::with_url(format!("https://cdn/{}.jpg", i))).collect()
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let cats = records(5);
        let first = visible_cards(cats.iter().map(CatRecord::image_url));
        let second = visible_cards(cats.iter().map(CatRecord::image_url));

        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_records_without_url_are_skipped() {
        let mut cats = records(3);
        cats.insert(1, CatRecord::default());
        cats.push(CatRecord::with_url(""));

        let cards = visible_cards(cats.iter().map(CatRecord::image_url));
        let urls: Vec<_> = cards.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, vec!["https://cdn/0.jpg", "https://cdn/1.jpg", "https://cdn/2.jpg"]);
    }

    #[test]
    fn test_favorites_view_drops_card_after_toggle() {
        let mut store = FavoritesStore::load(MemorySlot::default(), "favoriteCats");
        let cats = records(3);
        for cat in &cats {
            store.toggle(cat);
        }
        assert_eq!(cards_for_view(ActiveView::Favorites, &cats, store.records()).len(), 3);

        store.toggle(&cats[1]);

        let cards = cards_for_view(ActiveView::Favorites, &cats, store.records());
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.url != "https://cdn/1.jpg"));
    }

    #[test]
    fn test_all_view_shows_feed_regardless_of_favorites() {
        let mut feed = records(4);
        feed.push(CatRecord::default());
        let favorites = vec![FavoriteRecord { url: "https://cdn/elsewhere.jpg".into() }];

        let cards = cards_for_view(ActiveView::All, &feed, &favorites);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].url, "https://cdn/0.jpg");
        assert_eq!(cards, cards_for_view(ActiveView::All, &feed, &favorites));
    }

    #[test]
    fn test_favorites_view_keeps_favoriting_order() {
        let favorites = vec![
            FavoriteRecord { url: "b".into() },
            FavoriteRecord { url: "a".into() },
        ];
        let cards = cards_for_view(ActiveView::Favorites, &records(5), &favorites);
        let urls: Vec<_> = cards.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, vec!["b", "a"]);
        assert!(cards_for_view(ActiveView::Favorites, &records(5), &[]).is_empty());
    }

    #[test]
    fn test_glyph_for_state() {
        assert_eq!(FavoriteGlyph::for_state(true).glyph, "❤️");
        assert_eq!(FavoriteGlyph::for_state(true).style, "color: red;");
        assert_eq!(FavoriteGlyph::for_state(false).glyph, "🤍");
        assert_eq!(FavoriteGlyph::for_state(false).style, "");
        assert_eq!(CardModel { url: "u".into() }.button_id(), "favoriteButton_u");
    }
}
