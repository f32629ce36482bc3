//! Integration tests for the PostgreSQL repositories.
//!
//! These need a reachable database via `DATABASE_URL`; run them with
//! `cargo test -p flashcards-db -- --ignored`.

use flashcards_core::pagination::Pagination;
use flashcards_core::review::OriginType;
use flashcards_db::models::card::CreateCard;
use flashcards_db::models::deck::{CreateDeck, Deck};
use flashcards_db::models::playlist::CreatePlaylist;
use flashcards_db::models::review::Review;
use flashcards_db::repositories::{CardRepo, DeckRepo, PlaylistRepo, ReviewRepo};
use flashcards_db::store::{CardStore, DeckStore, ListQuery, PlaylistStore, ReviewStore, Scope};
use sqlx::PgPool;

fn new_deck(owner: &str, name: &str, is_private: bool) -> Deck {
    CreateDeck {
        name: name.into(),
        description: "desc".into(),
        image_url: "img.png".into(),
        is_private,
        study_suggestions: vec!["daily".into()],
    }
    .into_deck(owner)
}

// ---------------------------------------------------------------------------
// Decks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deck_insert_and_find(pool: PgPool) {
    let repo = DeckRepo::new(pool);
    let deck = new_deck("u1", "Go", true);
    repo.insert(&deck).await.unwrap();

    let found = repo.find_visible("u1", deck.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Go");
    assert_eq!(found.study_suggestions, vec!["daily".to_string()]);
    assert!(repo.find_visible("u2", deck.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deck_list_scopes_and_filters(pool: PgPool) {
    let repo = DeckRepo::new(pool);
    repo.insert(&new_deck("u1", "Go Basics", true)).await.unwrap();
    repo.insert(&new_deck("u1", "Rust", false)).await.unwrap();
    repo.insert(&new_deck("u2", "Go Public", false)).await.unwrap();
    repo.insert(&new_deck("u2", "Go Hidden", true)).await.unwrap();

    let owned = ListQuery::default();
    assert_eq!(repo.count("u1", &owned).await.unwrap(), 2);

    let visible_go = ListQuery {
        scope: Scope::Visible,
        name: Some("go".into()),
        pagination: Pagination::default(),
    };
    let names: Vec<String> = repo
        .list("u1", &visible_go)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["Go Basics", "Go Public"]);
    assert_eq!(repo.count("u1", &visible_go).await.unwrap(), 2);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deck_replace_and_delete_are_owner_scoped(pool: PgPool) {
    let repo = DeckRepo::new(pool);
    let mut deck = new_deck("u1", "Go", false);
    repo.insert(&deck).await.unwrap();

    deck.name = "Renamed".into();
    assert!(repo.replace("u2", &deck).await.unwrap().is_none());
    let replaced = repo.replace("u1", &deck).await.unwrap().unwrap();
    assert_eq!(replaced.name, "Renamed");

    assert!(repo.delete("u2", deck.id).await.unwrap().is_none());
    assert!(repo.delete("u1", deck.id).await.unwrap().is_some());
    assert!(repo.find_visible("u1", deck.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn deck_counters_update_atomically(pool: PgPool) {
    let repo = DeckRepo::new(pool);
    let deck = new_deck("u1", "Go", false);
    repo.insert(&deck).await.unwrap();

    repo.adjust_cards_count(deck.id, 2).await.unwrap();
    repo.adjust_cards_count(deck.id, -5).await.unwrap();
    repo.increment_play_count(deck.id).await.unwrap();

    let found = repo.find_visible("u1", deck.id).await.unwrap().unwrap();
    assert_eq!(found.cards_count, 0);
    assert_eq!(found.play_count, 1);
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn cards_list_in_storage_order(pool: PgPool) {
    let repo = CardRepo::new(pool);
    let deck_id = flashcards_core::types::new_id();
    for front in ["one", "two", "three"] {
        let card = CreateCard {
            front: front.into(),
            ..Default::default()
        }
        .into_card("u1", deck_id);
        repo.insert(&card).await.unwrap();
    }

    let fronts: Vec<String> = repo
        .list_by_deck("u1", deck_id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.front)
        .collect();
    assert_eq!(fronts, vec!["one", "two", "three"]);
}

// ---------------------------------------------------------------------------
// Playlists
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn playlist_decks_round_trip_through_jsonb(pool: PgPool) {
    let repo = PlaylistRepo::new(pool);
    let mut playlist = CreatePlaylist {
        name: "Study".into(),
        description: "desc".into(),
        image_url: "img.png".into(),
        ..Default::default()
    }
    .into_playlist("u1");
    repo.insert(&playlist).await.unwrap();

    playlist.decks.push(new_deck("u1", "Go", false).preview());
    let replaced = repo.replace("u1", &playlist).await.unwrap().unwrap();
    assert_eq!(replaced.decks, playlist.decks);
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn review_records_persist(pool: PgPool) {
    let repo = ReviewRepo::new(pool);
    let mut review = Review::start(OriginType::Deck, flashcards_core::types::new_id(), "u1");
    repo.insert(&review).await.unwrap();

    let card = CreateCard {
        front: "q".into(),
        ..Default::default()
    }
    .into_card("u1", review.origin_id);
    review.record(card, false);
    repo.replace("u1", &review).await.unwrap().unwrap();

    let found = repo.find_owned("u1", review.id).await.unwrap().unwrap();
    assert_eq!(found.origin_type, OriginType::Deck);
    assert_eq!(found.mistakes_count, 1);
    assert_eq!(found.mistakes[0].front, "q");
    assert!(repo.find_owned("u2", review.id).await.unwrap().is_none());

    let recent = repo.recent("u1", OriginType::Deck, 10).await.unwrap();
    assert_eq!(recent.len(), 1);
}
