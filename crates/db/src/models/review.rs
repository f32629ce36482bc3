//! Review session model.
//!
//! A review is created when a user starts studying a deck or playlist and
//! accumulates per-card outcomes until the client stops reporting them.

use chrono::Utc;
use flashcards_core::review::OriginType;
use flashcards_core::types::{new_id, EntityId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::card::Card;

/// A review row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Review {
    pub id: EntityId,
    #[sqlx(try_from = "String")]
    pub origin_type: OriginType,
    pub origin_id: EntityId,
    pub user_id: UserId,
    /// Cards answered correctly, in answer order.
    #[sqlx(json)]
    pub hits: Vec<Card>,
    pub hits_count: i64,
    /// Cards answered incorrectly, in answer order.
    #[sqlx(json)]
    pub mistakes: Vec<Card>,
    pub mistakes_count: i64,
    pub updated_at: Timestamp,
}

impl Review {
    /// A fresh, unsaved session with empty outcome lists.
    pub fn start(origin_type: OriginType, origin_id: EntityId, user_id: &str) -> Self {
        Self {
            id: new_id(),
            origin_type,
            origin_id,
            user_id: user_id.to_string(),
            hits: Vec::new(),
            hits_count: 0,
            mistakes: Vec::new(),
            mistakes_count: 0,
            updated_at: Utc::now(),
        }
    }

    /// Record one answered card.
    ///
    /// Hits and mistakes are independent lists; each outcome touches exactly
    /// one list and its counter.
    pub fn record(&mut self, card: Card, is_correct: bool) {
        if is_correct {
            self.hits.push(card);
            self.hits_count += 1;
        } else {
            self.mistakes.push(card);
            self.mistakes_count += 1;
        }
        self.updated_at = Utc::now();
    }
}

/// Result of starting a review: the cards to study plus the session handle.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewStart {
    pub cards: Vec<Card>,
    pub session: Review,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::card::CreateCard;

    fn card(front: &str) -> Card {
        CreateCard {
            front: front.into(),
            ..Default::default()
        }
        .into_card("u1", new_id())
    }

    #[test]
    fn started_review_is_empty() {
        let origin = new_id();
        let review = Review::start(OriginType::Deck, origin, "u1");
        assert_eq!(review.origin_type, OriginType::Deck);
        assert_eq!(review.origin_id, origin);
        assert!(review.hits.is_empty());
        assert!(review.mistakes.is_empty());
        assert_eq!(review.hits_count, 0);
        assert_eq!(review.mistakes_count, 0);
    }

    #[test]
    fn correct_answer_only_touches_hits() {
        let mut review = Review::start(OriginType::Deck, new_id(), "u1");
        review.record(card("a"), true);
        assert_eq!(review.hits_count, 1);
        assert_eq!(review.mistakes_count, 0);
        assert_eq!(review.hits.len(), 1);
        assert!(review.mistakes.is_empty());
    }

    #[test]
    fn wrong_answer_only_touches_mistakes() {
        let mut review = Review::start(OriginType::Playlist, new_id(), "u1");
        review.record(card("a"), true);
        review.record(card("b"), false);

        assert_eq!(review.hits_count, 1);
        assert_eq!(review.mistakes_count, 1);
        assert_eq!(review.hits[0].front, "a");
        assert_eq!(review.mistakes.len(), 1);
        assert_eq!(review.mistakes[0].front, "b");
    }

    #[test]
    fn counters_match_list_lengths() {
        let mut review = Review::start(OriginType::Deck, new_id(), "u1");
        for i in 0..5 {
            review.record(card(&i.to_string()), i % 2 == 0);
        }
        assert_eq!(review.hits_count as usize, review.hits.len());
        assert_eq!(review.mistakes_count as usize, review.mistakes.len());
        assert_eq!(review.hits_count, 3);
        assert_eq!(review.mistakes_count, 2);
    }

    #[test]
    fn origin_type_serializes_lowercase() {
        let review = Review::start(OriginType::Playlist, new_id(), "u1");
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["origin_type"], "playlist");
    }
}
