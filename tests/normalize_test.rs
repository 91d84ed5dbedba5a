//! Normalization, aggregation and filtering over realistic API payloads

use esports_db::{
    api::{
        aggregate::{popular_games, popular_teams},
        normalize::{normalize_all, normalize_match, normalize_tournament},
        types::{ListPayload, StatusCategory},
    },
    core::{filter_tournaments, TournamentFilter, TournamentView},
    StatusFilter, TournamentId,
};
use serde_json::{json, Value};

/// A paginated `/tournaments/` response in the shape the DRF backend serves.
fn tournaments_page() -> Value {
    json!({
        "count": 5,
        "next": null,
        "previous": null,
        "results": [
            {
                "id": 1, "name": "Winter Cup 2026", "game": 1, "game_title": "Dota 2",
                "start_date": "2026-01-14", "end_date": "2026-02-10",
                "prize_pool": "250000.00", "format": "Группы + плей-офф", "status": "идёт"
            },
            {
                "id": 2, "name": "CS2 Major Qualifier", "game": {"id": 2, "title": "CS2"},
                "startDate": "2026-01-20", "prizePool": 150000,
                "format": "Плей-офф", "status": "завершён"
            },
            {
                "id": 3, "name": "Valorant Clash", "game_name": "Valorant",
                "start_date": "2026-02-05", "prize_pool": null,
                "format": "Группы", "status": "регистрация"
            },
            {
                "tournament_id": 4, "title": "Spring Open", "game": "CS2",
                "status": "Ongoing"
            },
            {}
        ]
    })
}

fn tournaments() -> Vec<esports_db::api::types::Tournament> {
    let items = ListPayload::from(tournaments_page()).into_items();
    normalize_all(&items, normalize_tournament)
}

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_every_record_normalizes() {
        let list = tournaments();
        assert_eq!(list.len(), 5);

        let empty = &list[4];
        assert_eq!(empty.id, None);
        assert_eq!(empty.name, "Без названия");
        assert_eq!(empty.status, "регистрация");
        assert_eq!(empty.format, "—");
        assert_eq!(empty.game_title, "—");
        assert_eq!(empty.prize_pool, Some(0.0));
        assert_eq!(empty.start_date, None);
    }

    #[test]
    fn test_field_name_variants_agree() {
        let list = tournaments();

        assert_eq!(list[0].prize_pool, Some(250000.0));
        assert_eq!(list[1].prize_pool, Some(150000.0));
        assert_eq!(list[1].start_date.as_deref(), Some("2026-01-20"));
        assert_eq!(list[1].game_title, "CS2");
        assert_eq!(list[2].game_title, "Valorant");
        assert_eq!(list[2].prize_pool, Some(0.0));
        assert_eq!(list[3].id, Some(TournamentId::new(4)));
        assert_eq!(list[3].name, "Spring Open");
        assert_eq!(list[3].game_title, "CS2");
    }

    #[test]
    fn test_status_classification_in_both_languages() {
        let categories: Vec<StatusCategory> = tournaments().iter().map(|t| t.category()).collect();
        assert_eq!(
            categories,
            vec![
                StatusCategory::Active,
                StatusCategory::Finished,
                StatusCategory::Registration,
                StatusCategory::Active,
                StatusCategory::Registration,
            ]
        );
    }

    #[test]
    fn test_bare_array_and_page_give_same_records() {
        let page = tournaments_page();
        let bare = page["results"].clone();

        let from_page = normalize_all(&ListPayload::from(page).into_items(), normalize_tournament);
        let from_bare = normalize_all(&ListPayload::from(bare).into_items(), normalize_tournament);
        assert_eq!(from_page, from_bare);
    }
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn test_popular_teams_across_both_slots() {
        let matches = normalize_all(
            &[
                json!({"id": 1, "team1_name": "Nova", "team2_name": "Hydra"}),
                json!({"id": 2, "team1": {"name": "Falcons"}, "team2": {"name": "Nova"}}),
            ],
            normalize_match,
        );

        let ranked: Vec<(String, u64)> = popular_teams(&matches, 6)
            .into_iter()
            .map(|t| (t.name, t.participations))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("Nova".to_string(), 2),
                ("Hydra".to_string(), 1),
                ("Falcons".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_popular_games_idempotent_and_bounded() {
        let list = tournaments();
        let first = popular_games(&list, 2);
        let second = popular_games(&list, 2);

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].title, "CS2");
        assert_eq!(first[0].tournaments_count, 2);
        // Ties keep first-seen order: Dota 2 before Valorant.
        assert_eq!(first[1].title, "Dota 2");

        assert!(popular_games(&list, 0).is_empty());
        assert!(popular_games(&[], 6).is_empty());
    }
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    #[test]
    fn test_active_filter_keeps_only_running() {
        let list = normalize_all(
            &[
                json!({"id": 1, "name": "A", "status": "идёт"}),
                json!({"id": 2, "name": "B", "status": "завершён"}),
                json!({"id": 3, "name": "C", "status": "регистрация"}),
            ],
            normalize_tournament,
        );

        let visible = filter_tournaments(&list, &TournamentFilter::new(StatusFilter::Active, ""));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "A");
    }

    #[test]
    fn test_all_with_empty_query_is_identity_and_filtering_is_idempotent() {
        let list = tournaments();
        assert_eq!(
            filter_tournaments(&list, &TournamentFilter::new(StatusFilter::All, "  ")),
            list
        );

        let filter = TournamentFilter::new(StatusFilter::Upcoming, "группы");
        let once = filter_tournaments(&list, &filter);
        assert_eq!(filter_tournaments(&once, &filter), once);
        assert_eq!(once.len(), 1);
        assert_eq!(once[0].name, "Valorant Clash");
    }

    #[test]
    fn test_view_recomputes_after_each_mutation() {
        let mut view = TournamentView::new(tournaments(), TournamentFilter::default());
        let names = |v: &TournamentView| -> Vec<String> {
            v.visible().into_iter().map(|t| t.name).collect()
        };

        assert_eq!(names(&view), vec!["Winter Cup 2026", "Spring Open"]);

        view.set_search("spring");
        assert_eq!(names(&view), vec!["Spring Open"]);

        view.set_status(StatusFilter::Finished);
        assert!(names(&view).is_empty());

        view.set_search("");
        assert_eq!(names(&view), vec!["CS2 Major Qualifier"]);

        view.replace_tournaments(Vec::new());
        assert!(names(&view).is_empty());
    }
}
