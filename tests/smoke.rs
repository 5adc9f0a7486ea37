mod common;

use chrono::Utc;
use common::{test_bootstrap, test_issue_token};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde_json::Value;
use uuid::Uuid;

use raspisnoy_backend::entity::{cards, dealings, games, sets, users};

/// Full session lifecycle against a real Postgres instance: build a
/// four-player game, play the first round to its end, drive the current
/// round through the whole schedule, then finish the game.
#[actix_web::test]
#[ignore = "requires DATABASE_URL pointing at a *_test Postgres database"]
async fn smoke_full_session() -> anyhow::Result<()> {
    let db = test_bootstrap().await;
    let app = actix_web::test::init_service(
        actix_web::App::new()
            .app_data(actix_web::web::Data::new(db.clone()))
            .configure(raspisnoy_backend::configure_routes),
    )
    .await;

    // Seat four users
    let mut seated = Vec::new();
    for seat in 0..4 {
        let user_id = Uuid::new_v4();
        let user = users::ActiveModel {
            id: Set(user_id),
            external_id: Set(user_id.to_string()),
            username: Set(format!("smoke-{seat}-{user_id}")),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };
        seated.push(user.insert(&db).await?);
    }

    let token = test_issue_token(&seated[0].external_id, &seated[0].username, 3600);
    let auth = format!("Bearer {token}");

    // A false creation flag is a no-op
    let body = serde_json::json!({ "players": [], "create_game": false });
    let req = actix_web::test::TestRequest::post()
        .uri("/api/create_game")
        .insert_header(("Authorization", auth.as_str()))
        .set_json(body)
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let skipped: Value = actix_web::test::read_body_json(res).await;
    assert!(skipped["game"].is_null());

    // Create the session
    let body = serde_json::json!({
        "players": seated
            .iter()
            .map(|user| serde_json::json!({ "id": user.id, "username": user.username }))
            .collect::<Vec<_>>(),
        "create_game": true,
    });
    let req = actix_web::test::TestRequest::post()
        .uri("/api/create_game")
        .insert_header(("Authorization", auth.as_str()))
        .set_json(body)
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());
    let created: Value = actix_web::test::read_body_json(res).await;
    let game_id: Uuid = created["id"].as_str().unwrap().parse()?;
    assert_eq!(created["players"].as_array().unwrap().len(), 4);

    // The whole schedule exists up front, with exactly one current set
    let all_sets = sets::Entity::find()
        .filter(sets::Column::GameId.eq(game_id))
        .all(&db)
        .await?;
    assert_eq!(all_sets.len(), 34);
    let current: Vec<_> = all_sets.iter().filter(|set| set.is_current_round).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].round_number, 1);
    assert_eq!(current[0].round_name, "1");

    // Round 1 dealt one card per player
    let first_set_id = current[0].id;
    let first_dealings = dealings::Entity::find()
        .filter(dealings::Column::SetId.eq(first_set_id))
        .all(&db)
        .await?;
    assert_eq!(first_dealings.len(), 4);
    let mut dealt_cards = 0u64;
    for dealing in &first_dealings {
        dealt_cards += cards::Entity::find()
            .filter(cards::Column::DealingId.eq(dealing.id))
            .count(&db)
            .await?;
    }
    assert_eq!(dealt_cards, 4);

    // The view shows full hands and an empty trick
    let state = get_state(&app, &auth, game_id).await;
    assert_eq!(
        state["set_id"].as_str().unwrap().parse::<Uuid>()?,
        first_set_id
    );
    assert_eq!(state["round_number"].as_i64(), Some(1));
    assert_eq!(state["entries"].as_array().unwrap().len(), 0);
    assert_eq!(hand_total(&state), 4);

    // Play one card into the trick
    let first_user = state["users"].as_array().unwrap()[0].clone();
    let owner_id = first_user["id"].clone();
    play_card(
        &app,
        &auth,
        game_id,
        serde_json::json!({
            "card_id": first_user["cards"].as_array().unwrap()[0]["id"],
            "set_id": first_set_id,
            "owner_id": owner_id,
            "is_round_end": false,
        }),
    )
    .await;

    let state = get_state(&app, &auth, game_id).await;
    let entries = state["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["cards"].as_array().unwrap().len(), 1);
    assert_eq!(hand_total(&state), 3);

    // A second card for the same owner lands in the same entry, never a
    // duplicate one
    let other_user = state["users"]
        .as_array()
        .unwrap()
        .iter()
        .find(|user| !user["cards"].as_array().unwrap().is_empty())
        .unwrap()
        .clone();
    play_card(
        &app,
        &auth,
        game_id,
        serde_json::json!({
            "card_id": other_user["cards"].as_array().unwrap()[0]["id"],
            "set_id": first_set_id,
            "owner_id": first_user["id"],
            "is_round_end": false,
        }),
    )
    .await;

    let state = get_state(&app, &auth, game_id).await;
    let entries = state["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["cards"].as_array().unwrap().len(), 2);
    assert_eq!(hand_total(&state), 2);

    // A round-ending play hands the current flag to the next set
    let next_user = state["users"]
        .as_array()
        .unwrap()
        .iter()
        .find(|user| !user["cards"].as_array().unwrap().is_empty())
        .unwrap()
        .clone();
    play_card(
        &app,
        &auth,
        game_id,
        serde_json::json!({
            "card_id": next_user["cards"].as_array().unwrap()[0]["id"],
            "set_id": first_set_id,
            "owner_id": next_user["id"],
            "is_round_end": true,
        }),
    )
    .await;

    let state = get_state(&app, &auth, game_id).await;
    assert_eq!(state["round_number"].as_i64(), Some(2));
    // Single-card rounds repeat once per seat at the head of the schedule
    assert_eq!(state["round_name"].as_str(), Some("1"));

    let still_current = sets::Entity::find()
        .filter(sets::Column::GameId.eq(game_id))
        .filter(sets::Column::IsCurrentRound.eq(true))
        .count(&db)
        .await?;
    assert_eq!(still_current, 1);

    // Drive the remaining rounds to exhaustion; past the last set the
    // game has no current round at all, which is a different answer
    // from a live round with an empty trick
    let mut rounds_played = 0;
    loop {
        let state = get_state(&app, &auth, game_id).await;
        if state["set_id"].is_null() {
            assert!(state["current_round"].is_null());
            break;
        }
        let set_id: Uuid = state["set_id"].as_str().unwrap().parse()?;
        let user = state["users"]
            .as_array()
            .unwrap()
            .iter()
            .find(|user| !user["cards"].as_array().unwrap().is_empty())
            .unwrap()
            .clone();
        play_card(
            &app,
            &auth,
            game_id,
            serde_json::json!({
                "card_id": user["cards"].as_array().unwrap()[0]["id"],
                "set_id": set_id,
                "owner_id": user["id"],
                "is_round_end": true,
            }),
        )
        .await;

        rounds_played += 1;
        assert!(rounds_played <= 34, "current round never ran out");
    }
    // Rounds 2 through 34
    assert_eq!(rounds_played, 33);

    let none_current = sets::Entity::find()
        .filter(sets::Column::GameId.eq(game_id))
        .filter(sets::Column::IsCurrentRound.eq(true))
        .count(&db)
        .await?;
    assert_eq!(none_current, 0);

    // Finish the session with a recorded winner
    let body = serde_json::json!({ "winner_ids": [seated[0].id] });
    let req = actix_web::test::TestRequest::post()
        .uri(&format!("/api/game/{game_id}/finish"))
        .insert_header(("Authorization", auth.as_str()))
        .set_json(body)
        .to_request();
    let res = actix_web::test::call_service(&app, req).await;
    assert!(res.status().is_success());

    let game = games::Entity::find_by_id(game_id).one(&db).await?.unwrap();
    assert!(game.is_finished);
    assert!(game.finished_at.is_some());

    Ok(())
}

fn hand_total(state: &Value) -> usize {
    state["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|user| user["cards"].as_array().unwrap().len())
        .sum()
}

async fn get_state<S>(app: &S, auth: &str, game_id: Uuid) -> Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/api/game/{game_id}/state"))
        .insert_header(("Authorization", auth))
        .to_request();
    let res = actix_web::test::call_service(app, req).await;
    assert!(res.status().is_success());
    actix_web::test::read_body_json(res).await
}

async fn play_card<S>(app: &S, auth: &str, game_id: Uuid, body: Value)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = actix_web::test::TestRequest::post()
        .uri(&format!("/api/game/{game_id}/process_card"))
        .insert_header(("Authorization", auth))
        .set_json(body)
        .to_request();
    let res = actix_web::test::call_service(app, req).await;
    assert!(res.status().is_success());
}
