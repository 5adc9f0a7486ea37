//! Game management module
//!
//! Round engine and HTTP boundary for the Raspisnoy card game: the
//! session builder that materializes every set of a game up front, the
//! card/trick coordinator, and the full-game view.

pub mod dealing;
pub mod deck;
pub mod rotation;
pub mod rounds;
pub mod session;
pub mod tricks;
pub mod view;

use actix_web::{get, post, web, HttpResponse, Result as ActixResult};
use chrono::Utc;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IsolationLevel, QuerySelect, Set,
    TransactionError, TransactionTrait,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthedUser;
use crate::dto::create_game::{CreateGameRequest, GameInfoResponse};
use crate::dto::finish_game::FinishGameRequest;
use crate::dto::full_game_info::FullGameInfo;
use crate::dto::process_card::ProcessCardRequest;
use crate::entity::{games, winners};
use crate::game_management::session::{build_session_plan, persist_session};

/// Create a whole multiplayer session: the game record, its players,
/// and every set with its deals, pre-computed up front. A false
/// `create_game` flag makes the call a no-op.
#[post("/create_game")]
pub async fn create_game(
    _user: AuthedUser,
    body: web::Json<CreateGameRequest>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    let request = body.into_inner();
    if !request.create_game {
        return Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({ "game": null })));
    }

    if request.players.len() < 2 {
        return Ok(HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({
                "error": "A multiplayer session needs at least 2 players"
            })));
    }

    // Plan the full session before opening the transaction; the random
    // draws stay outside the commit path
    let players = request.players;
    let plan = build_session_plan(&players, &mut rand::thread_rng());
    let game_id = Uuid::new_v4();

    let seated = players.clone();
    let result = db
        .transaction::<_, games::Model, DbErr>(move |txn| {
            Box::pin(async move { persist_session(txn, game_id, &seated, plan).await })
        })
        .await;

    match result {
        Ok(game) => {
            info!(game_id = %game.id, players_number = players.len(), "created multiplayer session");
            Ok(HttpResponse::Ok()
                .content_type("application/json")
                .json(GameInfoResponse {
                    id: game.id,
                    players,
                    created_at: game.created_at,
                }))
        }
        Err(e) => Ok(transaction_error_response(e)),
    }
}

/// Move a played card into the trick for its set, advancing the current
/// round when the play closes it
#[post("/game/{game_id}/process_card")]
pub async fn process_card(
    _user: AuthedUser,
    path: web::Path<String>,
    body: web::Json<ProcessCardRequest>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    let game_id = match path.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .content_type("application/json")
                .json(json!({
                    "error": "Invalid game ID format"
                })));
        }
    };

    let request = body.into_inner();
    let result = db
        .transaction::<_, (), DbErr>(move |txn| {
            Box::pin(tricks::process_card_transaction(game_id, request, txn))
        })
        .await;

    match result {
        Ok(()) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({
                "message": "Card processed successfully"
            }))),
        Err(e) => Ok(transaction_error_response(e)),
    }
}

/// Read the current set's trump, hands, and trick piles. A finished
/// game (no current set) answers with a null current round instead.
#[get("/game/{game_id}/state")]
pub async fn get_game_state(
    _user: AuthedUser,
    path: web::Path<String>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    let game_id = match path.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .content_type("application/json")
                .json(json!({
                    "error": "Invalid game ID format"
                })));
        }
    };

    // Repeatable-read snapshot so a card never shows up in a hand and a
    // trick at once while a play commits
    let result = db
        .transaction_with_config::<_, Option<FullGameInfo>, DbErr>(
            move |txn| Box::pin(view::get_full_game_info(txn, game_id)),
            Some(IsolationLevel::RepeatableRead),
            None,
        )
        .await;

    match result {
        Ok(Some(info)) => Ok(HttpResponse::Ok().content_type("application/json").json(info)),
        Ok(None) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({
                "game_id": game_id,
                "current_round": null
            }))),
        Err(e) => Ok(transaction_error_response(e)),
    }
}

/// Close a finished session: flag the game finished once and record the
/// winner associations
#[post("/game/{game_id}/finish")]
pub async fn finish_game(
    _user: AuthedUser,
    path: web::Path<String>,
    body: web::Json<FinishGameRequest>,
    db: web::Data<DatabaseConnection>,
) -> ActixResult<HttpResponse> {
    let game_id = match path.parse::<Uuid>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest()
                .content_type("application/json")
                .json(json!({
                    "error": "Invalid game ID format"
                })));
        }
    };

    let request = body.into_inner();
    let result = db
        .transaction::<_, (), DbErr>(move |txn| {
            Box::pin(async move {
                let game = games::Entity::find_by_id(game_id)
                    .lock(LockType::Update)
                    .one(txn)
                    .await?
                    .ok_or_else(|| DbErr::RecordNotFound(format!("game {game_id} not found")))?;

                if game.is_finished {
                    return Err(DbErr::Custom(format!(
                        "game {game_id} is already finished"
                    )));
                }

                let mut game_model: games::ActiveModel = game.into();
                game_model.is_finished = Set(true);
                game_model.finished_at = Set(Some(Utc::now().into()));
                game_model.update(txn).await?;

                for user_id in request.winner_ids {
                    winners::ActiveModel {
                        game_id: Set(game_id),
                        user_id: Set(user_id),
                    }
                    .insert(txn)
                    .await?;
                }

                Ok(())
            })
        })
        .await;

    match result {
        Ok(()) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({
                "message": "Game finished"
            }))),
        Err(e) => Ok(transaction_error_response(e)),
    }
}

/// Map a failed transaction to the boundary: caller errors keep their
/// detail, storage aborts surface as a 500 with the rolled-back state
/// untouched
fn transaction_error_response(err: TransactionError<DbErr>) -> HttpResponse {
    match err {
        TransactionError::Transaction(DbErr::RecordNotFound(details)) => HttpResponse::NotFound()
            .content_type("application/json")
            .json(json!({ "error": details })),
        TransactionError::Transaction(DbErr::Custom(details)) => HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({ "error": details })),
        other => HttpResponse::InternalServerError()
            .content_type("application/json")
            .json(json!({
                "error": "Database transaction failed",
                "details": other.to_string()
            })),
    }
}
