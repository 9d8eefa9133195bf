use super::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use rfx_core::ID;
use rfx_core::LEADERBOARD_TOP;
use rfx_gameroom::Run;
use rfx_gameroom::RunError;
use rfx_leaderboard::LeaderboardError;
use rfx_leaderboard::Ranking;

#[derive(Debug, serde::Deserialize)]
pub struct StartRequest {
    pub name: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct TopQuery {
    pub n: Option<usize>,
}

pub async fn start(arcade: web::Data<Arcade>, body: web::Json<StartRequest>) -> impl Responder {
    match arcade.into_inner().start(&body.name).await {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "run_id": id.to_string() })),
        Err(e @ RunError::InsufficientStamina(_)) => {
            HttpResponse::TooManyRequests().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}
pub async fn leave(arcade: web::Data<Arcade>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match arcade.close(ID::from(path.into_inner())).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "status": "left" })),
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
    }
}
pub async fn enter(
    arcade: web::Data<Arcade>,
    path: web::Path<uuid::Uuid>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    let id: ID<Run> = ID::from(path.into_inner());
    log::info!("client entering run {}", id);
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => match arcade.bridge(id, session, stream).await {
            Ok(()) => response.map_into_left_body(),
            Err(e) => HttpResponse::NotFound()
                .body(e.to_string())
                .map_into_right_body(),
        },
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
pub async fn top(arcade: web::Data<Arcade>, query: web::Query<TopQuery>) -> impl Responder {
    let n = query.n.unwrap_or(LEADERBOARD_TOP).min(LEADERBOARD_TOP);
    match arcade.leaderboard().top(n).await {
        Ok(entries) => HttpResponse::Ok().json(
            entries
                .into_iter()
                .enumerate()
                .map(|(i, entry)| Ranking { rank: i + 1, entry })
                .collect::<Vec<_>>(),
        ),
        Err(e) => unavailable(e),
    }
}
pub async fn rank(arcade: web::Data<Arcade>, path: web::Path<String>) -> impl Responder {
    match arcade.leaderboard().rank(path.trim()).await {
        Ok(ranking) => HttpResponse::Ok().json(ranking),
        Err(e @ LeaderboardError::NotFound(_)) => HttpResponse::NotFound().body(e.to_string()),
        Err(e) => unavailable(e),
    }
}

fn unavailable(e: LeaderboardError) -> HttpResponse {
    log::error!("leaderboard read failed: {}", e);
    HttpResponse::ServiceUnavailable().body(e.to_string())
}
