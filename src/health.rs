use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::redis::cmd;
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn database_status(db: &DatabaseConnection) -> &'static str {
    match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: database check failed");
            "unhealthy"
        }
    }
}

async fn redis_status(pool: &Pool) -> &'static str {
    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!(error = %e, "Readiness: no Redis connection");
            return "unhealthy";
        }
    };

    match cmd("PING").query_async::<String>(&mut *conn).await {
        Ok(_) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness: Redis PING failed");
            "unhealthy"
        }
    }
}

/// READINESS PROBE
/// - Checks Postgres
/// - Checks Redis when a pool is registered, otherwise reports it skipped
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: Option<web::Data<Arc<Pool>>>,
) -> impl Responder {
    let db_status = database_status(&db).await;
    let redis_status = match redis {
        Some(pool) => redis_status(&pool).await,
        None => "skipped",
    };

    let response = ReadinessResponse {
        status: if db_status == "ok" && redis_status != "unhealthy" {
            "ok"
        } else {
            "unhealthy"
        },
        database: db_status,
        redis: redis_status,
    };

    if response.status == "ok" {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
