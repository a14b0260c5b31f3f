//! 이러닝 수강 신청 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB, Redis 연결과 결제/메일 클라이언트를 만들고, 서비스를 명시적으로 조립해 주입합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use elearning_backend::caching::redis::RedisClient;
use elearning_backend::config::{
    CheckoutConfig, CheckoutSettings, Environment, JwtConfig, MailConfig, RateLimitConfig,
    ServerConfig, StripeConfig,
};
use elearning_backend::db::Database;
use elearning_backend::repositories::courses::MongoCourseRepository;
use elearning_backend::repositories::enrollments::MongoEnrollmentRepository;
use elearning_backend::repositories::tutors::MongoTutorRepository;
use elearning_backend::repositories::users::MongoUserRepository;
use elearning_backend::routes::configure_all_routes;
use elearning_backend::services::auth::TokenService;
use elearning_backend::services::enrollments::EnrollmentService;
use elearning_backend::services::mail::HttpMailer;
use elearning_backend::services::payments::StripeGateway;
use elearning_backend::utils::display_terminal::{print_boxed_title, print_sub_task};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("ENROLLMENT SERVICE");
    info!("🚀 수강 신청 서비스 시작중... (환경: {:?})", Environment::current());

    // 데이터 스토어 초기화
    let (database, redis_client) = initialize_data_stores().await?;

    let enrollment_service = web::Data::new(build_enrollment_service(database, redis_client).await?);
    let token_service = web::Data::new(TokenService::new(&JwtConfig::secret()));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(enrollment_service, token_service).await
}

/// 리포지토리와 외부 클라이언트를 만들어 수강 신청 서비스를 조립합니다
async fn build_enrollment_service(
    database: Arc<Database>,
    redis_client: Arc<RedisClient>,
) -> io::Result<EnrollmentService> {
    let enrollments = Arc::new(MongoEnrollmentRepository::new(database.clone(), redis_client.clone()));
    enrollments
        .create_indexes()
        .await
        .map_err(|e| startup_error("수강 신청 인덱스 생성 실패", e))?;
    print_sub_task("enrollments 인덱스", "OK");

    let courses = Arc::new(MongoCourseRepository::new(database.clone(), redis_client));
    let users = Arc::new(MongoUserRepository::new(database.clone()));
    let tutors = Arc::new(MongoTutorRepository::new(database));

    let stripe_key = StripeConfig::secret_key().map_err(|e| startup_error("결제 설정 누락", e))?;
    let payments = Arc::new(StripeGateway::new(stripe_key, StripeConfig::api_base()));
    print_sub_task("Stripe", &StripeConfig::api_base());

    let mailer = Arc::new(HttpMailer::new(
        MailConfig::api_url().map_err(|e| startup_error("메일 설정 누락", e))?,
        MailConfig::api_key().map_err(|e| startup_error("메일 설정 누락", e))?,
        MailConfig::from_address(),
        MailConfig::from_name(),
    ));
    print_sub_task("Mailer", &MailConfig::from_address());

    Ok(EnrollmentService::new(
        enrollments,
        courses,
        users,
        tutors,
        payments,
        mailer,
        CheckoutSettings::from_env(),
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(
    enrollment_service: web::Data<EnrollmentService>,
    token_service: web::Data<TokenService>,
) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let client_url = CheckoutConfig::client_url();
    let allow_local = Environment::current().allows_local_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&client_url, allow_local))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(enrollment_service.clone())
            .app_data(token_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=elearning_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 초기화합니다
async fn initialize_data_stores() -> io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| startup_error("데이터베이스 연결 실패", e))?;

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| startup_error("Redis 연결 실패", e))?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// 프론트엔드 오리진만 허용하는 CORS 설정
///
/// 개발/테스트 환경에서는 로컬호스트 오리진도 허용합니다.
fn configure_cors(client_url: &str, allow_local: bool) -> Cors {
    let mut cors = Cors::default().allowed_origin(client_url);

    if allow_local {
        for origin in [
            "http://localhost:3000",
            "http://127.0.0.1:3000",
            "http://localhost:5173",
            "http://127.0.0.1:5173",
        ] {
            if origin != client_url {
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 쿠키 토큰 지원
        .supports_credentials()
        .max_age(3600)
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    error!("❌ {}: {}", context, err);
    io::Error::other(format!("{}: {}", context, err))
}
