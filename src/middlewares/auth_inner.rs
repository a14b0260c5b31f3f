//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::models::auth::{AuthenticatedUser, RequiredRole};
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let user = match authenticate(&req) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패 {} {}: {}", req.method(), req.path(), err);
                    return Ok(reject(req, err));
                }
            };

            // 역할 검증
            if let Some(ref required) = required_role {
                if !required.is_satisfied(&user.roles) {
                    log::warn!("권한 부족: 사용자 ID {} ({:?}), 필요 권한: {:?}",
                        user.user_id, user.roles, required);
                    let err = AppError::AuthorizationError("접근 권한이 부족합니다".to_string());
                    return Ok(reject(req, err));
                }
            }

            log::debug!("인증 성공: 사용자 ID {}", user.user_id);
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 에러를 공통 봉투 응답으로 변환해 요청을 종료합니다.
fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, err.error_response()).map_into_right_body()
}

/// 요청에서 JWT 토큰을 추출하고 검증
///
/// `Authorization: Bearer` 헤더를 우선하고, 없으면 액세스 토큰 쿠키를 봅니다.
fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

    let token = match req.headers().get("Authorization").and_then(|h| h.to_str().ok()) {
        Some(header) => token_service.extract_bearer_token(header)?.to_string(),
        None => req
            .cookie(&JwtConfig::cookie_name())
            .map(|c| c.value().to_string())
            .ok_or_else(|| AppError::AuthenticationError("인증 토큰이 없습니다".to_string()))?,
    };

    let claims = token_service.verify_token(&token)?;
    Ok(AuthenticatedUser::from(claims))
}
