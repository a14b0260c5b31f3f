//! 수강 신청 서비스 구현
//!
//! 수강 신청 레코드의 상태를 바꾸는 유일한 주체입니다.
//!
//! ## 결제 검증 상태 결정
//!
//! | 저장된 상태 | 프로바이더 세션 | 쓰기 | 보고 |
//! |-------------|-----------------|------|------|
//! | `paid` | (조회 안 함) | 없음 | `verified` |
//! | `pending` | `payment_status=paid` | `pending → paid` | `verified` + 알림 메일 |
//! | `pending` | `status=expired` | `pending → failed` | `failed` |
//! | `pending` | 그 외 | 없음 | `pending` |
//! | `failed` | 무관 | 없음 | `failed` |
//!
//! 상태 쓰기는 `pending`에서만 성공하는 조건부 갱신입니다. 동시에 들어온 검증 요청 중
//! 갱신에 성공한 요청만 알림 메일을 보내고, 나머지는 갱신된 레코드를 다시 읽어 보고합니다.

use std::sync::Arc;
use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use crate::config::CheckoutSettings;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::enrollments::{
    parse_object_id, AdminEnrollmentItem, BuyerEnrollmentItem, CreateEnrollmentResponse,
    EnrollmentCheckResponse, EnrollmentListResponse, EnrollmentResponse, NewEnrollment,
    PaymentStatus, VerifyPaymentResponse,
};
use crate::domain::dto::pagination::{PageRequest, Pagination};
use crate::domain::entities::{Enrollment, EnrollmentStatus};
use crate::domain::models::enrollment::{AdminListFilter, BuyerListFilter};
use crate::domain::models::notification::{PurchaseConfirmation, TutorEnrollmentNotice};
use crate::domain::models::payment::{to_minor_units, CheckoutMetadata, CheckoutRequest};
use crate::repositories::courses::CourseStore;
use crate::repositories::enrollments::EnrollmentStore;
use crate::repositories::tutors::TutorStore;
use crate::repositories::users::UserStore;
use crate::services::mail::Mailer;
use crate::services::payments::PaymentGateway;

pub struct EnrollmentService {
    enrollments: Arc<dyn EnrollmentStore>,
    courses: Arc<dyn CourseStore>,
    users: Arc<dyn UserStore>,
    tutors: Arc<dyn TutorStore>,
    payments: Arc<dyn PaymentGateway>,
    mailer: Arc<dyn Mailer>,
    checkout: CheckoutSettings,
}

impl EnrollmentService {
    pub fn new(
        enrollments: Arc<dyn EnrollmentStore>,
        courses: Arc<dyn CourseStore>,
        users: Arc<dyn UserStore>,
        tutors: Arc<dyn TutorStore>,
        payments: Arc<dyn PaymentGateway>,
        mailer: Arc<dyn Mailer>,
        checkout: CheckoutSettings,
    ) -> Self {
        Self {
            enrollments,
            courses,
            users,
            tutors,
            payments,
            mailer,
            checkout,
        }
    }

    /// 체크아웃 세션을 열고 `pending` 수강 신청을 저장합니다.
    ///
    /// 같은 강의에 대한 `pending`/`failed` 기록은 재시도를 막지 않으며, `paid` 기록만 충돌입니다.
    pub async fn create_enrollment(
        &self,
        buyer_id: &str,
        input: NewEnrollment,
    ) -> AppResult<CreateEnrollmentResponse> {
        let buyer_id = parse_buyer_id(buyer_id)?;

        if self.enrollments.find_paid(&buyer_id, &input.course_id).await?.is_some() {
            return Err(AppError::ConflictError("이미 수강 중인 강의입니다".to_string()));
        }

        let course = self
            .courses
            .find_course(&input.course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("강의를 찾을 수 없습니다".to_string()))?;

        let request = CheckoutRequest {
            item_name: course.title,
            amount_minor: to_minor_units(input.price),
            currency: self.checkout.currency.clone(),
            success_url: self.checkout.success_url(),
            cancel_url: self.checkout.cancel_url(),
            metadata: CheckoutMetadata {
                user_id: buyer_id.to_hex(),
                course_id: input.course_id.to_hex(),
                tutor_id: input.tutor_id.to_hex(),
                category_id: input.category_id.to_hex(),
            },
        };

        let session = self.payments.create_checkout_session(&request).await?;

        let enrollment = Enrollment::pending(
            buyer_id,
            input.tutor_id,
            input.course_id,
            input.category_id,
            input.price,
            session.session_id.clone(),
        );

        let saved = match self.enrollments.insert(enrollment).await {
            Ok(saved) => saved,
            Err(e) => {
                warn!(
                    "수강 신청 저장 실패, 체크아웃 세션 만료 시도 (session={}): {}",
                    session.session_id, e
                );
                match self.payments.expire_session(&session.session_id).await {
                    Ok(()) => info!("체크아웃 세션 만료 완료: {}", session.session_id),
                    Err(expire_err) => warn!(
                        "체크아웃 세션 만료 실패 (session={}): {}",
                        session.session_id, expire_err
                    ),
                }
                return Err(e);
            }
        };

        let enrollment_id = saved
            .id_string()
            .ok_or_else(|| AppError::InternalError("수강 신청 ID가 없습니다".to_string()))?;

        info!(
            "🧾 수강 신청 생성: enrollment={}, session={}",
            enrollment_id, session.session_id
        );

        Ok(CreateEnrollmentResponse {
            session_id: session.session_id,
            enrollment_id,
            checkout_url: session.checkout_url,
        })
    }

    /// 체크아웃 세션의 결제 결과를 확인하고 수강 신청 상태를 확정합니다.
    pub async fn verify_payment(&self, session_id: &str) -> AppResult<VerifyPaymentResponse> {
        let enrollment = self
            .enrollments
            .find_by_payment_id(session_id)
            .await?
            .ok_or_else(|| AppError::NotFound("결제 세션에 해당하는 수강 신청이 없습니다".to_string()))?;

        if enrollment.is_paid() {
            return Ok(verification(enrollment));
        }

        let provider = self.payments.retrieve_session(session_id).await?;

        let target = if provider.is_paid() {
            EnrollmentStatus::Paid
        } else if provider.is_expired() {
            EnrollmentStatus::Failed
        } else {
            return Ok(verification(enrollment));
        };

        match self
            .enrollments
            .transition_status(session_id, EnrollmentStatus::Pending, target)
            .await?
        {
            Some(updated) => {
                info!("💳 결제 상태 확정: session={} → {}", session_id, target.as_str());
                if updated.is_paid() {
                    self.notify_paid(&updated).await?;
                }
                Ok(verification(updated))
            }
            None => {
                // 다른 요청이 먼저 상태를 바꿨으므로 현재 값을 보고
                let current = self
                    .enrollments
                    .find_by_payment_id(session_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("결제 세션에 해당하는 수강 신청이 없습니다".to_string()))?;
                Ok(verification(current))
            }
        }
    }

    /// 구매자와 강사에게 알림 메일을 보냅니다. 둘 다 시도한 뒤 하나라도 실패하면 `EmailError`입니다.
    async fn notify_paid(&self, enrollment: &Enrollment) -> AppResult<()> {
        let buyer = self.users.find_user(&enrollment.user_id).await?;
        let tutor = self.tutors.find_tutor(&enrollment.tutor_id).await?;
        let course = self.courses.find_course(&enrollment.course_id).await?;

        let (Some(buyer), Some(tutor), Some(course)) = (buyer, tutor, course) else {
            warn!(
                "알림 수신자 정보 누락 (enrollment={}): 메일을 보낼 수 없습니다",
                enrollment.id_string().unwrap_or_default()
            );
            return Err(AppError::EmailError("알림 수신자 정보를 찾을 수 없습니다".to_string()));
        };

        let buyer_sent = self
            .mailer
            .send_purchase_confirmation(&PurchaseConfirmation {
                buyer_email: buyer.email,
                buyer_name: buyer.name.clone(),
                course_title: course.title.clone(),
                tutor_name: tutor.name.clone(),
                price: enrollment.price,
            })
            .await;

        let tutor_sent = self
            .mailer
            .send_tutor_enrollment_notice(&TutorEnrollmentNotice {
                tutor_email: tutor.email,
                tutor_name: tutor.name,
                buyer_name: buyer.name,
                course_title: course.title,
                price: enrollment.price,
            })
            .await;

        if buyer_sent && tutor_sent {
            Ok(())
        } else {
            Err(AppError::EmailError(format!(
                "알림 메일 발송 실패 (buyer={}, tutor={})",
                buyer_sent, tutor_sent
            )))
        }
    }

    /// 구매자 본인의 결제 완료 수강 목록
    pub async fn list_my_enrollments(
        &self,
        buyer_id: &str,
        filter: &BuyerListFilter,
        page: &PageRequest,
    ) -> AppResult<EnrollmentListResponse<BuyerEnrollmentItem>> {
        let buyer_id = parse_buyer_id(buyer_id)?;
        let result = self.enrollments.list_for_buyer(&buyer_id, filter, page).await?;

        Ok(EnrollmentListResponse {
            enrollments: result.items,
            pagination: Pagination::new(page, result.total_count),
        })
    }

    /// 구매자가 강의를 결제 완료했는지 확인합니다.
    pub async fn check_enrollment(&self, buyer_id: &str, course_id: &str) -> AppResult<EnrollmentCheckResponse> {
        let buyer_id = parse_buyer_id(buyer_id)?;
        let course_id = parse_object_id(course_id, "courseId")?;

        let paid = self.enrollments.find_paid(&buyer_id, &course_id).await?;

        Ok(EnrollmentCheckResponse {
            is_enrolled: paid.is_some(),
            enrollment_id: paid.and_then(|e| e.id_string()),
        })
    }

    /// 관리자 전체 수강 신청 목록
    pub async fn list_all_enrollments(
        &self,
        filter: &AdminListFilter,
        page: &PageRequest,
    ) -> AppResult<EnrollmentListResponse<AdminEnrollmentItem>> {
        let result = self.enrollments.list_all(filter, page).await?;

        Ok(EnrollmentListResponse {
            enrollments: result.items,
            pagination: Pagination::new(page, result.total_count),
        })
    }
}

/// 토큰 주체(sub)를 구매자 ObjectId로 변환합니다.
fn parse_buyer_id(buyer_id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(buyer_id)
        .map_err(|_| AppError::AuthenticationError("토큰의 사용자 ID가 올바르지 않습니다".to_string()))
}

fn verification(enrollment: Enrollment) -> VerifyPaymentResponse {
    let payment_status = PaymentStatus::from(enrollment.status);
    VerifyPaymentResponse {
        enrollment: EnrollmentResponse::from(enrollment),
        payment_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::pagination::Page;
    use crate::domain::entities::{Course, Tutor, User};
    use crate::domain::models::payment::{CheckoutSession, ProviderSession};
    use crate::repositories::courses::MockCourseStore;
    use crate::repositories::enrollments::MockEnrollmentStore;
    use crate::repositories::tutors::MockTutorStore;
    use crate::repositories::users::MockUserStore;
    use crate::services::mail::MockMailer;
    use crate::services::payments::MockPaymentGateway;

    const BUYER: &str = "665f1b2c3d4e5f6a7b8c9d10";
    const COURSE: &str = "665f1b2c3d4e5f6a7b8c9d01";
    const TUTOR: &str = "665f1b2c3d4e5f6a7b8c9d02";
    const CATEGORY: &str = "665f1b2c3d4e5f6a7b8c9d03";
    const SESSION: &str = "cs_test_abc";

    fn oid(hex: &str) -> ObjectId {
        ObjectId::parse_str(hex).unwrap()
    }

    #[derive(Default)]
    struct Mocks {
        enrollments: MockEnrollmentStore,
        courses: MockCourseStore,
        users: MockUserStore,
        tutors: MockTutorStore,
        payments: MockPaymentGateway,
        mailer: MockMailer,
    }

    impl Mocks {
        fn into_service(self) -> EnrollmentService {
            EnrollmentService::new(
                Arc::new(self.enrollments),
                Arc::new(self.courses),
                Arc::new(self.users),
                Arc::new(self.tutors),
                Arc::new(self.payments),
                Arc::new(self.mailer),
                CheckoutSettings::new("http://localhost:3000/", "inr"),
            )
        }
    }

    fn new_enrollment() -> NewEnrollment {
        NewEnrollment {
            course_id: oid(COURSE),
            tutor_id: oid(TUTOR),
            category_id: oid(CATEGORY),
            price: 499.0,
        }
    }

    fn course() -> Course {
        Course {
            id: Some(oid(COURSE)),
            title: "Rust 입문".to_string(),
            tutor_id: oid(TUTOR),
            category_id: oid(CATEGORY),
            price: 499.0,
            thumbnail: None,
        }
    }

    fn stored(status: EnrollmentStatus) -> Enrollment {
        let mut enrollment = Enrollment::pending(
            oid(BUYER),
            oid(TUTOR),
            oid(COURSE),
            oid(CATEGORY),
            499.0,
            SESSION.to_string(),
        );
        enrollment.id = Some(ObjectId::new());
        enrollment.status = status;
        enrollment
    }

    fn provider(payment_status: &str, status: &str) -> ProviderSession {
        ProviderSession {
            payment_status: payment_status.to_string(),
            status: status.to_string(),
        }
    }

    fn expect_recipients(mocks: &mut Mocks) {
        mocks.users.expect_find_user().returning(|_| {
            Ok(Some(User { id: Some(oid(BUYER)), name: "Kim".into(), email: "buyer@example.com".into() }))
        });
        mocks.tutors.expect_find_tutor().returning(|_| {
            Ok(Some(Tutor { id: Some(oid(TUTOR)), name: "Park".into(), email: "tutor@example.com".into() }))
        });
        mocks.courses.expect_find_course().returning(|_| Ok(Some(course())));
    }

    // 시나리오 A: 체크아웃 시작
    #[actix_web::test]
    async fn test_create_enrollment_opens_session_and_stores_pending() {
        let mut mocks = Mocks::default();

        mocks.enrollments.expect_find_paid().times(1).returning(|_, _| Ok(None));
        mocks.courses.expect_find_course().times(1).returning(|_| Ok(Some(course())));
        mocks
            .payments
            .expect_create_checkout_session()
            .withf(|request| {
                request.item_name == "Rust 입문"
                    && request.amount_minor == 49_900
                    && request.currency == "inr"
                    && request.success_url
                        == "http://localhost:3000/payment/success?session_id={CHECKOUT_SESSION_ID}"
                    && request.cancel_url == "http://localhost:3000/payment/cancel"
                    && request.metadata.user_id == BUYER
                    && request.metadata.course_id == COURSE
            })
            .times(1)
            .returning(|_| {
                Ok(CheckoutSession {
                    session_id: SESSION.to_string(),
                    checkout_url: "https://checkout.stripe.com/c/pay/cs_test_abc".to_string(),
                })
            });
        mocks
            .enrollments
            .expect_insert()
            .withf(|e| e.payment_id == SESSION && e.status == EnrollmentStatus::Pending && e.user_id == oid(BUYER))
            .times(1)
            .returning(|mut e| {
                e.id = Some(oid("665f1b2c3d4e5f6a7b8c9d99"));
                Ok(e)
            });

        let response = mocks
            .into_service()
            .create_enrollment(BUYER, new_enrollment())
            .await
            .unwrap();

        assert_eq!(response.session_id, SESSION);
        assert_eq!(response.enrollment_id, "665f1b2c3d4e5f6a7b8c9d99");
        assert_eq!(response.checkout_url, "https://checkout.stripe.com/c/pay/cs_test_abc");
    }

    // 시나리오 D: 이미 결제한 강의 재구매
    #[actix_web::test]
    async fn test_create_enrollment_conflicts_when_already_paid() {
        let mut mocks = Mocks::default();
        mocks
            .enrollments
            .expect_find_paid()
            .returning(|_, _| Ok(Some(stored(EnrollmentStatus::Paid))));

        let result = mocks.into_service().create_enrollment(BUYER, new_enrollment()).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_create_enrollment_unknown_course() {
        let mut mocks = Mocks::default();
        mocks.enrollments.expect_find_paid().returning(|_, _| Ok(None));
        mocks.courses.expect_find_course().returning(|_| Ok(None));

        let result = mocks.into_service().create_enrollment(BUYER, new_enrollment()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_create_enrollment_rejects_malformed_buyer_id() {
        let result = Mocks::default()
            .into_service()
            .create_enrollment("not-an-id", new_enrollment())
            .await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_create_enrollment_provider_failure_stores_nothing() {
        let mut mocks = Mocks::default();
        mocks.enrollments.expect_find_paid().returning(|_, _| Ok(None));
        mocks.courses.expect_find_course().returning(|_| Ok(Some(course())));
        mocks
            .payments
            .expect_create_checkout_session()
            .returning(|_| Err(AppError::ExternalServiceError("down".into())));
        mocks.enrollments.expect_insert().never();

        let result = mocks.into_service().create_enrollment(BUYER, new_enrollment()).await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[actix_web::test]
    async fn test_create_enrollment_expires_session_when_insert_fails() {
        let mut mocks = Mocks::default();
        mocks.enrollments.expect_find_paid().returning(|_, _| Ok(None));
        mocks.courses.expect_find_course().returning(|_| Ok(Some(course())));
        mocks.payments.expect_create_checkout_session().returning(|_| {
            Ok(CheckoutSession {
                session_id: SESSION.to_string(),
                checkout_url: "https://checkout.stripe.com/x".to_string(),
            })
        });
        mocks
            .enrollments
            .expect_insert()
            .returning(|_| Err(AppError::DatabaseError("write failed".into())));
        mocks
            .payments
            .expect_expire_session()
            .withf(|id| id == SESSION)
            .times(1)
            .returning(|_| Ok(()));

        let result = mocks.into_service().create_enrollment(BUYER, new_enrollment()).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_create_enrollment_reports_storage_error_even_if_expire_fails() {
        let mut mocks = Mocks::default();
        mocks.enrollments.expect_find_paid().returning(|_, _| Ok(None));
        mocks.courses.expect_find_course().returning(|_| Ok(Some(course())));
        mocks.payments.expect_create_checkout_session().returning(|_| {
            Ok(CheckoutSession {
                session_id: SESSION.to_string(),
                checkout_url: "https://checkout.stripe.com/x".to_string(),
            })
        });
        mocks
            .enrollments
            .expect_insert()
            .returning(|_| Err(AppError::DatabaseError("write failed".into())));
        mocks
            .payments
            .expect_expire_session()
            .returning(|_| Err(AppError::ExternalServiceError("expire failed".into())));

        let result = mocks.into_service().create_enrollment(BUYER, new_enrollment()).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    // 시나리오 B: 결제 완료 확정
    #[actix_web::test]
    async fn test_verify_paid_session_settles_and_notifies() {
        let mut mocks = Mocks::default();
        mocks
            .enrollments
            .expect_find_by_payment_id()
            .times(1)
            .returning(|_| Ok(Some(stored(EnrollmentStatus::Pending))));
        mocks
            .payments
            .expect_retrieve_session()
            .times(1)
            .returning(|_| Ok(provider("paid", "complete")));
        mocks
            .enrollments
            .expect_transition_status()
            .withf(|id, from, to| {
                id == SESSION && *from == EnrollmentStatus::Pending && *to == EnrollmentStatus::Paid
            })
            .times(1)
            .returning(|_, _, _| Ok(Some(stored(EnrollmentStatus::Paid))));
        expect_recipients(&mut mocks);
        mocks
            .mailer
            .expect_send_purchase_confirmation()
            .withf(|n| n.buyer_email == "buyer@example.com" && n.course_title == "Rust 입문")
            .times(1)
            .returning(|_| true);
        mocks
            .mailer
            .expect_send_tutor_enrollment_notice()
            .withf(|n| n.tutor_email == "tutor@example.com" && n.buyer_name == "Kim")
            .times(1)
            .returning(|_| true);

        let response = mocks.into_service().verify_payment(SESSION).await.unwrap();

        assert_eq!(response.payment_status, PaymentStatus::Verified);
        assert_eq!(response.enrollment.status, EnrollmentStatus::Paid);
        assert_eq!(response.enrollment.payment_id, SESSION);
    }

    // 시나리오 C: 만료된 세션
    #[actix_web::test]
    async fn test_verify_expired_session_marks_failed_without_mail() {
        let mut mocks = Mocks::default();
        mocks
            .enrollments
            .expect_find_by_payment_id()
            .returning(|_| Ok(Some(stored(EnrollmentStatus::Pending))));
        mocks
            .payments
            .expect_retrieve_session()
            .returning(|_| Ok(provider("unpaid", "expired")));
        mocks
            .enrollments
            .expect_transition_status()
            .withf(|_, from, to| *from == EnrollmentStatus::Pending && *to == EnrollmentStatus::Failed)
            .times(1)
            .returning(|_, _, _| Ok(Some(stored(EnrollmentStatus::Failed))));
        mocks.mailer.expect_send_purchase_confirmation().never();
        mocks.mailer.expect_send_tutor_enrollment_notice().never();

        let response = mocks.into_service().verify_payment(SESSION).await.unwrap();

        assert_eq!(response.payment_status, PaymentStatus::Failed);
        assert_eq!(response.enrollment.status, EnrollmentStatus::Failed);
    }

    // 결제가 아직 진행 중인 세션
    #[actix_web::test]
    async fn test_verify_open_session_leaves_pending() {
        let mut mocks = Mocks::default();
        mocks
            .enrollments
            .expect_find_by_payment_id()
            .returning(|_| Ok(Some(stored(EnrollmentStatus::Pending))));
        mocks
            .payments
            .expect_retrieve_session()
            .returning(|_| Ok(provider("unpaid", "open")));
        mocks.enrollments.expect_transition_status().never();

        let response = mocks.into_service().verify_payment(SESSION).await.unwrap();

        assert_eq!(response.payment_status, PaymentStatus::Pending);
        assert_eq!(response.enrollment.status, EnrollmentStatus::Pending);
    }

    // 이미 확정된 결제 재검증
    #[actix_web::test]
    async fn test_reverify_paid_enrollment_is_idempotent() {
        let mut mocks = Mocks::default();
        mocks
            .enrollments
            .expect_find_by_payment_id()
            .times(1)
            .returning(|_| Ok(Some(stored(EnrollmentStatus::Paid))));
        mocks.payments.expect_retrieve_session().never();
        mocks.enrollments.expect_transition_status().never();
        mocks.mailer.expect_send_purchase_confirmation().never();

        let response = mocks.into_service().verify_payment(SESSION).await.unwrap();

        assert_eq!(response.payment_status, PaymentStatus::Verified);
    }

    #[actix_web::test]
    async fn test_failed_enrollment_is_never_promoted() {
        let mut mocks = Mocks::default();
        mocks
            .enrollments
            .expect_find_by_payment_id()
            .times(2)
            .returning(|_| Ok(Some(stored(EnrollmentStatus::Failed))));
        mocks
            .payments
            .expect_retrieve_session()
            .returning(|_| Ok(provider("paid", "complete")));
        // pending 조건이 맞지 않아 갱신되지 않음
        mocks
            .enrollments
            .expect_transition_status()
            .times(1)
            .returning(|_, _, _| Ok(None));
        mocks.mailer.expect_send_purchase_confirmation().never();

        let response = mocks.into_service().verify_payment(SESSION).await.unwrap();

        assert_eq!(response.payment_status, PaymentStatus::Failed);
        assert_eq!(response.enrollment.status, EnrollmentStatus::Failed);
    }

    #[actix_web::test]
    async fn test_concurrent_verifier_that_loses_does_not_notify() {
        let mut mocks = Mocks::default();
        let mut lookups = 0;
        mocks.enrollments.expect_find_by_payment_id().times(2).returning(move |_| {
            lookups += 1;
            if lookups == 1 {
                Ok(Some(stored(EnrollmentStatus::Pending)))
            } else {
                Ok(Some(stored(EnrollmentStatus::Paid)))
            }
        });
        mocks
            .payments
            .expect_retrieve_session()
            .returning(|_| Ok(provider("paid", "complete")));
        mocks
            .enrollments
            .expect_transition_status()
            .returning(|_, _, _| Ok(None));
        mocks.mailer.expect_send_purchase_confirmation().never();
        mocks.mailer.expect_send_tutor_enrollment_notice().never();

        let response = mocks.into_service().verify_payment(SESSION).await.unwrap();

        assert_eq!(response.payment_status, PaymentStatus::Verified);
    }

    #[actix_web::test]
    async fn test_verify_unknown_session() {
        let mut mocks = Mocks::default();
        mocks.enrollments.expect_find_by_payment_id().returning(|_| Ok(None));
        mocks.payments.expect_retrieve_session().never();

        let result = mocks.into_service().verify_payment("cs_unknown").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_verify_provider_error_leaves_record_untouched() {
        let mut mocks = Mocks::default();
        mocks
            .enrollments
            .expect_find_by_payment_id()
            .returning(|_| Ok(Some(stored(EnrollmentStatus::Pending))));
        mocks
            .payments
            .expect_retrieve_session()
            .returning(|_| Err(AppError::ExternalServiceError("timeout".into())));
        mocks.enrollments.expect_transition_status().never();

        let result = mocks.into_service().verify_payment(SESSION).await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[actix_web::test]
    async fn test_mail_failure_is_reported_after_commit() {
        let mut mocks = Mocks::default();
        mocks
            .enrollments
            .expect_find_by_payment_id()
            .returning(|_| Ok(Some(stored(EnrollmentStatus::Pending))));
        mocks
            .payments
            .expect_retrieve_session()
            .returning(|_| Ok(provider("paid", "complete")));
        mocks
            .enrollments
            .expect_transition_status()
            .times(1)
            .returning(|_, _, _| Ok(Some(stored(EnrollmentStatus::Paid))));
        expect_recipients(&mut mocks);
        mocks.mailer.expect_send_purchase_confirmation().times(1).returning(|_| false);
        // 구매자 메일이 실패해도 강사 메일은 시도
        mocks.mailer.expect_send_tutor_enrollment_notice().times(1).returning(|_| true);

        let result = mocks.into_service().verify_payment(SESSION).await;

        assert!(matches!(result, Err(AppError::EmailError(_))));
    }

    #[actix_web::test]
    async fn test_check_enrollment() {
        let mut mocks = Mocks::default();
        let paid = stored(EnrollmentStatus::Paid);
        let paid_id = paid.id_string().unwrap();
        mocks
            .enrollments
            .expect_find_paid()
            .withf(|user, course| *user == oid(BUYER) && *course == oid(COURSE))
            .returning(move |_, _| Ok(Some(paid.clone())));

        let response = mocks.into_service().check_enrollment(BUYER, COURSE).await.unwrap();

        assert!(response.is_enrolled);
        assert_eq!(response.enrollment_id, Some(paid_id));
    }

    #[actix_web::test]
    async fn test_check_enrollment_not_enrolled() {
        let mut mocks = Mocks::default();
        mocks.enrollments.expect_find_paid().returning(|_, _| Ok(None));

        let response = mocks.into_service().check_enrollment(BUYER, COURSE).await.unwrap();

        assert!(!response.is_enrolled);
        assert_eq!(response.enrollment_id, None);
    }

    #[actix_web::test]
    async fn test_check_enrollment_invalid_course_id() {
        let result = Mocks::default().into_service().check_enrollment(BUYER, "abc").await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    // 시나리오 E: 결제 완료 12건 중 두 번째 페이지
    #[actix_web::test]
    async fn test_list_my_enrollments_pagination() {
        let mut mocks = Mocks::default();
        mocks
            .enrollments
            .expect_list_for_buyer()
            .withf(|user, _, page| *user == oid(BUYER) && page.page == 2 && page.limit == 5 && page.skip() == 5)
            .returning(|_, _, _| Ok(Page { items: vec![], total_count: 12 }));

        let page = PageRequest::clamped(2, 5);
        let response = mocks
            .into_service()
            .list_my_enrollments(BUYER, &BuyerListFilter::default(), &page)
            .await
            .unwrap();

        assert!(response.enrollments.is_empty());
        assert_eq!(response.pagination.current_page, 2);
        assert_eq!(response.pagination.total_pages, 3);
        assert_eq!(response.pagination.total_count, 12);
        assert_eq!(response.pagination.limit, 5);
    }

    #[actix_web::test]
    async fn test_list_all_enrollments_passes_filter() {
        let mut mocks = Mocks::default();
        mocks
            .enrollments
            .expect_list_all()
            .withf(|filter, _| filter.status == Some(EnrollmentStatus::Paid))
            .returning(|_, _| Ok(Page { items: vec![], total_count: 0 }));

        let filter = AdminListFilter {
            status: Some(EnrollmentStatus::Paid),
            ..Default::default()
        };
        let response = mocks
            .into_service()
            .list_all_enrollments(&filter, &PageRequest::default())
            .await
            .unwrap();

        assert_eq!(response.pagination.total_pages, 0);
        assert_eq!(response.pagination.limit, 10);
    }
}
