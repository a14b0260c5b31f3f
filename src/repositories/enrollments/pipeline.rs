//! 수강 신청 목록 집계 파이프라인
//!
//! 조인/검색/정렬/페이지네이션을 모두 MongoDB 집계 단계로 표현합니다.
//!
//! ```text
//! $match(소유자/상태/기간)
//!   → $lookup + $unwind (강의, 강사, [구매자])
//!   → $match(검색어)
//!   → $facet { items: [$sort, $skip, $limit, $project], total: [$count] }
//! ```
//!
//! `$unwind`는 조인 대상이 없는 레코드를 결과에서 제외합니다.
//! `$project`는 ObjectId와 날짜를 문자열로 바꿔 응답 DTO로 바로 역직렬화되도록 합니다.

use mongodb::bson::{self, doc, oid::ObjectId, Document};
use serde::Deserialize;
use crate::db::collections;
use crate::domain::dto::pagination::{Page, PageRequest};
use crate::domain::entities::EnrollmentStatus;
use crate::domain::models::enrollment::{AdminListFilter, BuyerListFilter, EnrollmentSort};
use crate::utils::string_utils::escape_regex;

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%LZ";

/// 구매자 본인의 결제 완료 수강 목록
pub fn buyer_enrollments_pipeline(
    user_id: &ObjectId,
    filter: &BuyerListFilter,
    page: &PageRequest,
) -> Vec<Document> {
    let mut pipeline = vec![doc! {
        "$match": {
            "userId": *user_id,
            "status": EnrollmentStatus::Paid.as_str(),
        }
    }];

    pipeline.extend(lookup_one(collections::COURSES, "courseId", "course"));
    pipeline.extend(lookup_one(collections::TUTORS, "tutorId", "tutor"));

    if let Some(search) = search_match(filter.search.as_deref(), &["course.title", "tutor.name"]) {
        pipeline.push(search);
    }

    pipeline.push(facet(sort_spec(EnrollmentSort::Newest), page, buyer_projection()));
    pipeline
}

/// 관리자 전체 수강 신청 목록
pub fn admin_enrollments_pipeline(filter: &AdminListFilter, page: &PageRequest) -> Vec<Document> {
    let mut pipeline = vec![doc! { "$match": admin_match(filter) }];

    pipeline.extend(lookup_one(collections::USERS, "userId", "user"));
    pipeline.extend(lookup_one(collections::COURSES, "courseId", "course"));
    pipeline.extend(lookup_one(collections::TUTORS, "tutorId", "tutor"));

    if let Some(search) = search_match(
        filter.search.as_deref(),
        &["user.name", "user.email", "course.title", "tutor.name"],
    ) {
        pipeline.push(search);
    }

    pipeline.push(facet(sort_spec(filter.sort), page, admin_projection()));
    pipeline
}

fn admin_match(filter: &AdminListFilter) -> Document {
    let mut criteria = Document::new();

    if let Some(status) = filter.status {
        criteria.insert("status", status.as_str());
    }

    let mut range = Document::new();
    if let Some(start) = filter.start {
        range.insert("$gte", bson::DateTime::from_millis(start.timestamp_millis()));
    }
    if let Some(end) = filter.end {
        range.insert("$lte", bson::DateTime::from_millis(end.timestamp_millis()));
    }
    if !range.is_empty() {
        criteria.insert("dateOfEnrollment", range);
    }

    criteria
}

/// `$lookup` 후 단일 문서로 `$unwind`
fn lookup_one(from: &str, local_field: &str, as_field: &str) -> [Document; 2] {
    [
        doc! {
            "$lookup": {
                "from": from,
                "localField": local_field,
                "foreignField": "_id",
                "as": as_field,
            }
        },
        doc! { "$unwind": format!("${}", as_field) },
    ]
}

/// 여러 조인 필드에 대한 대소문자 무시 부분 일치 조건
fn search_match(search: Option<&str>, fields: &[&str]) -> Option<Document> {
    let search = search.map(str::trim).filter(|s| !s.is_empty())?;
    let pattern = escape_regex(search);

    let conditions: Vec<Document> = fields
        .iter()
        .map(|field| {
            let mut condition = Document::new();
            condition.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
            condition
        })
        .collect();

    Some(doc! { "$match": { "$or": conditions } })
}

/// 정렬 키별 정렬 조건. 동률일 때 최신순, 마지막으로 `_id`로 순서를 고정합니다.
fn sort_spec(sort: EnrollmentSort) -> Document {
    match sort {
        EnrollmentSort::Newest => doc! { "dateOfEnrollment": -1, "_id": -1 },
        EnrollmentSort::Oldest => doc! { "dateOfEnrollment": 1, "_id": 1 },
        EnrollmentSort::PriceAsc => doc! { "price": 1, "dateOfEnrollment": -1, "_id": -1 },
        EnrollmentSort::PriceDesc => doc! { "price": -1, "dateOfEnrollment": -1, "_id": -1 },
        EnrollmentSort::BuyerName => doc! { "user.name": 1, "dateOfEnrollment": -1, "_id": -1 },
        EnrollmentSort::CourseTitle => doc! { "course.title": 1, "dateOfEnrollment": -1, "_id": -1 },
    }
}

fn facet(sort: Document, page: &PageRequest, projection: Document) -> Document {
    let skip = i64::try_from(page.skip()).unwrap_or(i64::MAX);
    let limit = i64::try_from(page.limit).unwrap_or(i64::MAX);

    doc! {
        "$facet": {
            "items": [
                { "$sort": sort },
                { "$skip": skip },
                { "$limit": limit },
                { "$project": projection },
            ],
            "total": [
                { "$count": "count" },
            ],
        }
    }
}

fn buyer_projection() -> Document {
    doc! {
        "_id": 0,
        "id": { "$toString": "$_id" },
        "price": 1,
        "status": 1,
        "paymentMethod": 1,
        "dateOfEnrollment": { "$dateToString": { "format": DATE_FORMAT, "date": "$dateOfEnrollment" } },
        "course": {
            "id": { "$toString": "$course._id" },
            "title": "$course.title",
            "thumbnail": "$course.thumbnail",
        },
        "tutor": {
            "id": { "$toString": "$tutor._id" },
            "name": "$tutor.name",
        },
    }
}

fn admin_projection() -> Document {
    doc! {
        "_id": 0,
        "id": { "$toString": "$_id" },
        "price": 1,
        "status": 1,
        "paymentId": 1,
        "paymentMethod": 1,
        "dateOfEnrollment": { "$dateToString": { "format": DATE_FORMAT, "date": "$dateOfEnrollment" } },
        "user": {
            "id": { "$toString": "$user._id" },
            "name": "$user.name",
            "email": "$user.email",
        },
        "course": {
            "id": { "$toString": "$course._id" },
            "title": "$course.title",
            "thumbnail": "$course.thumbnail",
        },
        "tutor": {
            "id": { "$toString": "$tutor._id" },
            "name": "$tutor.name",
        },
    }
}

/// `$facet` 단계의 출력 문서
#[derive(Debug, Deserialize)]
pub struct FacetResult<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Vec<CountDoc>,
}

#[derive(Debug, Deserialize)]
pub struct CountDoc {
    pub count: i64,
}

impl<T> FacetResult<T> {
    pub fn into_page(self) -> Page<T> {
        let total_count = self
            .total
            .first()
            .map(|c| c.count.max(0) as u64)
            .unwrap_or(0);

        Page {
            items: self.items,
            total_count,
        }
    }
}
