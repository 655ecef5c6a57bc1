//! Serialization policy demos
//!
//! Field names are snake_case on the wire, absent values are omitted, and
//! dates use the `yyyy-MM-dd` / `yyyy-MM-dd HH:mm:ss` formats.

use actix_web::web;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use hse_shared::serialization::{self, datetime, one_or_many};
use hse_shared::ApiResponse;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/user", web::get().to(get_user))
        .route("/user", web::post().to(create_user))
        .route("/users", web::get().to(list_users))
        .route("/user-with-null", web::get().to(user_with_null))
        .route("/user-detail", web::get().to(user_detail));
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub is_active: Option<bool>,

    #[serde(default, with = "datetime::option")]
    pub birth_date: Option<NaiveDate>,

    #[serde(default, with = "datetime::option")]
    pub created_at: Option<NaiveDateTime>,

    /// Accepts a single tag as well as a list
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileDto {
    pub real_name: Option<String>,
    pub id_card_number: Option<String>,
    pub home_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetailDto {
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    pub user_profile: Option<UserProfileDto>,
}

fn sample_created_at() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 1, 1).and_then(|date| date.and_hms_opt(10, 0, 0))
}

/// GET /api/example/json/user
pub async fn get_user() -> ApiResponse<UserDto> {
    ApiResponse::ok_with(UserDto {
        user_id: Some(1),
        user_name: Some("张三".to_string()),
        email_address: Some("zhangsan@example.com".to_string()),
        phone_number: Some("13800138000".to_string()),
        is_active: Some(true),
        created_at: sample_created_at(),
        ..Default::default()
    })
}

/// POST /api/example/json/user: echoes the body with server-assigned fields
pub async fn create_user(body: web::Json<UserDto>) -> ApiResponse<UserDto> {
    let user = UserDto {
        user_id: Some(2),
        is_active: Some(true),
        created_at: Some(serialization::now_naive()),
        ..body.into_inner()
    };
    ApiResponse::ok_with(user)
}

/// GET /api/example/json/users
pub async fn list_users() -> ApiResponse<Vec<UserDto>> {
    ApiResponse::ok_with(vec![
        UserDto {
            user_id: Some(1),
            user_name: Some("张三".to_string()),
            email_address: Some("zhangsan@example.com".to_string()),
            is_active: Some(true),
            ..Default::default()
        },
        UserDto {
            user_id: Some(2),
            user_name: Some("李四".to_string()),
            email_address: Some("lisi@example.com".to_string()),
            is_active: Some(false),
            ..Default::default()
        },
    ])
}

/// GET /api/example/json/user-with-null: `phone_number` is absent from the output
pub async fn user_with_null() -> ApiResponse<UserDto> {
    ApiResponse::ok_with(UserDto {
        user_id: Some(3),
        user_name: Some("王五".to_string()),
        email_address: Some("wangwu@example.com".to_string()),
        phone_number: None,
        is_active: Some(true),
        ..Default::default()
    })
}

/// GET /api/example/json/user-detail
pub async fn user_detail() -> ApiResponse<UserDetailDto> {
    ApiResponse::ok_with(UserDetailDto {
        user_id: Some(1),
        user_name: Some("张三".to_string()),
        user_profile: Some(UserProfileDto {
            real_name: Some("张三丰".to_string()),
            id_card_number: Some("110101199001011234".to_string()),
            home_address: Some("北京市朝阳区".to_string()),
        }),
    })
}
