//! HTTP handlers and route configuration.

mod auth;
mod comments;
mod posts;
mod users;

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};

/// Configure all application routes.
///
/// Every (method, resource) pair is registered once at startup; the
/// default service carries the dispatcher's documented fall-through for
/// resources nothing was registered for.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(auth::login))
        .route("/register", web::post().to(auth::register))
        .route("/users_management", web::get().to(users::management))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::list))
                .route("/{id}", web::get().to(users::get))
                .route("/{id}", web::put().to(users::update)),
        )
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list))
                .route("", web::post().to(posts::create))
                .route("/{id}", web::get().to(posts::get))
                .route("/{id}", web::put().to(posts::update))
                .route("/{id}", web::delete().to(posts::delete)),
        )
        .service(
            web::scope("/comments")
                .route("", web::get().to(comments::list))
                .route("", web::post().to(comments::create))
                .route("/{id}", web::get().to(comments::get))
                .route("/{id}", web::put().to(comments::update))
                .route("/{id}", web::delete().to(comments::delete)),
        )
        .default_service(web::route().to(unmatched));
}

/// Fall-through for unregistered resources: GET answers an empty object,
/// POST an empty 201, PUT a 404, anything else 204.
async fn unmatched(req: HttpRequest) -> HttpResponse {
    let method = req.method();

    if *method == Method::GET {
        HttpResponse::Ok().json(serde_json::json!({}))
    } else if *method == Method::POST {
        HttpResponse::Created().finish()
    } else if *method == Method::PUT {
        HttpResponse::NotFound().finish()
    } else {
        HttpResponse::NoContent().finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use async_trait::async_trait;
    use chrono::Utc;

    use quill_core::domain::{Comment, NewComment, NewPost, NewUser, Post, User, UserSummary};
    use quill_core::error::RepoError;
    use quill_core::ports::{BaseRepository, CommentRepository, PostRepository, UserRepository};

    use crate::state::AppState;

    fn sample_user(id: i32) -> User {
        User {
            id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            profile_image_url: "default_image_url".to_string(),
            bio: "first programmer".to_string(),
            created_on: Utc::now(),
            active: true,
        }
    }

    fn sample_post(id: i32) -> Post {
        Post {
            id,
            user_id: 7,
            title: "Hello".to_string(),
            content: "First post".to_string(),
            created_on: Utc::now(),
            updated_on: Utc::now(),
            published: true,
        }
    }

    /// Stub user repository holding one fixed record.
    struct OneUser(User);

    #[async_trait]
    impl BaseRepository<User, NewUser, i32> for OneUser {
        async fn list(&self) -> Result<Vec<User>, RepoError> {
            Ok(vec![self.0.clone()])
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
            Ok((id == self.0.id).then(|| self.0.clone()))
        }

        async fn create(&self, _draft: NewUser) -> Result<i32, RepoError> {
            Ok(self.0.id)
        }

        async fn update(&self, id: i32, _draft: NewUser) -> Result<bool, RepoError> {
            Ok(id == self.0.id)
        }

        async fn delete(&self, _id: i32) -> Result<(), RepoError> {
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for OneUser {
        async fn find_by_credentials(
            &self,
            username: &str,
            password: &str,
        ) -> Result<Option<User>, RepoError> {
            let matches = username == self.0.username && password == self.0.password;
            Ok(matches.then(|| self.0.clone()))
        }

        async fn list_management(&self) -> Result<Vec<UserSummary>, RepoError> {
            Ok(vec![UserSummary {
                username: self.0.username.clone(),
                first_name: self.0.first_name.clone(),
                last_name: self.0.last_name.clone(),
                email: self.0.email.clone(),
            }])
        }
    }

    /// Stub post repository holding one fixed record.
    struct OnePost(Post);

    #[async_trait]
    impl BaseRepository<Post, NewPost, i32> for OnePost {
        async fn list(&self) -> Result<Vec<Post>, RepoError> {
            Ok(vec![self.0.clone()])
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
            Ok((id == self.0.id).then(|| self.0.clone()))
        }

        async fn create(&self, _draft: NewPost) -> Result<i32, RepoError> {
            Ok(self.0.id)
        }

        async fn update(&self, id: i32, _draft: NewPost) -> Result<bool, RepoError> {
            Ok(id == self.0.id)
        }

        async fn delete(&self, _id: i32) -> Result<(), RepoError> {
            Ok(())
        }
    }

    #[async_trait]
    impl PostRepository for OnePost {
        async fn find_by_author(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
            if user_id == self.0.user_id {
                Ok(vec![self.0.clone()])
            } else {
                Ok(vec![])
            }
        }
    }

    /// Stub comment repository with no rows at all.
    struct NoComments;

    #[async_trait]
    impl BaseRepository<Comment, NewComment, i32> for NoComments {
        async fn list(&self) -> Result<Vec<Comment>, RepoError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Comment>, RepoError> {
            Ok(None)
        }

        async fn create(&self, _draft: NewComment) -> Result<i32, RepoError> {
            Ok(1)
        }

        async fn update(&self, _id: i32, _draft: NewComment) -> Result<bool, RepoError> {
            Ok(false)
        }

        async fn delete(&self, _id: i32) -> Result<(), RepoError> {
            Ok(())
        }
    }

    #[async_trait]
    impl CommentRepository for NoComments {
        async fn find_by_post(&self, _post_id: i32) -> Result<Vec<Comment>, RepoError> {
            Ok(vec![])
        }
    }

    fn state() -> AppState {
        AppState {
            users: Arc::new(OneUser(sample_user(7))),
            posts: Arc::new(OnePost(sample_post(3))),
            comments: Arc::new(NoComments),
        }
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state()))
                    .configure(super::configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn single_user_view_matches_the_requested_id() {
        let app = app!();

        let req = test::TestRequest::get().uri("/users/7").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["id"], 7);
        assert_eq!(body["username"], "ada");
        // The detail view keeps the password column; list views drop it.
        assert_eq!(body["password"], "hunter2");
    }

    #[actix_web::test]
    async fn missing_user_reads_as_null() {
        let app = app!();

        let req = test::TestRequest::get().uri("/users/999").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "null");
    }

    #[actix_web::test]
    async fn user_list_omits_passwords() {
        let app = app!();

        let req = test::TestRequest::get().uri("/users").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["username"], "ada");
        assert!(body[0].get("password").is_none());
    }

    #[actix_web::test]
    async fn login_with_wrong_password_rejects_without_a_token() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({ "username": "ada", "password": "wrong" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!({ "valid": false }));
    }

    #[actix_web::test]
    async fn login_with_matching_credentials_returns_the_row_id() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({ "username": "ada", "password": "hunter2" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!({ "valid": true, "token": 7 }));
    }

    #[actix_web::test]
    async fn register_answers_created_with_the_new_token() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(serde_json::json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "username": "ada",
                "email": "ada@example.com",
                "password": "hunter2",
                "bio": "first programmer"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "valid": true, "token": 7 }));
    }

    #[actix_web::test]
    async fn updating_a_missing_post_is_404() {
        let app = app!();

        let req = test::TestRequest::put()
            .uri("/posts/999")
            .set_json(serde_json::json!({
                "user_id": 7,
                "title": "ghost",
                "content": "no row",
                "published": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn updating_a_known_post_is_204() {
        let app = app!();

        let req = test::TestRequest::put()
            .uri("/posts/3")
            .set_json(serde_json::json!({
                "user_id": 7,
                "title": "Hello again",
                "content": "edited",
                "published": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn creating_a_post_returns_the_bare_id() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(serde_json::json!({
                "user_id": 7,
                "title": "Hello",
                "content": "First post",
                "published": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(test::read_body(resp).await, "3");
    }

    #[actix_web::test]
    async fn deleting_a_missing_comment_is_still_204() {
        let app = app!();

        let req = test::TestRequest::delete().uri("/comments/12").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn unknown_resource_get_answers_an_empty_object() {
        let app = app!();

        let req = test::TestRequest::get().uri("/widgets").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "{}");
    }

    #[actix_web::test]
    async fn unknown_resource_delete_answers_204() {
        let app = app!();

        let req = test::TestRequest::delete().uri("/widgets/4").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn comments_can_filter_by_post() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/comments?post_id=2")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!([]));
    }
}
