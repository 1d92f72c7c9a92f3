//! Web API Module
//!
//! Exposes the RESTful endpoints of the career recommender.
//! All endpoints speak JSON; there is no session or token issuance,
//! login simply verifies credentials and returns the profile.

use crate::recommender::{CareerRecommender, RecommenderConfig, ScoredCareer};
use crate::store::{StoreError, UserStore};
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared application state
pub struct AppState {
    pub store: UserStore,
    pub recommender: CareerRecommender,
}

impl AppState {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Ok(Self {
            store: UserStore::new(data_dir)?,
            recommender: CareerRecommender::new(RecommenderConfig::default()),
        })
    }
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ProfileUpdateRequest {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub experience_level: String,
}

#[derive(Deserialize)]
pub struct SkillInput {
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
}

fn default_experience_level() -> String {
    "beginner".to_string()
}

#[derive(Deserialize)]
pub struct SaveRecommendationsRequest {
    #[serde(default)]
    pub recommendations: Vec<ScoredCareer>,
}

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<ScoredCareer>,
}

/// Standard error body: `{"detail": <message>}`
fn detail(message: impl std::fmt::Display) -> serde_json::Value {
    json!({ "detail": message.to_string() })
}

// ============================================================
// API HANDLERS
// ============================================================

/// Service banner
async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "AI Career Recommender API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check endpoint (no dependency checks)
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "message": "API is running"
    }))
}

/// Register a new user
async fn register(
    data: web::Data<Arc<AppState>>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    match data.store.register_user(&req.email, &req.password, &req.name) {
        Ok(user_id) => HttpResponse::Ok().json(json!({
            "success": true,
            "user_id": user_id,
            "message": "User registered successfully"
        })),
        Err(err @ StoreError::UserExists) => HttpResponse::BadRequest().json(detail(err)),
        Err(err) => HttpResponse::InternalServerError().json(detail(err)),
    }
}

/// Verify credentials and return the user's profile
async fn login(data: web::Data<Arc<AppState>>, req: web::Json<LoginRequest>) -> impl Responder {
    match data.store.login(&req.email, &req.password) {
        Ok(user) => HttpResponse::Ok().json(json!({
            "success": true,
            "user": user
        })),
        Err(err @ (StoreError::UserNotFound | StoreError::InvalidPassword)) => {
            HttpResponse::Unauthorized().json(detail(err))
        }
        Err(err) => HttpResponse::InternalServerError().json(detail(err)),
    }
}

/// Look up a user by id
async fn get_user(data: web::Data<Arc<AppState>>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match data.store.get_user_by_id(&user_id) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(err @ StoreError::UserNotFound) => HttpResponse::NotFound().json(detail(err)),
        Err(err) => HttpResponse::InternalServerError().json(detail(err)),
    }
}

/// Replace the user's skills, interests, and experience level
async fn update_profile(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    req: web::Json<ProfileUpdateRequest>,
) -> impl Responder {
    let user_id = path.into_inner();
    let body = req.into_inner();

    match data
        .store
        .update_profile(&user_id, body.skills, body.interests, body.experience_level)
    {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Profile updated successfully"
        })),
        Err(err @ StoreError::UserNotFound) => HttpResponse::NotFound().json(detail(err)),
        Err(err) => HttpResponse::InternalServerError().json(detail(err)),
    }
}

/// Score the catalog against the submitted skills
async fn get_recommendations(
    data: web::Data<Arc<AppState>>,
    req: web::Json<SkillInput>,
) -> impl Responder {
    let recommendations =
        data.recommender
            .recommend(&req.skills, &req.experience_level, &req.interests);

    HttpResponse::Ok().json(RecommendationsResponse { recommendations })
}

/// Persist a recommendation list for the user
async fn save_recommendations(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    req: web::Json<SaveRecommendationsRequest>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .store
        .save_recommendations(&user_id, &req.recommendations)
    {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Recommendations saved successfully"
        })),
        Err(err @ StoreError::UserNotFound) => HttpResponse::NotFound().json(detail(err)),
        Err(err) => HttpResponse::InternalServerError().json(detail(err)),
    }
}

/// Static skill suggestions, grouped by category
async fn skill_suggestions() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "programming": ["Python", "JavaScript", "Java", "C++", "React", "Node.js", "Angular", "Vue.js"],
        "data_science": ["Machine Learning", "Data Analysis", "SQL", "Pandas", "NumPy", "TensorFlow", "PyTorch"],
        "design": ["UI/UX Design", "Graphic Design", "Figma", "Adobe Creative Suite", "Prototyping"],
        "business": ["Project Management", "Business Analysis", "Digital Marketing", "Sales", "Strategy"],
        "technical": ["AWS", "Docker", "Kubernetes", "DevOps", "System Administration", "Cybersecurity"]
    }))
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Register all routes; shared between the server and the tests
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/auth/register", web::post().to(register))
        .route("/auth/login", web::post().to(login))
        .route("/user/{user_id}", web::get().to(get_user))
        .route("/user/{user_id}/profile", web::put().to(update_profile))
        .route("/recommendations", web::post().to(get_recommendations))
        .route(
            "/recommendations/save/{user_id}",
            web::post().to(save_recommendations),
        )
        .route("/skills/suggestions", web::get().to(skill_suggestions));
}

/// Configure and run the API server
pub async fn run_server(host: &str, port: u16, data_dir: &str) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(data_dir).expect("Failed to initialize app state"));

    println!("🚀 Career Recommender API starting at http://{}:{}", host, port);
    println!("📚 API Endpoints:");
    println!("   GET  /                            - Service banner");
    println!("   GET  /health                      - Health check");
    println!("   POST /auth/register               - Register user");
    println!("   POST /auth/login                  - Login");
    println!("   GET  /user/:id                    - Get user");
    println!("   PUT  /user/:id/profile            - Update profile");
    println!("   POST /recommendations             - Get recommendations");
    println!("   POST /recommendations/save/:id    - Save recommendations");
    println!("   GET  /skills/suggestions          - Skill suggestions");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(routes)
    })
    .bind((host, port))?
    .run()
    .await
}
