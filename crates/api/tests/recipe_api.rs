//! HTTP-level integration tests for the `recipes` namespace.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, recipe_payload, seed_category};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_on_empty_store_returns_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/recipes/list").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_on_empty_store_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/recipes/getById?id=999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn by_category_with_zero_recipes_returns_empty_array(pool: PgPool) {
    let category_id = seed_category(&pool, "Empty").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/recipes/byCategory?categoryId={category_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_with_malformed_id_returns_400_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/recipes/getById?id=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Query rejections share the JSON envelope with body rejections.
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

/// The list shape flattens recipe scalars and attaches each recipe's
/// own videos and images, never a sibling's.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_populates_each_recipe_with_its_own_media(pool: PgPool) {
    let category_id = seed_category(&pool, "Bakes").await;

    let mut first = recipe_payload("Brownie", category_id);
    first["videos"][0]["url"] = serde_json::json!("https://videos.example/brownie");
    first["images"][0]["url"] = serde_json::json!("https://images.example/brownie.jpg");
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/recipes/create", first).await;

    let mut second = recipe_payload("Scone", category_id);
    second["videos"] = serde_json::json!([]);
    second["images"] = serde_json::json!([
        { "url": "https://images.example/scone-1.jpg" },
        { "url": "https://images.example/scone-2.jpg" }
    ]);
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/recipes/create", second).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/recipes/list").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let recipes = json.as_array().unwrap();
    assert_eq!(recipes.len(), 2);

    // Insertion order, scalars flattened at the top level.
    assert_eq!(recipes[0]["title"], "Brownie");
    assert_eq!(recipes[1]["title"], "Scone");

    let brownie_videos = recipes[0]["videos"].as_array().unwrap();
    assert_eq!(brownie_videos.len(), 1);
    assert_eq!(brownie_videos[0]["url"], "https://videos.example/brownie");
    let brownie_images = recipes[0]["images"].as_array().unwrap();
    assert_eq!(brownie_images.len(), 1);
    assert_eq!(brownie_images[0]["url"], "https://images.example/brownie.jpg");

    assert_eq!(recipes[1]["videos"].as_array().unwrap().len(), 0);
    let scone_images = recipes[1]["images"].as_array().unwrap();
    assert_eq!(scone_images.len(), 2);
    assert_eq!(scone_images[0]["url"], "https://images.example/scone-1.jpg");
    assert_eq!(scone_images[1]["url"], "https://images.example/scone-2.jpg");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_returns_match_or_null(pool: PgPool) {
    let category_id = seed_category(&pool, "Soups").await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/recipes/create", recipe_payload("Gazpacho", category_id)).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/recipes/search?title=Gazpacho").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Gazpacho");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/recipes/search?title=Nothing").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json.is_null());
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_get_by_id_round_trips(pool: PgPool) {
    let category_id = seed_category(&pool, "Bakes").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/recipes/create", recipe_payload("Brownie", category_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/recipes/getById?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // Scalars round-trip.
    assert_eq!(json["title"], "Brownie");
    assert_eq!(json["description"], "A test recipe");
    assert_eq!(json["prep_time_minutes"], 45);
    assert_eq!(json["difficulty"], "easy");
    assert_eq!(json["category_id"], category_id);
    assert_eq!(json["category"]["name"], "Bakes");

    // Nested child counts match the payload.
    assert_eq!(json["ingredients"].as_array().unwrap().len(), 1);
    assert_eq!(json["videos"].as_array().unwrap().len(), 1);
    assert_eq!(json["images"].as_array().unwrap().len(), 1);
    assert_eq!(json["comments"].as_array().unwrap().len(), 0);
}

/// Comments persist with the create, round-trip through `getById`,
/// and survive a full-record replace (update reconciles ingredients,
/// videos, and images only).
#[sqlx::test(migrations = "../db/migrations")]
async fn create_persists_comments_and_update_preserves_them(pool: PgPool) {
    let category_id = seed_category(&pool, "Desserts").await;

    let mut payload = recipe_payload("Tiramisu", category_id);
    payload["comments"] = serde_json::json!([
        { "body": "Family favourite." },
        { "body": "Less coffee next time." }
    ]);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/recipes/create", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/recipes/getById?id={id}")).await).await;
    let comments = json["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["body"], "Family favourite.");
    assert_eq!(comments[1]["body"], "Less coffee next time.");

    let update = serde_json::json!({
        "id": id,
        "title": "Tiramisu",
        "description": "Revised",
        "body": "Layer and chill.",
        "prep_time_minutes": 30,
        "difficulty": "medium",
        "published_at": chrono::Utc::now().to_rfc3339(),
        "category_id": category_id,
        "ingredients": [],
        "videos": [],
        "images": []
    });
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/recipes/update", update).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The replace emptied the other children but not the comments.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/recipes/getById?id={id}")).await).await;
    assert_eq!(json["ingredients"].as_array().unwrap().len(), 0);
    assert_eq!(json["comments"].as_array().unwrap().len(), 2);
    assert_eq!(json["comments"][0]["body"], "Family favourite.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unknown_category_returns_400_and_writes_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/recipes/create", recipe_payload("Orphan", 12345)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The nested write is atomic: no recipe, no children.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/recipes/list").await).await;
    assert_eq!(json, serde_json::json!([]));
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/ingredients/list").await).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_invalid_difficulty_is_rejected_before_any_write(pool: PgPool) {
    let category_id = seed_category(&pool, "Desserts").await;

    let mut payload = recipe_payload("Flan", category_id);
    payload["difficulty"] = serde_json::json!("Fácil");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/recipes/create", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/recipes/list").await).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_nonpositive_quantity_fails_validation(pool: PgPool) {
    let category_id = seed_category(&pool, "Desserts").await;

    let mut payload = recipe_payload("Flan", category_id);
    payload["ingredients"][0]["quantity"] = serde_json::json!(0.0);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/recipes/create", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/recipes/list").await).await;
    assert_eq!(json, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Update (replace semantics) and appendChildren (additive semantics)
// ---------------------------------------------------------------------------

/// `recipes/update` is a full-record replace: the stored children end
/// up exactly matching the payload's lists, not merged with the old ones.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_replaces_scalars_and_children(pool: PgPool) {
    let category_id = seed_category(&pool, "Bakes").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/recipes/create", recipe_payload("Draft", category_id)).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let update = serde_json::json!({
        "id": id,
        "title": "Final",
        "description": "Revised",
        "body": "Knead, prove, bake.",
        "prep_time_minutes": 90,
        "difficulty": "hard",
        "published_at": chrono::Utc::now().to_rfc3339(),
        "category_id": category_id,
        "ingredients": [
            { "name": "flour", "quantity": 500.0, "unit": "gram" },
            { "name": "water", "quantity": 350.0, "unit": "milliliter" }
        ],
        "videos": [],
        "images": []
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/recipes/update", update).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/recipes/getById?id={id}")).await).await;
    assert_eq!(json["title"], "Final");
    assert_eq!(json["difficulty"], "hard");

    // Old children (1 ingredient, 1 video, 1 image) are gone;
    // exactly the new list remains.
    let ingredients = json["ingredients"].as_array().unwrap();
    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[0]["name"], "flour");
    assert_eq!(ingredients[1]["name"], "water");
    assert_eq!(json["videos"].as_array().unwrap().len(), 0);
    assert_eq!(json["images"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_recipe_returns_404(pool: PgPool) {
    let category_id = seed_category(&pool, "Bakes").await;

    let mut update = recipe_payload("Ghost", category_id);
    update["id"] = serde_json::json!(424242);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/recipes/update", update).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// `recipes/appendChildren` is the additive path: existing children
/// stay, the payload's children land after them.
#[sqlx::test(migrations = "../db/migrations")]
async fn append_children_is_additive(pool: PgPool) {
    let category_id = seed_category(&pool, "Bakes").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/recipes/create", recipe_payload("Loaf", category_id)).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let append = serde_json::json!({
        "id": id,
        "ingredients": [
            { "name": "salt", "quantity": 10.0, "unit": "gram" }
        ]
    });

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/recipes/appendChildren", append).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/recipes/getById?id={id}")).await).await;
    let ingredients = json["ingredients"].as_array().unwrap();
    assert_eq!(ingredients.len(), 2);
    // Appended after the original, in position order.
    assert_eq!(ingredients[0]["name"], "milk");
    assert_eq!(ingredients[1]["name"], "salt");
    // Scalars untouched.
    assert_eq!(json["title"], "Loaf");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn append_children_to_nonexistent_recipe_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/recipes/appendChildren",
        serde_json::json!({ "id": 7, "ingredients": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_then_get_returns_404_and_second_delete_is_404(pool: PgPool) {
    let category_id = seed_category(&pool, "Bakes").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/recipes/create", recipe_payload("Doomed", category_id)).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/recipes/delete", serde_json::json!({ "id": id })).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/recipes/getById?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Not a silent success the second time.
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/recipes/delete", serde_json::json!({ "id": id })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Children cascaded with the parent.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/ingredients/list").await).await;
    assert_eq!(json, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn desserts_flan_scenario(pool: PgPool) {
    let category_id = seed_category(&pool, "Desserts").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/recipes/create", recipe_payload("Flan", category_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/recipes/byCategory?categoryId={category_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let recipes = json.as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["title"], "Flan");

    let ingredients = recipes[0]["ingredients"].as_array().unwrap();
    assert_eq!(ingredients.len(), 1);
    assert_eq!(ingredients[0]["name"], "milk");
    assert_eq!(ingredients[0]["unit"], "liter");
}
